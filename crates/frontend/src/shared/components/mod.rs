pub mod table_checkbox;
