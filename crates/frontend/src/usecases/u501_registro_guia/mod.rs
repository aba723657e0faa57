pub mod api;
pub mod state;
pub mod ubigeo_select;
pub mod view;
