pub mod u501_registro_guia;
