pub mod consulta_documento;
pub mod ubigeo;
