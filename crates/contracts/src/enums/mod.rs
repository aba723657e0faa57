pub mod estado_sunat;
pub mod motivo_traslado;
pub mod tipo_documento;
pub mod tipo_persona;
pub mod tipo_transporte;
pub mod unidad_medida;

pub use estado_sunat::EstadoSunat;
pub use motivo_traslado::MotivoTraslado;
pub use tipo_documento::TipoDocumento;
pub use tipo_persona::TipoPersona;
pub use tipo_transporte::TipoTransporte;
pub use unidad_medida::UnidadMedida;
