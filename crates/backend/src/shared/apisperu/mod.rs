pub mod document_lookup;
pub mod invoicing;

use thiserror::Error;

/// Errores de los servicios de apisperu.com
#[derive(Debug, Error)]
pub enum ApisPeruError {
    #[error("El documento consultado no existe")]
    NoEncontrado,

    #[error("Token de apisperu no configurado en config.toml")]
    SinToken,

    #[error("SUNAT rechazó el comprobante: {0}")]
    Rechazo(String),

    #[error("Respuesta HTTP {0} del servicio")]
    Http(u16),

    #[error("Error de red: {0}")]
    Red(#[from] reqwest::Error),

    #[error("Respuesta no reconocida: {0}")]
    Formato(String),
}
