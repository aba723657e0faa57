use crate::enums::EstadoSunat;
use serde::{Deserialize, Serialize};

/// Resultado del registro de una guía
///
/// `guia_id` siempre viene poblado cuando el guardado local tuvo éxito,
/// aunque el envío a SUNAT haya fallado: el estado cuenta esa segunda parte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistroGuiaResponse {
    #[serde(rename = "guiaId")]
    pub guia_id: String,

    /// Número impreso del comprobante ("T001-00000045")
    pub numero: String,

    #[serde(rename = "estadoSunat")]
    pub estado_sunat: EstadoSunat,

    /// Ticket de SUNAT si fue aceptada
    #[serde(rename = "sunatTicket")]
    pub sunat_ticket: Option<String>,

    /// Mensaje de rechazo si el envío falló
    #[serde(rename = "sunatError")]
    pub sunat_error: Option<String>,
}
