use crate::enums::TipoDocumento;
use serde::{Deserialize, Serialize};

/// Identidad devuelta por la consulta de documentos (DNI/RUC)
///
/// Forma neutra: el backend traduce aquí la respuesta del servicio externo
/// para que el frontend no dependa de su formato.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentidadConsultada {
    #[serde(rename = "tipoDocumento")]
    pub tipo_documento: TipoDocumento,

    #[serde(rename = "numeroDocumento")]
    pub numero_documento: String,

    /// Nombre completo o razón social
    #[serde(rename = "nombreCompleto")]
    pub nombre_completo: String,

    /// Apellidos (solo DNI)
    #[serde(default)]
    pub apellidos: String,

    /// Nombres (solo DNI)
    #[serde(default)]
    pub nombres: String,

    /// Dirección fiscal (solo RUC)
    #[serde(default)]
    pub direccion: String,

    /// Ubigeo del domicilio fiscal (solo RUC), 6 dígitos o vacío
    #[serde(default)]
    pub ubigeo: String,

    /// Estado del contribuyente ("ACTIVO", "BAJA..."), solo RUC
    #[serde(default)]
    pub estado: String,
}
