use crate::enums::{MotivoTraslado, TipoTransporte, UnidadMedida};
use serde::{Deserialize, Serialize};

/// Línea de bienes del registro de guía
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistroGuiaLine {
    #[serde(rename = "productoRef")]
    pub producto_ref: String,

    pub descripcion: String,

    pub unidad: UnidadMedida,

    pub cantidad: f64,
}

/// Solicitud de registro de una guía de remisión
///
/// El frontend arma esta solicitud con lo reunido en el asistente; el
/// backend valida las reglas cruzadas, persiste, descuenta stock y envía a
/// SUNAT en un solo paso.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistroGuiaRequest {
    /// Serie del comprobante (por ejemplo "T001")
    pub serie: String,

    #[serde(rename = "fechaEmision")]
    pub fecha_emision: String,

    #[serde(rename = "fechaTraslado")]
    pub fecha_traslado: String,

    pub motivo: MotivoTraslado,

    pub modalidad: TipoTransporte,

    #[serde(rename = "destinatarioRef")]
    pub destinatario_ref: String,

    #[serde(rename = "transportistaRef")]
    pub transportista_ref: String,

    #[serde(rename = "vehiculoRef")]
    pub vehiculo_ref: Option<String>,

    /// Almacén de partida; su dirección y ubigeo son el punto de partida
    /// por defecto si no se indican explícitamente
    #[serde(rename = "almacenRef")]
    pub almacen_ref: String,

    #[serde(rename = "partidaUbigeo", default)]
    pub partida_ubigeo: String,

    #[serde(rename = "partidaDireccion", default)]
    pub partida_direccion: String,

    #[serde(rename = "llegadaUbigeo")]
    pub llegada_ubigeo: String,

    #[serde(rename = "llegadaDireccion")]
    pub llegada_direccion: String,

    #[serde(rename = "pesoBruto")]
    pub peso_bruto: f64,

    pub bultos: i32,

    pub lines: Vec<RegistroGuiaLine>,

    /// Si es false, solo guarda la guía (queda Pendiente) sin llamar a SUNAT
    #[serde(rename = "enviarSunat", default = "default_enviar")]
    pub enviar_sunat: bool,
}

fn default_enviar() -> bool {
    true
}
