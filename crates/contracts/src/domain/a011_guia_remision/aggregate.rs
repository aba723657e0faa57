use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use crate::enums::{EstadoSunat, MotivoTraslado, TipoTransporte, UnidadMedida};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuiaRemisionId(pub Uuid);

impl GuiaRemisionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for GuiaRemisionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GuiaRemisionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Línea de la tabla «Bienes a transportar» de una guía
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuiaRemisionLine {
    /// UUID del producto (a004)
    #[serde(rename = "productoRef")]
    pub producto_ref: String,

    /// Descripción del bien tal como viaja en la guía
    pub descripcion: String,

    pub unidad: UnidadMedida,

    pub cantidad: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Guía de remisión remitente (documento)
///
/// El guardado local y el envío a SUNAT son pasos separados; el estado del
/// envío vive en `estado_sunat` y una guía no aceptada puede reenviarse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiaRemision {
    #[serde(flatten)]
    pub base: BaseAggregate<GuiaRemisionId>,

    /// Serie del comprobante (por ejemplo "T001")
    pub serie: String,

    /// Correlativo numérico dentro de la serie
    pub correlativo: i64,

    /// Fecha de emisión (YYYY-MM-DD)
    #[serde(rename = "fechaEmision")]
    pub fecha_emision: String,

    /// Fecha de inicio del traslado (YYYY-MM-DD)
    #[serde(rename = "fechaTraslado")]
    pub fecha_traslado: String,

    pub motivo: MotivoTraslado,

    pub modalidad: TipoTransporte,

    /// UUID del destinatario (a005)
    #[serde(rename = "destinatarioRef")]
    pub destinatario_ref: String,

    /// UUID del transportista (a006)
    #[serde(rename = "transportistaRef")]
    pub transportista_ref: String,

    /// UUID del vehículo (a007); obligatorio solo en transporte privado
    #[serde(rename = "vehiculoRef")]
    pub vehiculo_ref: Option<String>,

    /// UUID del almacén de partida (a008)
    #[serde(rename = "almacenRef")]
    pub almacen_ref: String,

    #[serde(rename = "partidaUbigeo")]
    pub partida_ubigeo: String,

    #[serde(rename = "partidaDireccion")]
    pub partida_direccion: String,

    #[serde(rename = "llegadaUbigeo")]
    pub llegada_ubigeo: String,

    #[serde(rename = "llegadaDireccion")]
    pub llegada_direccion: String,

    /// Peso bruto total en kilogramos
    #[serde(rename = "pesoBruto")]
    pub peso_bruto: f64,

    /// Número de bultos
    pub bultos: i32,

    /// JSON con las líneas de bienes a transportar
    #[serde(rename = "linesJson")]
    pub lines_json: Option<String>,

    #[serde(rename = "estadoSunat", default)]
    pub estado_sunat: EstadoSunat,

    /// Ticket devuelto por SUNAT al aceptar el envío
    #[serde(rename = "sunatTicket")]
    pub sunat_ticket: Option<String>,

    /// Mensaje de error del último envío rechazado
    #[serde(rename = "sunatError")]
    pub sunat_error: Option<String>,
}

impl GuiaRemision {
    /// Número completo del comprobante, como se imprime ("T001-00000045")
    pub fn numero_completo(&self) -> String {
        format!("{}-{:08}", self.serie, self.correlativo)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        serie: String,
        correlativo: i64,
        fecha_emision: String,
        fecha_traslado: String,
        motivo: MotivoTraslado,
        modalidad: TipoTransporte,
        destinatario_ref: String,
        transportista_ref: String,
        almacen_ref: String,
        lines: Vec<GuiaRemisionLine>,
    ) -> Self {
        let numero = format!("{}-{:08}", serie, correlativo);
        let description = format!("{} del {}", numero, fecha_emision);
        let base = BaseAggregate::new(GuiaRemisionId::new_v4(), numero, description);

        let mut guia = Self {
            base,
            serie,
            correlativo,
            fecha_emision,
            fecha_traslado,
            motivo,
            modalidad,
            destinatario_ref,
            transportista_ref,
            vehiculo_ref: None,
            almacen_ref,
            partida_ubigeo: String::new(),
            partida_direccion: String::new(),
            llegada_ubigeo: String::new(),
            llegada_direccion: String::new(),
            peso_bruto: 0.0,
            bultos: 1,
            lines_json: None,
            estado_sunat: EstadoSunat::Pendiente,
            sunat_ticket: None,
            sunat_error: None,
        };
        guia.set_lines(&lines);
        guia
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Deserializar lines_json a líneas
    pub fn parse_lines(&self) -> Vec<GuiaRemisionLine> {
        self.lines_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn set_lines(&mut self, lines: &[GuiaRemisionLine]) {
        self.lines_json = if lines.is_empty() {
            None
        } else {
            serde_json::to_string(lines).ok()
        };
    }

    /// Registrar el resultado de un envío a SUNAT
    pub fn aplicar_resultado_sunat(&mut self, resultado: Result<String, String>) {
        match resultado {
            Ok(ticket) => {
                self.estado_sunat = EstadoSunat::Aceptada;
                self.sunat_ticket = Some(ticket);
                self.sunat_error = None;
            }
            Err(mensaje) => {
                self.estado_sunat = EstadoSunat::Rechazada;
                self.sunat_error = Some(mensaje);
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.serie.trim().is_empty() {
            return Err("La serie es obligatoria".into());
        }
        if self.correlativo <= 0 {
            return Err("El correlativo debe ser positivo".into());
        }
        if self.fecha_emision.trim().is_empty() || self.fecha_traslado.trim().is_empty() {
            return Err("Las fechas de emisión y traslado son obligatorias".into());
        }
        if self.fecha_traslado < self.fecha_emision {
            return Err("La fecha de traslado no puede ser anterior a la emisión".into());
        }
        if Uuid::parse_str(&self.destinatario_ref).is_err() {
            return Err("Debe seleccionarse un destinatario".into());
        }
        if Uuid::parse_str(&self.transportista_ref).is_err() {
            return Err("Debe seleccionarse un transportista".into());
        }
        if self.modalidad == TipoTransporte::Privado && self.vehiculo_ref.is_none() {
            return Err("El transporte privado requiere un vehículo".into());
        }

        if self.partida_ubigeo.len() != 6 {
            return Err("El ubigeo de partida debe tener 6 dígitos".into());
        }
        if self.llegada_ubigeo.len() != 6 {
            return Err("El ubigeo de llegada debe tener 6 dígitos".into());
        }
        if self.llegada_direccion.trim().is_empty() {
            return Err("La dirección de llegada es obligatoria".into());
        }
        // Un traslado debe mover los bienes a otro punto; solo el traslado
        // entre almacenes admite el mismo distrito (con direcciones distintas)
        if self.partida_ubigeo == self.llegada_ubigeo
            && self.partida_direccion.trim() == self.llegada_direccion.trim()
        {
            return Err("El punto de llegada no puede ser igual al de partida".into());
        }

        if self.peso_bruto <= 0.0 {
            return Err("El peso bruto debe ser mayor que cero".into());
        }
        if self.bultos < 1 {
            return Err("Debe indicarse al menos un bulto".into());
        }

        let lines = self.parse_lines();
        if lines.is_empty() {
            return Err("La guía debe tener al menos un bien a transportar".into());
        }
        for line in &lines {
            if line.cantidad <= 0.0 {
                return Err(format!(
                    "La cantidad de «{}» debe ser mayor que cero",
                    line.descripcion
                ));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for GuiaRemision {
    type Id = GuiaRemisionId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "guia_remision"
    }

    fn element_name() -> &'static str {
        "Guía de Remisión"
    }

    fn list_name() -> &'static str {
        "Guías de Remisión"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linea(descripcion: &str, cantidad: f64) -> GuiaRemisionLine {
        GuiaRemisionLine {
            producto_ref: Uuid::new_v4().to_string(),
            descripcion: descripcion.into(),
            unidad: UnidadMedida::Niu,
            cantidad,
        }
    }

    fn guia_base() -> GuiaRemision {
        let mut guia = GuiaRemision::new_for_insert(
            "T001".into(),
            45,
            "2024-03-10".into(),
            "2024-03-11".into(),
            MotivoTraslado::Venta,
            TipoTransporte::Publico,
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            vec![linea("Agua mineral 625ml", 50.0)],
        );
        guia.partida_ubigeo = "150101".into();
        guia.partida_direccion = "Av. Argentina 2456, Lima".into();
        guia.llegada_ubigeo = "040101".into();
        guia.llegada_direccion = "Calle Mercaderes 120, Arequipa".into();
        guia.peso_bruto = 32.5;
        guia.bultos = 3;
        guia
    }

    #[test]
    fn test_numero_completo() {
        let guia = guia_base();
        assert_eq!(guia.numero_completo(), "T001-00000045");
        assert_eq!(guia.base.code, "T001-00000045");
    }

    #[test]
    fn test_validate_ok() {
        assert!(guia_base().validate().is_ok());
    }

    #[test]
    fn test_validate_fechas_invertidas() {
        let mut guia = guia_base();
        guia.fecha_traslado = "2024-03-09".into();
        assert!(guia.validate().is_err());
    }

    #[test]
    fn test_validate_mismo_punto() {
        let mut guia = guia_base();
        guia.llegada_ubigeo = guia.partida_ubigeo.clone();
        guia.llegada_direccion = guia.partida_direccion.clone();
        assert!(guia.validate().is_err());
        // mismo distrito con dirección distinta sí es válido
        guia.llegada_direccion = "Jr. Ancash 350, Lima".into();
        assert!(guia.validate().is_ok());
    }

    #[test]
    fn test_validate_privado_sin_vehiculo() {
        let mut guia = guia_base();
        guia.modalidad = TipoTransporte::Privado;
        assert!(guia.validate().is_err());
        guia.vehiculo_ref = Some(Uuid::new_v4().to_string());
        assert!(guia.validate().is_ok());
    }

    #[test]
    fn test_aplicar_resultado_sunat() {
        let mut guia = guia_base();
        assert_eq!(guia.estado_sunat, EstadoSunat::Pendiente);

        guia.aplicar_resultado_sunat(Err("Serie no autorizada".into()));
        assert_eq!(guia.estado_sunat, EstadoSunat::Rechazada);
        assert!(guia.estado_sunat.puede_enviarse());

        guia.aplicar_resultado_sunat(Ok("1711122334455".into()));
        assert_eq!(guia.estado_sunat, EstadoSunat::Aceptada);
        assert_eq!(guia.sunat_ticket.as_deref(), Some("1711122334455"));
        assert!(guia.sunat_error.is_none());
        assert!(!guia.estado_sunat.puede_enviarse());
    }
}
