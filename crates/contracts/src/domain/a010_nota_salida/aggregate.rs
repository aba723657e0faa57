use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotaSalidaId(pub Uuid);

impl NotaSalidaId {
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

impl AggregateId for NotaSalidaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(NotaSalidaId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Línea de la tabla «Productos» de una nota de salida
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotaSalidaLine {
    /// UUID del producto (a004)
    #[serde(rename = "productoRef")]
    pub producto_ref: String,

    /// Descripción del producto al momento de la salida
    pub descripcion: String,

    pub cantidad: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Nota de salida de almacén (documento)
///
/// Al asentar descuenta stock; el asiento falla si alguna línea supera la
/// existencia disponible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotaSalida {
    #[serde(flatten)]
    pub base: BaseAggregate<NotaSalidaId>,

    /// Número correlativo (por ejemplo "NS-000012")
    pub numero: String,

    /// Fecha del documento (YYYY-MM-DD)
    pub fecha: String,

    /// UUID del almacén de origen (a008)
    #[serde(rename = "almacenRef")]
    pub almacen_ref: String,

    /// Motivo de la salida (venta, merma, consumo interno...)
    #[serde(default)]
    pub motivo: String,

    #[serde(default)]
    pub observacion: String,

    /// JSON con las líneas de la tabla de productos
    #[serde(rename = "linesJson")]
    pub lines_json: Option<String>,
}

impl NotaSalida {
    pub fn new_for_insert(
        numero: String,
        fecha: String,
        almacen_ref: String,
        motivo: String,
        lines: Vec<NotaSalidaLine>,
    ) -> Self {
        let description = format!("{} del {}", numero, fecha);
        let base = BaseAggregate::new(NotaSalidaId::new_v4(), numero.clone(), description);

        let mut nota = Self {
            base,
            numero,
            fecha,
            almacen_ref,
            motivo,
            observacion: String::new(),
            lines_json: None,
        };
        nota.set_lines(&lines);
        nota
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Deserializar lines_json a líneas
    pub fn parse_lines(&self) -> Vec<NotaSalidaLine> {
        self.lines_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn set_lines(&mut self, lines: &[NotaSalidaLine]) {
        self.lines_json = if lines.is_empty() {
            None
        } else {
            serde_json::to_string(lines).ok()
        };
    }

    pub fn update(&mut self, dto: &NotaSalidaDto) {
        self.fecha = dto.fecha.clone();
        self.almacen_ref = dto.almacen_ref.clone().unwrap_or_default();
        self.motivo = dto.motivo.clone().unwrap_or_default();
        self.observacion = dto.observacion.clone().unwrap_or_default();
        self.base.comment = dto.comment.clone();
        self.set_lines(&dto.lines);
        self.base.description = format!("{} del {}", self.numero, self.fecha);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.fecha.trim().is_empty() {
            return Err("La fecha del documento es obligatoria".into());
        }
        if Uuid::parse_str(&self.almacen_ref).is_err() {
            return Err("Debe indicarse el almacén de origen".into());
        }
        let lines = self.parse_lines();
        if lines.is_empty() {
            return Err("La nota debe tener al menos un producto".into());
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

impl AggregateRoot for NotaSalida {
    type Id = NotaSalidaId;

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
        "a010"
    }

    fn collection_name() -> &'static str {
        "nota_salida"
    }

    fn element_name() -> &'static str {
        "Nota de Salida"
    }

    fn list_name() -> &'static str {
        "Notas de Salida"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotaSalidaDto {
    pub id: Option<String>,
    pub fecha: String,
    #[serde(rename = "almacenRef")]
    pub almacen_ref: Option<String>,
    pub motivo: Option<String>,
    pub observacion: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    pub lines: Vec<NotaSalidaLine>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
