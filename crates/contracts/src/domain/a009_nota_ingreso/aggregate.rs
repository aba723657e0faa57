use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotaIngresoId(pub Uuid);

impl NotaIngresoId {
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

impl AggregateId for NotaIngresoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(NotaIngresoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Línea de la tabla «Productos» de una nota de ingreso
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotaIngresoLine {
    /// UUID del producto (a004)
    #[serde(rename = "productoRef")]
    pub producto_ref: String,

    /// Descripción del producto al momento del ingreso
    pub descripcion: String,

    pub cantidad: f64,

    /// Costo unitario de compra
    #[serde(rename = "costoUnitario")]
    pub costo_unitario: f64,
}

impl NotaIngresoLine {
    pub fn importe(&self) -> f64 {
        self.cantidad * self.costo_unitario
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Nota de ingreso a almacén (documento)
///
/// Al asentar (`is_posted`) incrementa el stock de cada producto; al anular
/// el asiento lo revierte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotaIngreso {
    #[serde(flatten)]
    pub base: BaseAggregate<NotaIngresoId>,

    /// Número correlativo (por ejemplo "NI-000045")
    pub numero: String,

    /// Fecha del documento (YYYY-MM-DD)
    pub fecha: String,

    /// UUID del almacén receptor (a008)
    #[serde(rename = "almacenRef")]
    pub almacen_ref: String,

    /// Proveedor (texto libre, como lo consigna el documento físico)
    #[serde(default)]
    pub proveedor: String,

    #[serde(default)]
    pub observacion: String,

    /// JSON con las líneas de la tabla de productos
    #[serde(rename = "linesJson")]
    pub lines_json: Option<String>,
}

impl NotaIngreso {
    pub fn new_for_insert(
        numero: String,
        fecha: String,
        almacen_ref: String,
        proveedor: String,
        lines: Vec<NotaIngresoLine>,
    ) -> Self {
        let description = format!("{} del {}", numero, fecha);
        let base = BaseAggregate::new(NotaIngresoId::new_v4(), numero.clone(), description);

        let mut nota = Self {
            base,
            numero,
            fecha,
            almacen_ref,
            proveedor,
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
    pub fn parse_lines(&self) -> Vec<NotaIngresoLine> {
        self.lines_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn set_lines(&mut self, lines: &[NotaIngresoLine]) {
        self.lines_json = if lines.is_empty() {
            None
        } else {
            serde_json::to_string(lines).ok()
        };
    }

    /// Costo total del ingreso
    pub fn total(&self) -> f64 {
        self.parse_lines().iter().map(|l| l.importe()).sum()
    }

    pub fn update(&mut self, dto: &NotaIngresoDto) {
        self.fecha = dto.fecha.clone();
        self.almacen_ref = dto.almacen_ref.clone().unwrap_or_default();
        self.proveedor = dto.proveedor.clone().unwrap_or_default();
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
            return Err("Debe indicarse el almacén receptor".into());
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
            if line.costo_unitario < 0.0 {
                return Err(format!(
                    "El costo de «{}» no puede ser negativo",
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

impl AggregateRoot for NotaIngreso {
    type Id = NotaIngresoId;

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
        "a009"
    }

    fn collection_name() -> &'static str {
        "nota_ingreso"
    }

    fn element_name() -> &'static str {
        "Nota de Ingreso"
    }

    fn list_name() -> &'static str {
        "Notas de Ingreso"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotaIngresoDto {
    pub id: Option<String>,
    pub fecha: String,
    #[serde(rename = "almacenRef")]
    pub almacen_ref: Option<String>,
    pub proveedor: Option<String>,
    pub observacion: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    pub lines: Vec<NotaIngresoLine>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linea(descripcion: &str, cantidad: f64, costo: f64) -> NotaIngresoLine {
        NotaIngresoLine {
            producto_ref: Uuid::new_v4().to_string(),
            descripcion: descripcion.into(),
            cantidad,
            costo_unitario: costo,
        }
    }

    #[test]
    fn test_total_suma_importes() {
        let nota = NotaIngreso::new_for_insert(
            "NI-000001".into(),
            "2024-03-10".into(),
            Uuid::new_v4().to_string(),
            "Distribuidora Norte".into(),
            vec![linea("Agua 625ml", 10.0, 1.2), linea("Galletas", 5.0, 0.8)],
        );
        assert!((nota.total() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_sin_lineas() {
        let nota = NotaIngreso::new_for_insert(
            "NI-000002".into(),
            "2024-03-10".into(),
            Uuid::new_v4().to_string(),
            String::new(),
            vec![],
        );
        assert!(nota.validate().is_err());
    }

    #[test]
    fn test_validate_cantidad_cero() {
        let nota = NotaIngreso::new_for_insert(
            "NI-000003".into(),
            "2024-03-10".into(),
            Uuid::new_v4().to_string(),
            String::new(),
            vec![linea("Agua 625ml", 0.0, 1.2)],
        );
        let err = nota.validate().unwrap_err();
        assert!(err.contains("Agua 625ml"));
    }

    #[test]
    fn test_lines_json_roundtrip_vacio() {
        let mut nota = NotaIngreso::new_for_insert(
            "NI-000004".into(),
            "2024-03-10".into(),
            Uuid::new_v4().to_string(),
            String::new(),
            vec![linea("Agua", 1.0, 1.0)],
        );
        assert!(nota.lines_json.is_some());
        nota.set_lines(&[]);
        assert!(nota.lines_json.is_none());
        assert!(nota.parse_lines().is_empty());
    }
}
