use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlmacenId(pub Uuid);

impl AlmacenId {
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

impl AggregateId for AlmacenId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AlmacenId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Almacén físico; punto de partida por defecto de las guías
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Almacen {
    #[serde(flatten)]
    pub base: BaseAggregate<AlmacenId>,

    #[serde(default)]
    pub direccion: String,

    /// Código ubigeo de la sede (6 dígitos)
    #[serde(default)]
    pub ubigeo: String,
}

impl Almacen {
    pub fn new_for_insert(
        code: String,
        description: String,
        direccion: String,
        ubigeo: String,
    ) -> Self {
        let base = BaseAggregate::new(AlmacenId::new_v4(), code, description);
        Self {
            base,
            direccion,
            ubigeo,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &AlmacenDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.direccion = dto.direccion.clone().unwrap_or_default();
        self.ubigeo = dto.ubigeo.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre del almacén no puede estar vacío".into());
        }
        if self.direccion.trim().is_empty() {
            return Err("La dirección del almacén no puede estar vacía".into());
        }
        if !self.ubigeo.is_empty() && self.ubigeo.len() != 6 {
            return Err("El ubigeo debe tener 6 dígitos".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Almacen {
    type Id = AlmacenId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "almacen"
    }

    fn element_name() -> &'static str {
        "Almacén"
    }

    fn list_name() -> &'static str {
        "Almacenes"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlmacenDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    pub direccion: Option<String>,
    pub ubigeo: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
