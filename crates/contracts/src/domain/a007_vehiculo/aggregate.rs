use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehiculoId(pub Uuid);

impl VehiculoId {
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

impl AggregateId for VehiculoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VehiculoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Vehículo de un transportista; `description` lleva la placa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehiculo {
    #[serde(flatten)]
    pub base: BaseAggregate<VehiculoId>,

    /// Placa de rodaje (6-7 caracteres alfanuméricos, sin guión)
    pub placa: String,

    #[serde(rename = "transportistaRef")]
    pub transportista_ref: String,

    #[serde(default)]
    pub marca: String,

    #[serde(default)]
    pub modelo: String,
}

impl Vehiculo {
    pub fn new_for_insert(code: String, placa: String, transportista_ref: String) -> Self {
        let placa = placa.trim().to_uppercase();
        let base = BaseAggregate::new(VehiculoId::new_v4(), code, placa.clone());

        Self {
            base,
            placa,
            transportista_ref,
            marca: String::new(),
            modelo: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &VehiculoDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.placa = dto.placa.trim().to_uppercase();
        self.base.description = self.placa.clone();
        self.base.comment = dto.comment.clone();
        self.transportista_ref = dto.transportista_ref.clone().unwrap_or_default();
        self.marca = dto.marca.clone().unwrap_or_default();
        self.modelo = dto.modelo.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        let placa = self.placa.trim();
        if placa.len() < 6 || placa.len() > 7 {
            return Err("La placa debe tener 6 o 7 caracteres".into());
        }
        if !placa.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("La placa solo admite letras y números".into());
        }
        if Uuid::parse_str(&self.transportista_ref).is_err() {
            return Err("El vehículo debe pertenecer a un transportista".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Vehiculo {
    type Id = VehiculoId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "vehiculo"
    }

    fn element_name() -> &'static str {
        "Vehículo"
    }

    fn list_name() -> &'static str {
        "Vehículos"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VehiculoDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub placa: String,
    pub comment: Option<String>,
    #[serde(rename = "transportistaRef")]
    pub transportista_ref: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_placa() {
        let mut v = Vehiculo::new_for_insert(
            "VEH-000001".into(),
            "abc123".into(),
            Uuid::new_v4().to_string(),
        );
        // se normaliza a mayúsculas al crear
        assert_eq!(v.placa, "ABC123");
        assert!(v.validate().is_ok());

        v.placa = "AB-123".into();
        assert!(v.validate().is_err());
        v.placa = "AB123".into();
        assert!(v.validate().is_err());
    }
}
