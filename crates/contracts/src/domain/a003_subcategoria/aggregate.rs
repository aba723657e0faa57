use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubcategoriaId(pub Uuid);

impl SubcategoriaId {
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

impl AggregateId for SubcategoriaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SubcategoriaId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Subcategoría; siempre pertenece a una categoría (a002)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategoria {
    #[serde(flatten)]
    pub base: BaseAggregate<SubcategoriaId>,

    /// UUID de la categoría padre
    #[serde(rename = "categoriaRef")]
    pub categoria_ref: String,
}

impl Subcategoria {
    pub fn new_for_insert(
        code: String,
        description: String,
        categoria_ref: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(SubcategoriaId::new_v4(), code, description);
        base.comment = comment;
        Self {
            base,
            categoria_ref,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &SubcategoriaDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.categoria_ref = dto.categoria_ref.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre de la subcategoría no puede estar vacío".into());
        }
        if Uuid::parse_str(&self.categoria_ref).is_err() {
            return Err("La subcategoría debe pertenecer a una categoría".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Subcategoria {
    type Id = SubcategoriaId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "subcategoria"
    }

    fn element_name() -> &'static str {
        "Subcategoría"
    }

    fn list_name() -> &'static str {
        "Subcategorías"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubcategoriaDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "categoriaRef")]
    pub categoria_ref: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requiere_categoria() {
        let sub = Subcategoria::new_for_insert(
            "SUB-001".into(),
            "Gaseosas".into(),
            Uuid::new_v4().to_string(),
            None,
        );
        assert!(sub.validate().is_ok());

        let suelta =
            Subcategoria::new_for_insert("SUB-002".into(), "Sueltas".into(), String::new(), None);
        assert!(suelta.validate().is_err());
    }
}
