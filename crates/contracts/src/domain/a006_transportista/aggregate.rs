use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use crate::enums::{TipoDocumento, TipoTransporte};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransportistaId(pub Uuid);

impl TransportistaId {
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

impl AggregateId for TransportistaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TransportistaId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Transportista de guías de remisión
///
/// Para transporte público basta el RUC y la razón social de la empresa;
/// para transporte privado se exigen los datos del conductor (DNI, licencia).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transportista {
    #[serde(flatten)]
    pub base: BaseAggregate<TransportistaId>,

    #[serde(rename = "tipoTransporte", default)]
    pub tipo_transporte: TipoTransporte,

    /// RUC de la empresa (transporte público)
    #[serde(default)]
    pub ruc: String,

    /// DNI del conductor (transporte privado)
    #[serde(rename = "conductorDni", default)]
    pub conductor_dni: String,

    /// Nombres del conductor (transporte privado)
    #[serde(rename = "conductorNombres", default)]
    pub conductor_nombres: String,

    /// Licencia de conducir (transporte privado)
    #[serde(rename = "conductorLicencia", default)]
    pub conductor_licencia: String,

    #[serde(default)]
    pub telefono: String,
}

impl Transportista {
    pub fn new_for_insert(
        code: String,
        description: String,
        tipo_transporte: TipoTransporte,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(TransportistaId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            tipo_transporte,
            ruc: String::new(),
            conductor_dni: String::new(),
            conductor_nombres: String::new(),
            conductor_licencia: String::new(),
            telefono: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &TransportistaDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.tipo_transporte = dto.tipo_transporte;
        self.ruc = dto.ruc.clone().unwrap_or_default();
        self.conductor_dni = dto.conductor_dni.clone().unwrap_or_default();
        self.conductor_nombres = dto.conductor_nombres.clone().unwrap_or_default();
        self.conductor_licencia = dto.conductor_licencia.clone().unwrap_or_default();
        self.telefono = dto.telefono.clone().unwrap_or_default();
    }

    /// ¿Los datos del conductor están completos para una guía privada?
    pub fn conductor_completo(&self) -> bool {
        !self.conductor_dni.trim().is_empty()
            && !self.conductor_nombres.trim().is_empty()
            && !self.conductor_licencia.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("La razón social o nombre no puede estar vacío".into());
        }
        match self.tipo_transporte {
            TipoTransporte::Publico => {
                TipoDocumento::Ruc
                    .validar_numero(&self.ruc)
                    .map_err(|_| String::from("El transportista público requiere un RUC de 11 dígitos"))?;
            }
            TipoTransporte::Privado => {
                if !self.conductor_completo() {
                    return Err(
                        "El transporte privado requiere DNI, nombres y licencia del conductor"
                            .into(),
                    );
                }
                TipoDocumento::Dni
                    .validar_numero(&self.conductor_dni)
                    .map_err(|_| String::from("El DNI del conductor debe tener 8 dígitos"))?;
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Transportista {
    type Id = TransportistaId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "transportista"
    }

    fn element_name() -> &'static str {
        "Transportista"
    }

    fn list_name() -> &'static str {
        "Transportistas"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransportistaDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "tipoTransporte", default)]
    pub tipo_transporte: TipoTransporte,
    pub ruc: Option<String>,
    #[serde(rename = "conductorDni")]
    pub conductor_dni: Option<String>,
    #[serde(rename = "conductorNombres")]
    pub conductor_nombres: Option<String>,
    #[serde(rename = "conductorLicencia")]
    pub conductor_licencia: Option<String>,
    pub telefono: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_publico_requiere_ruc() {
        let mut t = Transportista::new_for_insert(
            "TRA-000001".into(),
            "Transportes Andinos SAC".into(),
            TipoTransporte::Publico,
            None,
        );
        assert!(t.validate().is_err());
        t.ruc = "20547896321".into();
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_validate_privado_requiere_conductor() {
        let mut t = Transportista::new_for_insert(
            "TRA-000002".into(),
            "Flota propia".into(),
            TipoTransporte::Privado,
            None,
        );
        assert!(t.validate().is_err());
        t.conductor_dni = "45879632".into();
        t.conductor_nombres = "Juan Pérez Rojas".into();
        t.conductor_licencia = "Q45879632".into();
        assert!(t.validate().is_ok());
    }
}
