use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use crate::enums::{TipoDocumento, TipoPersona};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClienteId(pub Uuid);

impl ClienteId {
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

impl AggregateId for ClienteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClienteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Cliente/destinatario
///
/// `description` lleva el nombre completo o la razón social; para persona
/// natural los apellidos y nombres van además separados para los formularios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(flatten)]
    pub base: BaseAggregate<ClienteId>,

    #[serde(rename = "tipoPersona", default)]
    pub tipo_persona: TipoPersona,

    #[serde(rename = "tipoDocumento")]
    pub tipo_documento: TipoDocumento,

    #[serde(rename = "numeroDocumento")]
    pub numero_documento: String,

    /// Apellidos (solo persona natural)
    #[serde(default)]
    pub apellidos: String,

    /// Nombres (solo persona natural)
    #[serde(default)]
    pub nombres: String,

    #[serde(default)]
    pub direccion: String,

    /// Código ubigeo del domicilio (6 dígitos), opcional
    #[serde(default)]
    pub ubigeo: String,

    #[serde(default)]
    pub telefono: String,

    #[serde(default)]
    pub email: String,
}

impl Cliente {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        tipo_persona: TipoPersona,
        tipo_documento: TipoDocumento,
        numero_documento: String,
        direccion: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ClienteId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            tipo_persona,
            tipo_documento,
            numero_documento,
            apellidos: String::new(),
            nombres: String::new(),
            direccion,
            ubigeo: String::new(),
            telefono: String::new(),
            email: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ClienteDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.tipo_persona = dto.tipo_persona;
        self.tipo_documento = dto.tipo_documento;
        self.numero_documento = dto.numero_documento.clone();
        self.apellidos = dto.apellidos.clone().unwrap_or_default();
        self.nombres = dto.nombres.clone().unwrap_or_default();
        self.direccion = dto.direccion.clone().unwrap_or_default();
        self.ubigeo = dto.ubigeo.clone().unwrap_or_default();
        self.telefono = dto.telefono.clone().unwrap_or_default();
        self.email = dto.email.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre o razón social no puede estar vacío".into());
        }
        self.tipo_documento.validar_numero(&self.numero_documento)?;

        // Coherencia tipo de persona / tipo de documento
        match self.tipo_persona {
            TipoPersona::Juridico => {
                if self.tipo_documento != TipoDocumento::Ruc {
                    return Err("Una persona jurídica debe identificarse con RUC".into());
                }
            }
            TipoPersona::Natural => {
                if self.tipo_documento == TipoDocumento::Ruc {
                    return Err("Una persona natural no se identifica con RUC".into());
                }
            }
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

impl AggregateRoot for Cliente {
    type Id = ClienteId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "cliente"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "tipoPersona", default)]
    pub tipo_persona: TipoPersona,
    #[serde(rename = "tipoDocumento")]
    pub tipo_documento: TipoDocumento,
    #[serde(rename = "numeroDocumento")]
    pub numero_documento: String,
    pub apellidos: Option<String>,
    pub nombres: Option<String>,
    pub direccion: Option<String>,
    pub ubigeo: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for ClienteDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            tipo_persona: TipoPersona::Natural,
            tipo_documento: TipoDocumento::Dni,
            numero_documento: String::new(),
            apellidos: None,
            nombres: None,
            direccion: None,
            ubigeo: None,
            telefono: None,
            email: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente_natural() -> Cliente {
        Cliente::new_for_insert(
            "CLI-000001".into(),
            "Quispe Mamani, Rosa".into(),
            TipoPersona::Natural,
            TipoDocumento::Dni,
            "45871236".into(),
            "Av. Los Alisos 123".into(),
            None,
        )
    }

    #[test]
    fn test_validate_dni_longitud() {
        let mut c = cliente_natural();
        assert!(c.validate().is_ok());
        c.numero_documento = "458712".into();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_coherencia_persona_documento() {
        let mut c = cliente_natural();
        c.tipo_persona = TipoPersona::Juridico;
        // jurídico con DNI no pasa
        assert!(c.validate().is_err());
        c.tipo_documento = TipoDocumento::Ruc;
        c.numero_documento = "20458712365".into();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_ubigeo() {
        let mut c = cliente_natural();
        c.ubigeo = "150101".into();
        assert!(c.validate().is_ok());
        c.ubigeo = "1501".into();
        assert!(c.validate().is_err());
    }
}
