use serde::{Deserialize, Serialize};

/// Tipo de persona de un cliente/destinatario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TipoPersona {
    /// Persona natural (DNI)
    #[default]
    Natural,
    /// Persona jurídica (RUC)
    Juridico,
}

impl TipoPersona {
    pub fn code(&self) -> &'static str {
        match self {
            TipoPersona::Natural => "natural",
            TipoPersona::Juridico => "juridico",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TipoPersona::Natural => "Persona Natural",
            TipoPersona::Juridico => "Persona Jurídica",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "natural" => Some(TipoPersona::Natural),
            "juridico" => Some(TipoPersona::Juridico),
            _ => None,
        }
    }
}

impl ToString for TipoPersona {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
