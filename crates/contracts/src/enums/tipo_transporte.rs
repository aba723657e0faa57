use serde::{Deserialize, Serialize};

/// Modalidad de transporte de una guía de remisión (catálogo 18 de SUNAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TipoTransporte {
    /// Transporte público (transportista con RUC)
    #[default]
    Publico,
    /// Transporte privado (vehículo y conductor propios)
    Privado,
}

impl TipoTransporte {
    /// Código SUNAT de la modalidad
    pub fn code(&self) -> &'static str {
        match self {
            TipoTransporte::Publico => "01",
            TipoTransporte::Privado => "02",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TipoTransporte::Publico => "Transporte Público",
            TipoTransporte::Privado => "Transporte Privado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(TipoTransporte::Publico),
            "02" => Some(TipoTransporte::Privado),
            _ => None,
        }
    }
}

impl ToString for TipoTransporte {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
