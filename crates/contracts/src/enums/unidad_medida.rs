use serde::{Deserialize, Serialize};

/// Unidades de medida (códigos UN/ECE usados por SUNAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UnidadMedida {
    /// Unidad (bienes)
    #[default]
    Niu,
    /// Kilogramo
    Kgm,
    /// Litro
    Ltr,
    /// Metro
    Mtr,
    /// Caja
    Bx,
}

impl UnidadMedida {
    pub fn code(&self) -> &'static str {
        match self {
            UnidadMedida::Niu => "NIU",
            UnidadMedida::Kgm => "KGM",
            UnidadMedida::Ltr => "LTR",
            UnidadMedida::Mtr => "MTR",
            UnidadMedida::Bx => "BX",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnidadMedida::Niu => "Unidad",
            UnidadMedida::Kgm => "Kilogramo",
            UnidadMedida::Ltr => "Litro",
            UnidadMedida::Mtr => "Metro",
            UnidadMedida::Bx => "Caja",
        }
    }

    pub fn all() -> Vec<UnidadMedida> {
        vec![
            UnidadMedida::Niu,
            UnidadMedida::Kgm,
            UnidadMedida::Ltr,
            UnidadMedida::Mtr,
            UnidadMedida::Bx,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NIU" => Some(UnidadMedida::Niu),
            "KGM" => Some(UnidadMedida::Kgm),
            "LTR" => Some(UnidadMedida::Ltr),
            "MTR" => Some(UnidadMedida::Mtr),
            "BX" => Some(UnidadMedida::Bx),
            _ => None,
        }
    }
}

impl ToString for UnidadMedida {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
