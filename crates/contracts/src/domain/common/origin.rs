use serde::{Deserialize, Serialize};

/// Origen de los datos de un agregado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Registrado en el propio sistema
    #[serde(rename = "local")]
    Local,
    /// Obtenido del padrón de SUNAT (consulta RUC)
    Sunat,
    /// Obtenido de RENIEC (consulta DNI)
    Reniec,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Local => "local",
            Origin::Sunat => "sunat",
            Origin::Reniec => "reniec",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
