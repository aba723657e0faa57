use serde::{Deserialize, Serialize};

/// Estado del envío de una guía a SUNAT
///
/// El guardado local y el envío son pasos separados: una guía guardada cuyo
/// envío falló queda en `Pendiente` o `Rechazada` y puede reenviarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EstadoSunat {
    /// Guardada localmente, aún no aceptada por SUNAT
    #[default]
    Pendiente,
    /// Aceptada por SUNAT
    Aceptada,
    /// Rechazada por SUNAT (el mensaje queda en la guía)
    Rechazada,
}

impl EstadoSunat {
    pub fn code(&self) -> &'static str {
        match self {
            EstadoSunat::Pendiente => "pendiente",
            EstadoSunat::Aceptada => "aceptada",
            EstadoSunat::Rechazada => "rechazada",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EstadoSunat::Pendiente => "Pendiente",
            EstadoSunat::Aceptada => "Aceptada",
            EstadoSunat::Rechazada => "Rechazada",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pendiente" => Some(EstadoSunat::Pendiente),
            "aceptada" => Some(EstadoSunat::Aceptada),
            "rechazada" => Some(EstadoSunat::Rechazada),
            _ => None,
        }
    }

    /// Una guía puede (re)enviarse solo si no fue aceptada ya
    pub fn puede_enviarse(&self) -> bool {
        !matches!(self, EstadoSunat::Aceptada)
    }
}

impl ToString for EstadoSunat {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
