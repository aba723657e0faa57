use serde::{Deserialize, Serialize};

/// Tipos de documento de identidad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoDocumento {
    Dni,
    Ruc,
    CarnetExtranjeria,
}

impl TipoDocumento {
    /// Código SUNAT del tipo de documento (catálogo 06)
    pub fn code(&self) -> &'static str {
        match self {
            TipoDocumento::Dni => "1",
            TipoDocumento::Ruc => "6",
            TipoDocumento::CarnetExtranjeria => "4",
        }
    }

    /// Nombre legible
    pub fn display_name(&self) -> &'static str {
        match self {
            TipoDocumento::Dni => "DNI",
            TipoDocumento::Ruc => "RUC",
            TipoDocumento::CarnetExtranjeria => "Carnet de Extranjería",
        }
    }

    /// Longitud exacta esperada del número de documento
    pub fn longitud(&self) -> usize {
        match self {
            TipoDocumento::Dni => 8,
            TipoDocumento::Ruc => 11,
            TipoDocumento::CarnetExtranjeria => 9,
        }
    }

    /// Todos los tipos
    pub fn all() -> Vec<TipoDocumento> {
        vec![
            TipoDocumento::Dni,
            TipoDocumento::Ruc,
            TipoDocumento::CarnetExtranjeria,
        ]
    }

    /// Parseo desde código SUNAT
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(TipoDocumento::Dni),
            "6" => Some(TipoDocumento::Ruc),
            "4" => Some(TipoDocumento::CarnetExtranjeria),
            _ => None,
        }
    }

    /// Clasificar un número de documento por su forma.
    ///
    /// 8 dígitos → DNI, 11 dígitos → RUC; cualquier otra forma no se
    /// clasifica (el carnet de extranjería no es deducible solo del número).
    pub fn clasificar(numero: &str) -> Option<Self> {
        let numero = numero.trim();
        if !numero.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        match numero.len() {
            8 => Some(TipoDocumento::Dni),
            11 => Some(TipoDocumento::Ruc),
            _ => None,
        }
    }

    /// Validar que el número tiene la forma correcta para este tipo
    pub fn validar_numero(&self, numero: &str) -> Result<(), String> {
        let numero = numero.trim();
        if numero.len() != self.longitud() {
            return Err(format!(
                "El {} debe tener {} dígitos",
                self.display_name(),
                self.longitud()
            ));
        }
        if !numero.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "El {} solo puede contener dígitos",
                self.display_name()
            ));
        }
        Ok(())
    }
}

impl ToString for TipoDocumento {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificar_por_longitud() {
        assert_eq!(TipoDocumento::clasificar("12345678"), Some(TipoDocumento::Dni));
        assert_eq!(
            TipoDocumento::clasificar("20123456789"),
            Some(TipoDocumento::Ruc)
        );
        assert_eq!(TipoDocumento::clasificar(" 12345678 "), Some(TipoDocumento::Dni));
        assert_eq!(TipoDocumento::clasificar("1234"), None);
        assert_eq!(TipoDocumento::clasificar("1234567a"), None);
        assert_eq!(TipoDocumento::clasificar(""), None);
    }

    #[test]
    fn test_validar_numero() {
        assert!(TipoDocumento::Dni.validar_numero("12345678").is_ok());
        assert!(TipoDocumento::Dni.validar_numero("1234567").is_err());
        assert!(TipoDocumento::Ruc.validar_numero("20123456789").is_ok());
        assert!(TipoDocumento::Ruc.validar_numero("2012345678X").is_err());
    }
}
