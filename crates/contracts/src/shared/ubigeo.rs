use serde::{Deserialize, Serialize};

/// Fila del catálogo ubigeo (código INEI de 6 dígitos)
///
/// Los dos primeros dígitos identifican el departamento, los dos siguientes
/// la provincia y los dos últimos el distrito.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UbigeoEntry {
    pub codigo: String,
    pub departamento: String,
    pub provincia: String,
    pub distrito: String,
}

impl UbigeoEntry {
    pub fn codigo_departamento(&self) -> &str {
        &self.codigo[..2.min(self.codigo.len())]
    }

    pub fn codigo_provincia(&self) -> &str {
        &self.codigo[..4.min(self.codigo.len())]
    }
}

/// Opción para los selects encadenados (código + nombre a mostrar)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UbigeoOption {
    pub codigo: String,
    pub nombre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codigos_parciales() {
        let entry = UbigeoEntry {
            codigo: "150101".into(),
            departamento: "Lima".into(),
            provincia: "Lima".into(),
            distrito: "Lima".into(),
        };
        assert_eq!(entry.codigo_departamento(), "15");
        assert_eq!(entry.codigo_provincia(), "1501");
    }
}
