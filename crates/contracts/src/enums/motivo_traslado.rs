use serde::{Deserialize, Serialize};

/// Motivo de traslado de una guía de remisión (catálogo 20 de SUNAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotivoTraslado {
    #[default]
    Venta,
    Compra,
    TrasladoEntreAlmacenes,
    Devolucion,
    Otros,
}

impl MotivoTraslado {
    /// Código SUNAT del motivo
    pub fn code(&self) -> &'static str {
        match self {
            MotivoTraslado::Venta => "01",
            MotivoTraslado::Compra => "02",
            MotivoTraslado::TrasladoEntreAlmacenes => "04",
            MotivoTraslado::Devolucion => "05",
            MotivoTraslado::Otros => "13",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MotivoTraslado::Venta => "Venta",
            MotivoTraslado::Compra => "Compra",
            MotivoTraslado::TrasladoEntreAlmacenes => "Traslado entre almacenes",
            MotivoTraslado::Devolucion => "Devolución",
            MotivoTraslado::Otros => "Otros",
        }
    }

    pub fn all() -> Vec<MotivoTraslado> {
        vec![
            MotivoTraslado::Venta,
            MotivoTraslado::Compra,
            MotivoTraslado::TrasladoEntreAlmacenes,
            MotivoTraslado::Devolucion,
            MotivoTraslado::Otros,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(MotivoTraslado::Venta),
            "02" => Some(MotivoTraslado::Compra),
            "04" => Some(MotivoTraslado::TrasladoEntreAlmacenes),
            "05" => Some(MotivoTraslado::Devolucion),
            "13" => Some(MotivoTraslado::Otros),
            _ => None,
        }
    }
}

impl ToString for MotivoTraslado {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
