use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use crate::enums::UnidadMedida;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// UUID nulo, no se considera una referencia válida
const ZERO_UUID: &str = "00000000-0000-0000-0000-000000000000";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductoId(pub Uuid);

impl ProductoId {
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

impl AggregateId for ProductoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Producto del catálogo
///
/// El stock NUNCA se edita desde formularios: solo lo mueven el asiento de
/// notas de ingreso/salida y el registro de guías de remisión.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductoId>,

    /// Código de barras (EAN u otro), opcional
    #[serde(rename = "codigoBarras", default)]
    pub codigo_barras: String,

    #[serde(rename = "marcaRef")]
    pub marca_ref: Option<String>,

    #[serde(rename = "categoriaRef")]
    pub categoria_ref: Option<String>,

    #[serde(rename = "subcategoriaRef")]
    pub subcategoria_ref: Option<String>,

    /// Unidad de medida para documentos y guías
    #[serde(default)]
    pub unidad: UnidadMedida,

    #[serde(rename = "precioVenta", default)]
    pub precio_venta: f64,

    /// Existencia actual en almacén
    #[serde(default)]
    pub stock: f64,

    /// Umbral de alerta de reposición
    #[serde(rename = "stockMinimo", default)]
    pub stock_minimo: f64,

    /// Etiqueta de variante (talla, color, presentación), opcional
    #[serde(default)]
    pub variante: String,
}

impl Producto {
    pub fn new_for_insert(
        code: String,
        description: String,
        unidad: UnidadMedida,
        precio_venta: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProductoId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            codigo_barras: String::new(),
            marca_ref: None,
            categoria_ref: None,
            subcategoria_ref: None,
            unidad,
            precio_venta,
            stock: 0.0,
            stock_minimo: 0.0,
            variante: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Nombre para mostrar en buscadores: descripción más variante si la hay
    pub fn display_name(&self) -> String {
        if self.variante.trim().is_empty() {
            self.base.description.clone()
        } else {
            format!("{} ({})", self.base.description, self.variante)
        }
    }

    /// ¿El stock está por debajo del umbral de reposición?
    pub fn bajo_stock(&self) -> bool {
        self.stock_minimo > 0.0 && self.stock < self.stock_minimo
    }

    pub fn update(&mut self, dto: &ProductoDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.codigo_barras = dto.codigo_barras.clone().unwrap_or_default();
        self.marca_ref = normalize_ref(dto.marca_ref.clone());
        self.categoria_ref = normalize_ref(dto.categoria_ref.clone());
        self.subcategoria_ref = normalize_ref(dto.subcategoria_ref.clone());
        self.unidad = dto.unidad;
        self.precio_venta = dto.precio_venta;
        self.stock_minimo = dto.stock_minimo;
        self.variante = dto.variante.clone().unwrap_or_default();
        // El stock se ignora a propósito: lo gobiernan los documentos
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("La descripción no puede estar vacía".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("El código no puede estar vacío".into());
        }
        if self.precio_venta < 0.0 {
            return Err("El precio de venta no puede ser negativo".into());
        }
        if self.stock < 0.0 {
            return Err("El stock no puede ser negativo".into());
        }
        if self.stock_minimo < 0.0 {
            return Err("El stock mínimo no puede ser negativo".into());
        }
        if self.variante.len() > 40 {
            return Err("La variante no debe superar 40 caracteres".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

fn normalize_ref(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty() && s != ZERO_UUID)
}

impl AggregateRoot for Producto {
    type Id = ProductoId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "producto"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }

    fn origin() -> Origin {
        Origin::Local
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductoDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "codigoBarras")]
    pub codigo_barras: Option<String>,
    #[serde(rename = "marcaRef")]
    pub marca_ref: Option<String>,
    #[serde(rename = "categoriaRef")]
    pub categoria_ref: Option<String>,
    #[serde(rename = "subcategoriaRef")]
    pub subcategoria_ref: Option<String>,
    #[serde(default)]
    pub unidad: UnidadMedida,
    #[serde(rename = "precioVenta", default)]
    pub precio_venta: f64,
    #[serde(rename = "stockMinimo", default)]
    pub stock_minimo: f64,
    pub variante: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto_base() -> Producto {
        Producto::new_for_insert(
            "PRD-000001".into(),
            "Agua mineral 625ml".into(),
            UnidadMedida::Niu,
            1.5,
            None,
        )
    }

    #[test]
    fn test_validate_precio_negativo() {
        let mut p = producto_base();
        assert!(p.validate().is_ok());
        p.precio_venta = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_display_name_con_variante() {
        let mut p = producto_base();
        assert_eq!(p.display_name(), "Agua mineral 625ml");
        p.variante = "Pack x6".into();
        assert_eq!(p.display_name(), "Agua mineral 625ml (Pack x6)");
    }

    #[test]
    fn test_bajo_stock() {
        let mut p = producto_base();
        // sin umbral definido nunca alerta
        assert!(!p.bajo_stock());
        p.stock_minimo = 10.0;
        p.stock = 4.0;
        assert!(p.bajo_stock());
        p.stock = 10.0;
        assert!(!p.bajo_stock());
    }

    #[test]
    fn test_update_ignora_stock_y_normaliza_refs() {
        let mut p = producto_base();
        p.stock = 25.0;
        let dto = ProductoDto {
            id: Some(p.to_string_id()),
            code: Some("PRD-000001".into()),
            description: "Agua mineral 625ml".into(),
            marca_ref: Some(String::new()),
            categoria_ref: Some("00000000-0000-0000-0000-000000000000".into()),
            precio_venta: 1.8,
            ..Default::default()
        };
        p.update(&dto);
        assert_eq!(p.stock, 25.0);
        assert_eq!(p.marca_ref, None);
        assert_eq!(p.categoria_ref, None);
        assert_eq!(p.precio_venta, 1.8);
    }
}
