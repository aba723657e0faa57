use super::{EntityMetadata, EventStore, Origin};

/// Trait para la raíz de un agregado
///
/// Define los métodos y metadatos obligatorios de todos los agregados del
/// sistema.
pub trait AggregateRoot {
    /// Tipo del identificador del agregado
    type Id;

    // ============================================================================
    // Métodos de instancia (datos del registro concreto)
    // ============================================================================

    /// Obtener el ID del registro
    fn id(&self) -> Self::Id;

    /// Obtener el código de negocio del registro (por ejemplo "NI-000045")
    fn code(&self) -> &str;

    /// Obtener la descripción/nombre del registro
    fn description(&self) -> &str;

    /// Obtener los metadatos de ciclo de vida
    fn metadata(&self) -> &EntityMetadata;

    /// Obtener los metadatos mutables
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Obtener el almacén de eventos
    fn events(&self) -> &EventStore;

    /// Obtener el almacén de eventos mutable
    fn events_mut(&mut self) -> &mut EventStore;

    // ============================================================================
    // Metadatos de la clase del agregado (datos estáticos)
    // ============================================================================

    /// Índice del agregado en el sistema (por ejemplo "a004")
    fn aggregate_index() -> &'static str;

    /// Nombre de colección para la BD (por ejemplo "producto")
    fn collection_name() -> &'static str;

    /// Nombre del elemento para la UI (singular, por ejemplo "Producto")
    fn element_name() -> &'static str;

    /// Nombre de la lista para la UI (plural, por ejemplo "Productos")
    fn list_name() -> &'static str;

    /// Origen de los datos del agregado
    fn origin() -> Origin;

    // ============================================================================
    // Métodos con implementación por defecto
    // ============================================================================

    /// Nombre completo del agregado para el sistema (por ejemplo "a004_producto")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Prefijo para tablas de BD (por ejemplo "a004_producto_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
