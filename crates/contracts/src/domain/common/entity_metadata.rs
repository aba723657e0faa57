use serde::{Deserialize, Serialize};

/// Metadatos de ciclo de vida de un agregado (lifecycle tracking)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Fecha de creación del registro
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Fecha de última actualización
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Eliminación lógica (soft delete)
    pub is_deleted: bool,
    /// Registrado/asentado (para documentos)
    pub is_posted: bool,
    /// Versión para optimistic locking
    pub version: i32,
}

impl EntityMetadata {
    /// Crear metadatos nuevos para un agregado recién creado
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            is_posted: false,
            version: 0,
        }
    }

    /// Actualizar timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    /// Incrementar versión
    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
