use serde::{Deserialize, Serialize};

/// Almacén de eventos de dominio (reservado para Event Sourcing futuro)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStore {
    // Estructura vacía por ahora, se ampliará más adelante
    _placeholder: (),
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }
}
