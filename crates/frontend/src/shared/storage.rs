//! Helpers de localStorage para selecciones en curso
//!
//! El asistente de guías y la selección de almacén sobreviven a un reload
//! guardándose aquí.

/// Leer y deserializar un valor guardado; None si no existe o no parsea
pub fn load<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(key).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Serializar y guardar un valor
pub fn save<T: serde::Serialize>(key: &str, value: &T) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(raw) = serde_json::to_string(value) {
            let _ = storage.set_item(key, &raw);
        }
    }
}

/// Borrar una clave guardada
pub fn remove(key: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(key);
    }
}

/// Clave del almacén seleccionado por el usuario
pub const ALMACEN_SELECCIONADO: &str = "almacen_seleccionado";

/// Clave del borrador del asistente de guías
pub const BORRADOR_GUIA: &str = "u501_borrador_guia";
