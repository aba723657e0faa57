/// Identificador tipado de un agregado
///
/// Cada agregado define su propio newtype sobre `Uuid` e implementa este
/// trait para la conversión desde/hacia su representación textual.
pub trait AggregateId: Sized {
    /// Representación textual del ID (UUID en formato canónico)
    fn as_string(&self) -> String;

    /// Parsear desde texto; devuelve mensaje de error si no es un UUID válido
    fn from_string(s: &str) -> Result<Self, String>;
}
