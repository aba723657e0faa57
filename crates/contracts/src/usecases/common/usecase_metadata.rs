/// Metadatos de un UseCase para identificación y documentación
pub trait UseCaseMetadata {
    /// Índice del UseCase (por ejemplo "u501")
    fn usecase_index() -> &'static str;

    /// Nombre técnico (por ejemplo "registro_guia")
    fn usecase_name() -> &'static str;

    /// Nombre a mostrar en la UI (por ejemplo "Registro de Guía")
    fn display_name() -> &'static str;

    /// Descripción del UseCase
    fn description() -> &'static str {
        ""
    }

    /// Nombre completo de la forma "u501_registro_guia"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
