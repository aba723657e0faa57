//! Tab labels - única fuente de verdad para los títulos de tabs

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_registro_guia::RegistroGuia;

/// Devuelve el título legible del tab para una clave dada.
///
/// Fallback: "Almacén" para claves desconocidas.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Catálogo ──────────────────────────────────────────────────────
        "a001_marca" => "Marcas",
        "a002_categoria" => "Categorías",
        "a003_subcategoria" => "Subcategorías",
        "a004_producto" => "Productos",

        // ── Terceros ──────────────────────────────────────────────────────
        "a005_cliente" => "Clientes",
        "a006_transportista" => "Transportistas",
        "a008_almacen" => "Almacenes",

        // ── Documentos ────────────────────────────────────────────────────
        "a009_nota_ingreso" => "Notas de Ingreso",
        "a010_nota_salida" => "Notas de Salida",
        "a011_guia_remision" => "Guías de Remisión",

        // ── Use Cases (u5xx) ──────────────────────────────────────────────
        "u501_registro_guia" => RegistroGuia::display_name(),

        _ => "Almacén",
    }
}
