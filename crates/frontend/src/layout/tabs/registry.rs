//! Tab content registry - única fuente de verdad del mapeo tab.key → View
//!
//! `render_tab_content` devuelve la vista correspondiente a la clave del
//! tab. Todas las claves viven reunidas aquí.

use crate::domain::a001_marca::ui::list::MarcaList;
use crate::domain::a002_categoria::ui::list::CategoriaList;
use crate::domain::a003_subcategoria::ui::list::SubcategoriaList;
use crate::domain::a004_producto::ui::list::ProductoList;
use crate::domain::a005_cliente::ui::list::ClienteList;
use crate::domain::a006_transportista::ui::list::TransportistaList;
use crate::domain::a008_almacen::ui::list::AlmacenList;
use crate::domain::a009_nota_ingreso::ui::list::NotaIngresoList;
use crate::domain::a010_nota_salida::ui::list::NotaSalidaList;
use crate::domain::a011_guia_remision::ui::list::GuiaRemisionList;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_registro_guia::view::RegistroGuiaPage;
use leptos::prelude::*;

/// Renderiza el contenido de un tab por su clave.
///
/// Devuelve un placeholder para claves desconocidas (tabs guardados en la
/// URL por versiones anteriores).
pub fn render_tab_content(key: &str, _tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Catálogo (a001-a004)
        // ═══════════════════════════════════════════════════════════════════
        "a001_marca" => view! { <MarcaList /> }.into_any(),
        "a002_categoria" => view! { <CategoriaList /> }.into_any(),
        "a003_subcategoria" => view! { <SubcategoriaList /> }.into_any(),
        "a004_producto" => view! { <ProductoList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Terceros (a005-a008)
        // ═══════════════════════════════════════════════════════════════════
        "a005_cliente" => view! { <ClienteList /> }.into_any(),
        "a006_transportista" => view! { <TransportistaList /> }.into_any(),
        "a008_almacen" => view! { <AlmacenList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Documentos (a009-a011)
        // ═══════════════════════════════════════════════════════════════════
        "a009_nota_ingreso" => view! { <NotaIngresoList /> }.into_any(),
        "a010_nota_salida" => view! { <NotaSalidaList /> }.into_any(),
        "a011_guia_remision" => view! { <GuiaRemisionList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Use Cases
        // ═══════════════════════════════════════════════════════════════════
        "u501_registro_guia" => view! { <RegistroGuiaPage /> }.into_any(),

        _ => view! {
            <div class="page">
                <p>{format!("Pantalla desconocida: {}", key)}</p>
            </div>
        }
        .into_any(),
    }
}
