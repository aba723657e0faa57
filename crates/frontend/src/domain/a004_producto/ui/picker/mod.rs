//! Buscador de productos con debounce
//!
//! Entrada de texto que consulta `/api/producto/search` 300 ms después de la
//! última tecla y ofrece los resultados en una lista desplegable.

use crate::shared::api_utils::get_json;
use contracts::domain::a004_producto::Producto;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

#[component]
#[allow(non_snake_case)]
pub fn ProductoPicker(
    /// Se invoca con el producto elegido
    on_pick: Callback<Producto>,
    /// Placeholder del input
    #[prop(optional)]
    placeholder: Option<String>,
) -> impl IntoView {
    let (texto, set_texto) = signal(String::new());
    let (resultados, set_resultados) = signal::<Vec<Producto>>(Vec::new());
    let (buscando, set_buscando) = signal(false);
    // Generación del debounce: una respuesta lenta de una búsqueda vieja no
    // debe pisar los resultados de una más nueva
    let (generacion, set_generacion) = signal(0u32);

    let buscar = move |query: String| {
        let gen = generacion.get_untracked() + 1;
        set_generacion.set(gen);

        if query.trim().is_empty() {
            set_resultados.set(Vec::new());
            set_buscando.set(false);
            return;
        }

        set_buscando.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            // Si otra tecla llegó durante la espera, esta búsqueda ya caducó
            if generacion.get_untracked() != gen {
                return;
            }

            let path = format!(
                "/api/producto/search?q={}",
                urlencoding::encode(query.trim())
            );
            let result = get_json::<Vec<Producto>>(&path).await;

            if generacion.get_untracked() != gen {
                return;
            }
            set_buscando.set(false);
            if let Ok(items) = result {
                set_resultados.set(items);
            }
        });
    };

    let placeholder = placeholder.unwrap_or_else(|| "Buscar producto...".to_string());

    view! {
        <div class="picker">
            <input
                type="text"
                class="picker__input"
                placeholder=placeholder
                prop:value=move || texto.get()
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    set_texto.set(v.clone());
                    buscar(v);
                }
            />
            <Show when=move || buscando.get()>
                <div class="picker__hint">{"Buscando..."}</div>
            </Show>
            <Show when=move || !resultados.get().is_empty()>
                <div class="picker__results">
                    {move || resultados.get().into_iter().map(|producto| {
                        let display = producto.display_name();
                        let stock = producto.stock;
                        let code = producto.base.code.clone();
                        let producto_for_pick = producto.clone();
                        view! {
                            <div
                                class="picker__result"
                                on:click=move |_| {
                                    on_pick.run(producto_for_pick.clone());
                                    set_texto.set(String::new());
                                    set_resultados.set(Vec::new());
                                }
                            >
                                <span class="picker__result-code">{code}</span>
                                <span class="picker__result-name">{display}</span>
                                <span class="picker__result-stock">{format!("stock: {}", stock)}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
