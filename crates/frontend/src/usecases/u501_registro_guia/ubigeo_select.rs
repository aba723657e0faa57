//! Selects encadenados departamento → provincia → distrito.
//!
//! Elegir un departamento carga sus provincias y limpia los selects
//! dependientes; elegir una provincia carga los distritos. El código de
//! distrito (6 dígitos) es el valor final que se informa.

use super::api;
use contracts::shared::ubigeo::UbigeoOption;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn UbigeoSelect(
    /// Se invoca con el código de distrito elegido (6 dígitos)
    on_change: Callback<String>,
) -> impl IntoView {
    let (departamentos, set_departamentos) = signal::<Vec<UbigeoOption>>(Vec::new());
    let (provincias, set_provincias) = signal::<Vec<UbigeoOption>>(Vec::new());
    let (distritos, set_distritos) = signal::<Vec<UbigeoOption>>(Vec::new());
    let (departamento, set_departamento) = signal(String::new());
    let (provincia, set_provincia) = signal(String::new());

    // Los departamentos se cargan una sola vez al montar
    wasm_bindgen_futures::spawn_local(async move {
        if let Ok(list) = api::fetch_departamentos().await {
            set_departamentos.set(list);
        }
    });

    let on_departamento = move |codigo: String| {
        set_departamento.set(codigo.clone());
        // Los selects dependientes se limpian al cambiar el padre
        set_provincia.set(String::new());
        set_provincias.set(Vec::new());
        set_distritos.set(Vec::new());
        on_change.run(String::new());

        if codigo.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(list) = api::fetch_provincias(&codigo).await {
                set_provincias.set(list);
            }
        });
    };

    let on_provincia = move |codigo: String| {
        set_provincia.set(codigo.clone());
        set_distritos.set(Vec::new());
        on_change.run(String::new());

        if codigo.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(list) = api::fetch_distritos(&codigo).await {
                set_distritos.set(list);
            }
        });
    };

    view! {
        <div class="ubigeo-select">
            <select
                prop:value=move || departamento.get()
                on:change=move |ev| on_departamento(event_target_value(&ev))
            >
                <option value="">{"-- Departamento --"}</option>
                {move || departamentos.get().into_iter().map(|d| {
                    view! { <option value=d.codigo.clone()>{d.nombre.clone()}</option> }
                }).collect_view()}
            </select>

            <select
                prop:value=move || provincia.get()
                disabled=move || provincias.get().is_empty()
                on:change=move |ev| on_provincia(event_target_value(&ev))
            >
                <option value="">{"-- Provincia --"}</option>
                {move || provincias.get().into_iter().map(|p| {
                    view! { <option value=p.codigo.clone()>{p.nombre.clone()}</option> }
                }).collect_view()}
            </select>

            <select
                disabled=move || distritos.get().is_empty()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{"-- Distrito --"}</option>
                {move || distritos.get().into_iter().map(|d| {
                    view! { <option value=d.codigo.clone()>{d.nombre.clone()}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
