use crate::domain::a004_producto::ui::details::ProductoDetails;
use crate::shared::api_utils::{delete_request, get_json};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_producto::Producto;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct ProductoRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub variante: String,
    pub unidad: &'static str,
    pub precio_venta: f64,
    pub stock: f64,
    pub bajo_stock: bool,
}

impl From<Producto> for ProductoRow {
    fn from(p: Producto) -> Self {
        use contracts::domain::common::AggregateId;

        let bajo_stock = p.bajo_stock();
        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            description: p.base.description,
            variante: if p.variante.is_empty() {
                "-".to_string()
            } else {
                p.variante
            },
            unidad: p.unidad.code(),
            precio_venta: p.precio_venta,
            stock: p.stock,
            bajo_stock,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductoList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ProductoRow>>(Vec::new());
    let (filtro, set_filtro) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match get_json::<Vec<Producto>>("/api/producto").await {
                Ok(v) => {
                    let rows: Vec<ProductoRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Filtro en memoria sobre la lista ya cargada
    let filtered = move || {
        let needle = filtro.get().trim().to_lowercase();
        let all = items.get();
        if needle.is_empty() {
            return all;
        }
        all.into_iter()
            .filter(|row| {
                row.code.to_lowercase().contains(&needle)
                    || row.description.to_lowercase().contains(&needle)
                    || row.variante.to_lowercase().contains(&needle)
            })
            .collect()
    };

    let open_details_modal = move |id: Option<String>| {
        modal_stack.push_with_frame(
            Some("max-width: min(860px, 95vw); width: min(860px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        fetch();
                    }
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <ProductoDetails
                        id=id.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "¿Eliminar los elementos seleccionados? Cantidad: {}",
                    ids.len()
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = delete_request(&format!("/api/producto/{}", id)).await {
                    set_error.set(Some(e));
                }
            }
            fetch();
        });
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Productos"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Nuevo producto"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Eliminar ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                {icon("search")}
                <input
                    type="text"
                    class="filter-bar__input"
                    placeholder="Filtrar por código, descripción o variante"
                    prop:value=move || filtro.get()
                    on:input=move |ev| set_filtro.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Código"}</th>
                            <th class="table__header-cell">{"Descripción"}</th>
                            <th class="table__header-cell">{"Variante"}</th>
                            <th class="table__header-cell">{"Und."}</th>
                            <th class="table__header-cell table__header-cell--number">{"Precio"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Stock"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_checkbox = id.clone();
                            let id_for_toggle = id.clone();
                            let bajo_stock = row.bajo_stock;
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--warning=bajo_stock
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                    />
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.variante}</td>
                                    <td class="table__cell">{row.unidad}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", row.precio_venta)}</td>
                                    <td class="table__cell table__cell--number">{row.stock.to_string()}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
