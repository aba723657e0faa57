use crate::domain::a003_subcategoria::ui::details::SubcategoriaDetails;
use crate::shared::api_utils::{delete_request, get_json};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_categoria::Categoria;
use contracts::domain::a003_subcategoria::Subcategoria;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct SubcategoriaRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub categoria: String,
    pub comment: String,
}

#[component]
#[allow(non_snake_case)]
pub fn SubcategoriaList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SubcategoriaRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // Las subcategorías y el índice de nombres de categoría se cargan juntos
    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let (subcategorias, categorias) = futures::join!(
                get_json::<Vec<Subcategoria>>("/api/subcategoria"),
                get_json::<Vec<Categoria>>("/api/categoria")
            );

            match (subcategorias, categorias) {
                (Ok(subs), Ok(cats)) => {
                    use contracts::domain::common::AggregateId;
                    let nombres: HashMap<String, String> = cats
                        .into_iter()
                        .map(|c| (c.base.id.as_string(), c.base.description))
                        .collect();
                    let rows: Vec<SubcategoriaRow> = subs
                        .into_iter()
                        .map(|s| SubcategoriaRow {
                            id: s.base.id.as_string(),
                            code: s.base.code,
                            description: s.base.description,
                            categoria: nombres
                                .get(&s.categoria_ref)
                                .cloned()
                                .unwrap_or_else(|| "-".to_string()),
                            comment: s.base.comment.unwrap_or_else(|| "-".to_string()),
                        })
                        .collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => set_error.set(Some(e)),
            }
        });
    };

    let open_details_modal = move |id: Option<String>| {
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
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
                    <SubcategoriaDetails
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
                if let Err(e) = delete_request(&format!("/api/subcategoria/{}", id)).await {
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
                    <h1 class="header__title">{"Subcategorías"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Nueva subcategoría"}
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
                            <th class="table__header-cell">{"Nombre"}</th>
                            <th class="table__header-cell">{"Categoría"}</th>
                            <th class="table__header-cell">{"Comentario"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_checkbox = id.clone();
                            let id_for_toggle = id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                    />
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.categoria}</td>
                                    <td class="table__cell">{row.comment}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
