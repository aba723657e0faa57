use crate::domain::a009_nota_ingreso::ui::details::NotaIngresoDetails;
use crate::shared::api_utils::{delete_request, get_json, post_empty};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a009_nota_ingreso::NotaIngreso;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct NotaIngresoRow {
    pub id: String,
    pub numero: String,
    pub fecha: String,
    pub proveedor: String,
    pub items: usize,
    pub total: f64,
    pub posted: bool,
}

impl From<NotaIngreso> for NotaIngresoRow {
    fn from(n: NotaIngreso) -> Self {
        use contracts::domain::common::AggregateId;

        let lines = n.parse_lines();
        Self {
            id: n.base.id.as_string(),
            numero: n.numero.clone(),
            fecha: n.fecha.clone(),
            proveedor: if n.proveedor.is_empty() {
                "-".to_string()
            } else {
                n.proveedor.clone()
            },
            items: lines.len(),
            total: n.total(),
            posted: n.base.metadata.is_posted,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NotaIngresoList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<NotaIngresoRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match get_json::<Vec<NotaIngreso>>("/api/nota_ingreso").await {
                Ok(v) => {
                    let rows: Vec<NotaIngresoRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_details_modal = move |id: Option<String>| {
        modal_stack.push_with_frame(
            Some("max-width: min(980px, 95vw); width: min(980px, 95vw);".to_string()),
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
                    <NotaIngresoDetails
                        id=id.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    // Asiento y anulación del documento; el backend responde con el error
    // de stock cuando la reversión no alcanza
    let toggle_post = move |id: String, posted: bool| {
        wasm_bindgen_futures::spawn_local(async move {
            let action = if posted { "unpost" } else { "post" };
            match post_empty::<serde_json::Value>(&format!("/api/nota_ingreso/{}/{}", id, action))
                .await
            {
                Ok(_) => {
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_one = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("¿Eliminar la nota de ingreso?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_request(&format!("/api/nota_ingreso/{}", id)).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Notas de Ingreso"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Nueva nota"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
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
                            <th class="table__header-cell">{"Número"}</th>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"Proveedor"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Ítems"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Total"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_post = id.clone();
                            let id_for_delete = id.clone();
                            let posted = row.posted;
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                >
                                    <td class="table__cell">{row.numero}</td>
                                    <td class="table__cell">{row.fecha}</td>
                                    <td class="table__cell">{row.proveedor}</td>
                                    <td class="table__cell table__cell--number">{row.items}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", row.total)}</td>
                                    <td class="table__cell">
                                        {if posted {
                                            view! { <span class="badge badge--posted">{"Asentada"}</span> }.into_any()
                                        } else {
                                            view! { <span class="badge">{"Borrador"}</span> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell" on:click=|e| e.stop_propagation()>
                                        <button
                                            class="btn btn-link"
                                            on:click=move |_| toggle_post(id_for_post.clone(), posted)
                                        >
                                            {if posted { "Anular asiento" } else { "Asentar" }}
                                        </button>
                                        <Show when=move || !posted>
                                            {
                                                let id = id_for_delete.clone();
                                                view! {
                                                    <button class="btn btn-link" on:click=move |_| delete_one(id.clone())>
                                                        {"Eliminar"}
                                                    </button>
                                                }
                                            }
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
