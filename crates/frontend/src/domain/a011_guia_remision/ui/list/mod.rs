use crate::domain::a011_guia_remision::ui::details::GuiaRemisionDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::api_utils::{delete_request, get_json, post_empty};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a011_guia_remision::GuiaRemision;
use contracts::enums::EstadoSunat;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct GuiaRemisionRow {
    pub id: String,
    pub numero: String,
    pub fecha_emision: String,
    pub motivo: &'static str,
    pub modalidad: &'static str,
    pub items: usize,
    pub estado: EstadoSunat,
    pub sunat_error: Option<String>,
}

impl From<GuiaRemision> for GuiaRemisionRow {
    fn from(g: GuiaRemision) -> Self {
        use contracts::domain::common::AggregateId;

        let items = g.parse_lines().len();
        Self {
            id: g.base.id.as_string(),
            numero: g.numero_completo(),
            fecha_emision: g.fecha_emision.clone(),
            motivo: g.motivo.display_name(),
            modalidad: g.modalidad.display_name(),
            items,
            estado: g.estado_sunat,
            sunat_error: g.sunat_error.clone(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn GuiaRemisionList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<GuiaRemisionRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (enviando, set_enviando) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match get_json::<Vec<GuiaRemision>>("/api/guia_remision").await {
                Ok(v) => {
                    let rows: Vec<GuiaRemisionRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_details_modal = move |id: String| {
        modal_stack.push_with_frame(
            Some("max-width: min(980px, 95vw); width: min(980px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_close = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <GuiaRemisionDetails id=id.clone() on_close=on_close />
                }
                .into_any()
            },
        );
    };

    // Reenvío de guías Pendientes/Rechazadas; la guía vuelve con su estado
    let enviar_sunat = move |id: String| {
        set_enviando.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match post_empty::<GuiaRemision>(&format!("/api/guia_remision/{}/enviar_sunat", id))
                .await
            {
                Ok(_) => set_error.set(None),
                Err(e) => set_error.set(Some(e)),
            }
            set_enviando.set(None);
            fetch();
        });
    };

    let delete_one = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("¿Eliminar la guía de remisión?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_request(&format!("/api/guia_remision/{}", id)).await {
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
                    <h1 class="header__title">{"Guías de Remisión"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| tabs_store.open_tab(
                            "u501_registro_guia",
                            tab_label_for_key("u501_registro_guia"),
                        )
                    >
                        {icon("plus")}
                        {"Registrar guía"}
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
                            <th class="table__header-cell">{"Emisión"}</th>
                            <th class="table__header-cell">{"Motivo"}</th>
                            <th class="table__header-cell">{"Modalidad"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Ítems"}</th>
                            <th class="table__header-cell">{"SUNAT"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_enviar = id.clone();
                            let id_for_enviando = id.clone();
                            let id_for_delete = id.clone();
                            let estado = row.estado;
                            let titulo_error = row.sunat_error.clone().unwrap_or_default();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_details_modal(id_for_click.clone())
                                >
                                    <td class="table__cell">{row.numero}</td>
                                    <td class="table__cell">{row.fecha_emision}</td>
                                    <td class="table__cell">{row.motivo}</td>
                                    <td class="table__cell">{row.modalidad}</td>
                                    <td class="table__cell table__cell--number">{row.items}</td>
                                    <td class="table__cell">
                                        <span
                                            class="badge"
                                            class:badge--posted=move || estado == EstadoSunat::Aceptada
                                            class:badge--error=move || estado == EstadoSunat::Rechazada
                                            title=titulo_error
                                        >
                                            {estado.display_name()}
                                        </span>
                                    </td>
                                    <td class="table__cell" on:click=|e| e.stop_propagation()>
                                        <Show when=move || estado.puede_enviarse()>
                                            {
                                                let id = id_for_enviar.clone();
                                                let id_check = id_for_enviando.clone();
                                                view! {
                                                    <button
                                                        class="btn btn-link"
                                                        disabled=move || enviando.get().as_deref() == Some(id_check.as_str())
                                                        on:click=move |_| enviar_sunat(id.clone())
                                                    >
                                                        {"Enviar a SUNAT"}
                                                    </button>
                                                }
                                            }
                                        </Show>
                                        <Show when=move || estado != EstadoSunat::Aceptada>
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
