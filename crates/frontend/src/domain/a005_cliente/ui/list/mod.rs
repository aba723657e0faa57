use crate::domain::a005_cliente::ui::details::ClienteDetails;
use crate::shared::api_utils::{delete_request, get_json};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_cliente::Cliente;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct ClienteRow {
    pub id: String,
    pub documento: String,
    pub description: String,
    pub tipo: &'static str,
    pub direccion: String,
    pub telefono: String,
}

impl From<Cliente> for ClienteRow {
    fn from(c: Cliente) -> Self {
        use contracts::domain::common::AggregateId;

        Self {
            id: c.base.id.as_string(),
            documento: format!(
                "{} {}",
                c.tipo_documento.display_name(),
                c.numero_documento
            ),
            description: c.base.description,
            tipo: c.tipo_persona.display_name(),
            direccion: if c.direccion.is_empty() {
                "-".to_string()
            } else {
                c.direccion
            },
            telefono: if c.telefono.is_empty() {
                "-".to_string()
            } else {
                c.telefono
            },
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ClienteList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ClienteRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match get_json::<Vec<Cliente>>("/api/cliente").await {
                Ok(v) => {
                    let rows: Vec<ClienteRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let open_details_modal = move |id: Option<String>| {
        modal_stack.push_with_frame(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
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
                    <ClienteDetails
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
                if let Err(e) = delete_request(&format!("/api/cliente/{}", id)).await {
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
                    <h1 class="header__title">{"Clientes"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Nuevo cliente"}
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
                            <th class="table__header-cell">{"Documento"}</th>
                            <th class="table__header-cell">{"Nombre / Razón social"}</th>
                            <th class="table__header-cell">{"Tipo"}</th>
                            <th class="table__header-cell">{"Dirección"}</th>
                            <th class="table__header-cell">{"Teléfono"}</th>
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
                                    <td class="table__cell">{row.documento}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.tipo}</td>
                                    <td class="table__cell">{row.direccion}</td>
                                    <td class="table__cell">{row.telefono}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
