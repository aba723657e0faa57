//! Vista de solo lectura de una guía registrada.
//!
//! Las guías no se editan: se crean desde el asistente (u501) y lo único
//! que cambia después es su estado frente a SUNAT.

use crate::shared::api_utils::get_json;
use contracts::domain::a011_guia_remision::GuiaRemision;
use contracts::enums::EstadoSunat;
use leptos::prelude::*;
use std::rc::Rc;

async fn fetch_by_id(id: String) -> Result<GuiaRemision, String> {
    get_json(&format!("/api/guia_remision/{}", id)).await
}

#[component]
pub fn GuiaRemisionDetails(id: String, on_close: Rc<dyn Fn(())>) -> impl IntoView {
    let (guia, set_guia) = signal::<Option<GuiaRemision>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    leptos::task::spawn_local(async move {
        match fetch_by_id(id).await {
            Ok(g) => set_guia.set(Some(g)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || guia.get().map(|g| {
                let lines = g.parse_lines();
                let estado = g.estado_sunat;
                view! {
                    <div class="details-header">
                        <h3>{format!("Guía {}", g.numero_completo())}</h3>
                        <span
                            class="badge"
                            class:badge--posted=move || estado == EstadoSunat::Aceptada
                            class:badge--error=move || estado == EstadoSunat::Rechazada
                        >
                            {estado.display_name()}
                        </span>
                    </div>

                    <div class="details-form">
                        <div class="form-row">
                            <div class="form-group">
                                <label>{"Fecha de emisión"}</label>
                                <div class="readonly-field">{g.fecha_emision.clone()}</div>
                            </div>
                            <div class="form-group">
                                <label>{"Fecha de traslado"}</label>
                                <div class="readonly-field">{g.fecha_traslado.clone()}</div>
                            </div>
                            <div class="form-group">
                                <label>{"Motivo"}</label>
                                <div class="readonly-field">{g.motivo.display_name()}</div>
                            </div>
                            <div class="form-group">
                                <label>{"Modalidad"}</label>
                                <div class="readonly-field">{g.modalidad.display_name()}</div>
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label>{"Punto de partida"}</label>
                                <div class="readonly-field">
                                    {format!("{} ({})", g.partida_direccion, g.partida_ubigeo)}
                                </div>
                            </div>
                            <div class="form-group">
                                <label>{"Punto de llegada"}</label>
                                <div class="readonly-field">
                                    {format!("{} ({})", g.llegada_direccion, g.llegada_ubigeo)}
                                </div>
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label>{"Peso bruto (kg)"}</label>
                                <div class="readonly-field">{g.peso_bruto.to_string()}</div>
                            </div>
                            <div class="form-group">
                                <label>{"Bultos"}</label>
                                <div class="readonly-field">{g.bultos.to_string()}</div>
                            </div>
                        </div>

                        {g.sunat_ticket.clone().map(|ticket| view! {
                            <div class="form-group">
                                <label>{"Ticket SUNAT"}</label>
                                <div class="readonly-field">{ticket}</div>
                            </div>
                        })}

                        {g.sunat_error.clone().map(|e| view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{e}</span>
                            </div>
                        })}

                        <div class="details-section">
                            <h4>{"Bienes a transportar"}</h4>
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Descripción"}</th>
                                        <th class="table__header-cell">{"Unidad"}</th>
                                        <th class="table__header-cell table__header-cell--number">{"Cantidad"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {lines.into_iter().map(|line| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{line.descripcion.clone()}</td>
                                            <td class="table__cell">{line.unidad.code()}</td>
                                            <td class="table__cell table__cell--number">{line.cantidad.to_string()}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
            })}

            <div class="form-actions">
                <button class="btn btn-secondary" on:click=move |_| on_close(())>{"Cerrar"}</button>
            </div>
        </div>
    }
}
