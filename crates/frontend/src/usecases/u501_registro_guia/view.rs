//! Asistente de registro de guías de remisión.
//!
//! Reúne en una sola pantalla la búsqueda de productos con validación de
//! stock, la selección de destinatario (con alta rápida vía consulta
//! DNI/RUC), el transporte según modalidad y el punto de llegada con los
//! selects de ubigeo encadenados. El borrador persiste en localStorage.

use super::api;
use super::state::BorradorGuia;
use super::ubigeo_select::UbigeoSelect;
use crate::domain::a004_producto::ui::picker::ProductoPicker;
use crate::domain::a005_cliente::ui::details::ClienteDetails;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::storage;
use contracts::domain::a005_cliente::Cliente;
use contracts::domain::a006_transportista::Transportista;
use contracts::domain::a007_vehiculo::Vehiculo;
use contracts::domain::a008_almacen::Almacen;
use contracts::enums::{MotivoTraslado, TipoTransporte};
use contracts::usecases::u501_registro_guia::RegistroGuiaResponse;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::rc::Rc;

const DEBOUNCE_MS: u32 = 300;

#[component]
#[allow(non_snake_case)]
pub fn RegistroGuiaPage() -> impl IntoView {
    // El borrador guardado revive al abrir la pantalla; sin borrador, el
    // almacén de partida cae al seleccionado en la pantalla de almacenes
    let borrador = RwSignal::new({
        let mut b = storage::load::<BorradorGuia>(storage::BORRADOR_GUIA)
            .unwrap_or_else(BorradorGuia::nuevo);
        if b.almacen_ref.is_empty() {
            if let Some(almacen) = storage::load::<String>(storage::ALMACEN_SELECCIONADO) {
                b.almacen_ref = almacen;
            }
        }
        b
    });

    let (almacenes, set_almacenes) = signal::<Vec<Almacen>>(Vec::new());
    let (transportistas, set_transportistas) = signal::<Vec<Transportista>>(Vec::new());
    let (vehiculos, set_vehiculos) = signal::<Vec<Vehiculo>>(Vec::new());
    let (resultado, set_resultado) = signal::<Option<RegistroGuiaResponse>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (registrando, set_registrando) = signal(false);

    // Buscador de destinatarios (debounce con generación, igual que el de
    // productos: una respuesta vieja no pisa una búsqueda más nueva)
    let (cliente_texto, set_cliente_texto) = signal(String::new());
    let (cliente_resultados, set_cliente_resultados) = signal::<Vec<Cliente>>(Vec::new());
    let (cliente_generacion, set_cliente_generacion) = signal(0u32);

    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // Cada cambio del borrador queda persistido
    Effect::new(move |_| {
        let b = borrador.get();
        storage::save(storage::BORRADOR_GUIA, &b);
    });

    let cargar_transportistas = move |modalidad: TipoTransporte| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_transportistas(modalidad).await {
                Ok(list) => set_transportistas.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let cargar_vehiculos = move |transportista_id: String| {
        if transportista_id.is_empty() {
            set_vehiculos.set(Vec::new());
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_vehiculos(&transportista_id).await {
                Ok(list) => set_vehiculos.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Carga inicial: almacenes y transportistas de la modalidad guardada,
    // en paralelo
    {
        let modalidad = borrador.get_untracked().modalidad;
        let transportista_guardado = borrador.get_untracked().transportista_ref.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let (almacenes_result, transportistas_result) = futures::join!(
                api::fetch_almacenes(),
                api::fetch_transportistas(modalidad)
            );
            match almacenes_result {
                Ok(list) => set_almacenes.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            match transportistas_result {
                Ok(list) => set_transportistas.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            if !transportista_guardado.is_empty() {
                cargar_vehiculos(transportista_guardado);
            }
        });
    }

    let buscar_clientes = move |texto: String| {
        let gen = cliente_generacion.get_untracked() + 1;
        set_cliente_generacion.set(gen);

        if texto.trim().is_empty() {
            set_cliente_resultados.set(Vec::new());
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if cliente_generacion.get_untracked() != gen {
                return;
            }
            let result = api::search_clientes(texto.trim()).await;
            if cliente_generacion.get_untracked() != gen {
                return;
            }
            if let Ok(items) = result {
                set_cliente_resultados.set(items);
            }
        });
    };

    let abrir_nuevo_destinatario = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <ClienteDetails id=None on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let registrar = move || {
        let b = borrador.get_untracked();
        if !b.puede_registrar() {
            return;
        }
        set_registrando.set(true);
        set_error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match api::registrar(&b.to_request()).await {
                Ok(response) => {
                    set_resultado.set(Some(response));
                    // El borrador ya se convirtió en guía; se descarta
                    storage::remove(storage::BORRADOR_GUIA);
                    borrador.set(BorradorGuia::nuevo());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_registrando.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Registro de Guía de Remisión"}</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || resultado.get().map(|r| {
                let mensaje = match (&r.sunat_ticket, &r.sunat_error) {
                    (Some(ticket), _) => format!(
                        "Guía {} registrada y aceptada por SUNAT (ticket {})",
                        r.numero, ticket
                    ),
                    (None, Some(err)) => format!(
                        "Guía {} guardada, pero SUNAT la rechazó: {}. Puede reenviarla desde la lista.",
                        r.numero, err
                    ),
                    (None, None) => format!("Guía {} guardada ({})", r.numero, r.estado_sunat.display_name()),
                };
                view! {
                    <div class="info-box">
                        <span class="info-box__text">{mensaje}</span>
                        <button class="btn btn-link" on:click=move |_| set_resultado.set(None)>{"×"}</button>
                    </div>
                }
            })}

            // ════════════════════════════════════════════════════════════
            // Datos generales
            // ════════════════════════════════════════════════════════════
            <div class="details-section">
                <h4>{"Datos del traslado"}</h4>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Serie"}</label>
                        <input
                            type="text"
                            prop:value=move || borrador.get().serie
                            on:input=move |ev| borrador.update(|b| b.serie = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Fecha de emisión"}</label>
                        <input
                            type="date"
                            prop:value=move || borrador.get().fecha_emision
                            on:input=move |ev| borrador.update(|b| b.fecha_emision = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Fecha de traslado"}</label>
                        <input
                            type="date"
                            prop:value=move || borrador.get().fecha_traslado
                            on:input=move |ev| borrador.update(|b| b.fecha_traslado = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Motivo"}</label>
                        <select
                            prop:value=move || borrador.get().motivo.code().to_string()
                            on:change=move |ev| {
                                if let Some(motivo) = MotivoTraslado::from_code(&event_target_value(&ev)) {
                                    borrador.update(|b| b.motivo = motivo);
                                }
                            }
                        >
                            {MotivoTraslado::all().into_iter().map(|m| {
                                view! { <option value=m.code()>{m.display_name()}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            // ════════════════════════════════════════════════════════════
            // Productos
            // ════════════════════════════════════════════════════════════
            <div class="details-section">
                <h4>{"Bienes a transportar"}</h4>
                <ProductoPicker
                    on_pick=Callback::new(move |producto: contracts::domain::a004_producto::Producto| {
                        let producto_ref = producto.to_string_id();
                        let descripcion = producto.display_name();
                        borrador.update(|b| {
                            b.agregar_linea(producto_ref, descripcion, producto.unidad, producto.stock);
                        });
                    })
                    placeholder="Buscar producto por código, barras o descripción".to_string()
                />

                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Descripción"}</th>
                            <th class="table__header-cell">{"Unidad"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Cantidad"}</th>
                            <th class="table__header-cell table__header-cell--number">{"Disponible"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || borrador.get().lines.into_iter().enumerate().map(|(i, line)| {
                            let exceso = line.cantidad > line.stock_conocido;
                            view! {
                                <tr class="table__row" class:table__row--warning=exceso>
                                    <td class="table__cell">{line.descripcion.clone()}</td>
                                    <td class="table__cell">{line.unidad.code()}</td>
                                    <td class="table__cell table__cell--number">
                                        <input
                                            type="number"
                                            class="table__input"
                                            step="1"
                                            min="0"
                                            prop:value=line.cantidad.to_string()
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                                borrador.update(|b| {
                                                    if let Some(l) = b.lines.get_mut(i) {
                                                        l.cantidad = v;
                                                    }
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell table__cell--number">{line.stock_conocido.to_string()}</td>
                                    <td class="table__cell">
                                        <button
                                            class="btn btn-link"
                                            on:click=move |_| borrador.update(|b| {
                                                if i < b.lines.len() {
                                                    b.lines.remove(i);
                                                }
                                            })
                                        >
                                            {"Quitar"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // ════════════════════════════════════════════════════════════
            // Destinatario
            // ════════════════════════════════════════════════════════════
            <div class="details-section">
                <h4>{"Destinatario"}</h4>
                {move || {
                    let b = borrador.get();
                    if b.destinatario_ref.is_empty() {
                        view! {
                            <div class="picker">
                                <div class="form-inline">
                                    <input
                                        type="text"
                                        class="picker__input"
                                        placeholder="Buscar por nombre o documento"
                                        prop:value=move || cliente_texto.get()
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            set_cliente_texto.set(v.clone());
                                            buscar_clientes(v);
                                        }
                                    />
                                    <button class="btn btn-secondary" on:click=move |_| abrir_nuevo_destinatario()>
                                        {icon("plus")}
                                        {"Nuevo destinatario"}
                                    </button>
                                </div>
                                <Show when=move || !cliente_resultados.get().is_empty()>
                                    <div class="picker__results">
                                        {move || cliente_resultados.get().into_iter().map(|c| {
                                            let id = c.to_string_id();
                                            let nombre = c.base.description.clone();
                                            let nombre_pick = nombre.clone();
                                            let documento = format!(
                                                "{} {}",
                                                c.tipo_documento.display_name(),
                                                c.numero_documento
                                            );
                                            view! {
                                                <div
                                                    class="picker__result"
                                                    on:click=move |_| {
                                                        let id = id.clone();
                                                        let nombre = nombre_pick.clone();
                                                        borrador.update(|b| {
                                                            b.destinatario_ref = id;
                                                            b.destinatario_nombre = nombre;
                                                        });
                                                        set_cliente_texto.set(String::new());
                                                        set_cliente_resultados.set(Vec::new());
                                                    }
                                                >
                                                    <span class="picker__result-code">{documento}</span>
                                                    <span class="picker__result-name">{nombre}</span>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }.into_any()
                    } else {
                        let nombre = b.destinatario_nombre.clone();
                        view! {
                            <div class="form-inline">
                                <span class="selected-entity">{nombre}</span>
                                <button
                                    class="btn btn-link"
                                    on:click=move |_| borrador.update(|b| {
                                        b.destinatario_ref = String::new();
                                        b.destinatario_nombre = String::new();
                                    })
                                >
                                    {"Cambiar"}
                                </button>
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            // ════════════════════════════════════════════════════════════
            // Transporte
            // ════════════════════════════════════════════════════════════
            <div class="details-section">
                <h4>{"Transporte"}</h4>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Modalidad"}</label>
                        <select
                            prop:value=move || borrador.get().modalidad.code().to_string()
                            on:change=move |ev| {
                                if let Some(modalidad) = TipoTransporte::from_code(&event_target_value(&ev)) {
                                    // El transportista y el vehículo dependen
                                    // de la modalidad: se limpian al cambiarla
                                    borrador.update(|b| {
                                        b.modalidad = modalidad;
                                        b.transportista_ref = String::new();
                                        b.vehiculo_ref = String::new();
                                    });
                                    set_vehiculos.set(Vec::new());
                                    cargar_transportistas(modalidad);
                                }
                            }
                        >
                            <option value="01">{TipoTransporte::Publico.display_name()}</option>
                            <option value="02">{TipoTransporte::Privado.display_name()}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label>{"Transportista"}</label>
                        <select
                            prop:value=move || borrador.get().transportista_ref
                            on:change=move |ev| {
                                let v = event_target_value(&ev);
                                borrador.update(|b| {
                                    b.transportista_ref = v.clone();
                                    b.vehiculo_ref = String::new();
                                });
                                cargar_vehiculos(v);
                            }
                        >
                            <option value="">{"-- Seleccione --"}</option>
                            {move || transportistas.get().into_iter().map(|t| {
                                let value = t.to_string_id();
                                view! { <option value=value>{t.base.description.clone()}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    <Show when=move || borrador.get().modalidad == TipoTransporte::Privado>
                        <div class="form-group">
                            <label>{"Vehículo"}</label>
                            <select
                                prop:value=move || borrador.get().vehiculo_ref
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    borrador.update(|b| b.vehiculo_ref = v);
                                }
                            >
                                <option value="">{"-- Seleccione --"}</option>
                                {move || vehiculos.get().into_iter().map(|v| {
                                    let value = v.to_string_id();
                                    view! { <option value=value>{v.placa.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                    </Show>
                </div>
            </div>

            // ════════════════════════════════════════════════════════════
            // Puntos de partida y llegada
            // ════════════════════════════════════════════════════════════
            <div class="details-section">
                <h4>{"Traslado"}</h4>
                <div class="form-group">
                    <label>{"Almacén de partida"}</label>
                    <select
                        prop:value=move || borrador.get().almacen_ref
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            borrador.update(|b| b.almacen_ref = v);
                        }
                    >
                        <option value="">{"-- Seleccione --"}</option>
                        {move || almacenes.get().into_iter().map(|a| {
                            let value = a.to_string_id();
                            let etiqueta = format!("{} — {}", a.base.description, a.direccion);
                            view! { <option value=value>{etiqueta}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Punto de llegada"}</label>
                    <UbigeoSelect
                        on_change=Callback::new(move |codigo: String| {
                            borrador.update(|b| b.llegada_ubigeo = codigo);
                        })
                    />
                    <input
                        type="text"
                        placeholder="Dirección de llegada"
                        prop:value=move || borrador.get().llegada_direccion
                        on:input=move |ev| borrador.update(|b| b.llegada_direccion = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Peso bruto (kg)"}</label>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            prop:value=move || borrador.get().peso_bruto.to_string()
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                borrador.update(|b| b.peso_bruto = v);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Bultos"}</label>
                        <input
                            type="number"
                            step="1"
                            min="1"
                            prop:value=move || borrador.get().bultos.to_string()
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(1);
                                borrador.update(|b| b.bultos = v);
                            }
                        />
                    </div>
                </div>
            </div>

            // ════════════════════════════════════════════════════════════
            // Registro
            // ════════════════════════════════════════════════════════════
            {move || {
                let pendientes = borrador.get().pendientes();
                (!pendientes.is_empty()).then(|| view! {
                    <ul class="pending-list">
                        {pendientes.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                    </ul>
                })
            }}

            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || !borrador.get().puede_registrar() || registrando.get()
                    on:click=move |_| registrar()
                >
                    {move || if registrando.get() { "Registrando..." } else { "Registrar y enviar a SUNAT" }}
                </button>
            </div>
        </div>
    }
}
