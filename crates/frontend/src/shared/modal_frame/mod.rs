use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Marco de modal (overlay + superficie posicionada).
///
/// A propósito NO renderiza encabezado ni botones de acción: las pantallas
/// de detalle dibujan su propio encabezado compacto para verse igual dentro
/// de un modal que dentro de un tab.
#[component]
pub fn ModalFrame(
    /// Se invoca cuando el modal debe cerrarse (click en overlay, etc.)
    on_close: Callback<()>,
    /// Cerrar al hacer click en el overlay (default: true)
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// z-index del overlay (default: 1000)
    #[prop(optional)]
    z_index: Option<i32>,
    /// Clase extra para la superficie (`div.modal`)
    #[prop(optional)]
    modal_class: Option<String>,
    /// Estilo extra para la superficie (`div.modal`)
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Solo cerramos si press y release ocurrieron sobre el overlay; así no
    // se cierra cuando el usuario selecciona texto dentro del modal y suelta
    // el mouse afuera.
    let handle_overlay_mouse_down = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            overlay_mouse_down.set(is_direct_overlay_event(&ev));
        }
    };

    let handle_overlay_click = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            let should_close =
                close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
            overlay_mouse_down.set(false);
            if should_close {
                // Diferir el cierre al siguiente tick: la delegación de
                // eventos de Leptos no debe invocar un handler ya soltado
                // cuando el overlay se elimina durante su propio dispatch.
                let on_close = on_close;
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    on_close.run(());
                });
            }
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let overlay_style_full = move || format!("z-index: {z_index};");

    let modal_style_full = move || {
        let extra = modal_style.clone().unwrap_or_default();
        if extra.is_empty() {
            "position: relative;".to_string()
        } else {
            format!("position: relative; {extra}")
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=overlay_style_full
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=move || {
                    if let Some(cls) = modal_class.clone() {
                        format!("modal {cls}")
                    } else {
                        "modal".to_string()
                    }
                }
                style=modal_style_full
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
