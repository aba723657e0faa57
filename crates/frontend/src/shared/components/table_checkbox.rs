use leptos::prelude::*;

/// Checkbox de tabla con el estilo BEM unificado
///
/// Renderiza el `<td>` con el checkbox adentro. El click en el checkbox no
/// dispara el click de la fila (stop_propagation).
///
/// # Clases BEM
/// - `.table__cell--checkbox` - td contenedor
/// - `.table__checkbox` - input
#[component]
pub fn TableCheckbox(
    /// Señal con el estado del checkbox
    checked: Signal<bool>,
    /// Callback al cambiar el estado
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}
