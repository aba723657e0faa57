use super::view_model::NotaIngresoDetailsViewModel;
use crate::domain::a004_producto::ui::picker::ProductoPicker;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn NotaIngresoDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = NotaIngresoDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar nota de ingreso" } else { "Nueva nota de ingreso" }
                    }
                </h3>
                {
                    let vm = vm_clone.clone();
                    move || vm.posted.get().then(|| view! {
                        <span class="badge badge--posted">{"Asentada"}</span>
                    })
                }
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="fecha">{"Fecha"}</label>
                        <input
                            type="date"
                            id="fecha"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().fecha
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.fecha = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="almacen">{"Almacén"}</label>
                        <select
                            id="almacen"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().almacen_ref.clone().unwrap_or_default()
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let v = event_target_value(&ev);
                                    vm.form.update(|f| f.almacen_ref = if v.is_empty() { None } else { Some(v) });
                                }
                            }
                        >
                            <option value="">{"-- Seleccione --"}</option>
                            {
                                let vm = vm_clone.clone();
                                move || vm.almacenes.get().into_iter().map(|a| {
                                    let value = a.to_string_id();
                                    view! { <option value=value>{a.base.description.clone()}</option> }
                                }).collect_view()
                            }
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="proveedor">{"Proveedor"}</label>
                    <input
                        type="text"
                        id="proveedor"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().proveedor.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.proveedor = Some(event_target_value(&ev)));
                            }
                        }
                    />
                </div>

                <div class="details-section">
                    <h4>{"Productos"}</h4>
                    <ProductoPicker
                        on_pick={
                            let vm = vm_clone.clone();
                            Callback::new(move |producto| vm.agregar_producto(producto))
                        }
                        placeholder="Agregar producto por código o descripción".to_string()
                    />

                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Descripción"}</th>
                                <th class="table__header-cell table__header-cell--number">{"Cantidad"}</th>
                                <th class="table__header-cell table__header-cell--number">{"Costo unit."}</th>
                                <th class="table__header-cell table__header-cell--number">{"Importe"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let vm = vm_clone.clone();
                                move || vm.form.get().lines.into_iter().enumerate().map(|(i, line)| {
                                    let vm_cant = vm.clone();
                                    let vm_costo = vm.clone();
                                    let vm_quitar = vm.clone();
                                    let importe = line.cantidad * line.costo_unitario;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{line.descripcion.clone()}</td>
                                            <td class="table__cell table__cell--number">
                                                <input
                                                    type="number"
                                                    class="table__input"
                                                    step="1"
                                                    min="0"
                                                    prop:value=line.cantidad.to_string()
                                                    on:input=move |ev| {
                                                        let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                                        vm_cant.set_cantidad(i, v);
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                <input
                                                    type="number"
                                                    class="table__input"
                                                    step="0.01"
                                                    min="0"
                                                    prop:value=line.costo_unitario.to_string()
                                                    on:input=move |ev| {
                                                        let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                                        vm_costo.set_costo(i, v);
                                                    }
                                                />
                                            </td>
                                            <td class="table__cell table__cell--number">{format!("{:.2}", importe)}</td>
                                            <td class="table__cell">
                                                <button class="btn btn-link" on:click=move |_| vm_quitar.quitar_linea(i)>
                                                    {"Quitar"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        </tbody>
                    </table>

                    <div class="details-total">
                        {
                            let vm = vm_clone.clone();
                            move || format!("Total: S/ {:.2}", vm.total())
                        }
                    </div>
                </div>

                <div class="form-group">
                    <label for="observacion">{"Observación"}</label>
                    <textarea id="observacion"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().observacion.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.observacion = Some(event_target_value(&ev)));
                            }
                        }
                    />
                </div>

                <div class="form-actions">
                    <button class="btn btn-primary"
                        disabled={
                            let vm = vm_clone.clone();
                            move || !vm.is_form_valid()() || vm.posted.get()
                        }
                        on:click={
                            let vm = vm_clone.clone();
                            let on_saved = on_saved.clone();
                            move |_| {
                                vm.save_command(on_saved.clone())();
                            }
                        }
                    >{"💾 Guardar"}</button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel(())>{"Cancelar"}</button>
                </div>
            </div>
        </div>
    }
}
