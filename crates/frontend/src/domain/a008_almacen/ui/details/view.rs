use super::view_model::AlmacenDetailsViewModel;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn AlmacenDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = AlmacenDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar almacén" } else { "Nuevo almacén" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="description">{"Nombre"}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                        placeholder="Almacén Central"
                    />
                </div>

                <div class="form-group">
                    <label for="direccion">{"Dirección"}</label>
                    <input
                        type="text"
                        id="direccion"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().direccion.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.direccion = Some(event_target_value(&ev)));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="ubigeo">{"Ubigeo"}</label>
                    <input
                        type="text"
                        id="ubigeo"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().ubigeo.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.ubigeo = Some(event_target_value(&ev)));
                            }
                        }
                        placeholder="6 dígitos (ej. 150101)"
                    />
                </div>

                <div class="form-actions">
                    <button class="btn btn-primary"
                        disabled={
                            let vm = vm_clone.clone();
                            move || !vm.is_form_valid()()
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
