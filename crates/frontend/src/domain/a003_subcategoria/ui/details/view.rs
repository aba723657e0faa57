use super::view_model::SubcategoriaDetailsViewModel;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn SubcategoriaDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = SubcategoriaDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar subcategoría" } else { "Nueva subcategoría" }
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
                        placeholder="Ingrese el nombre de la subcategoría"
                    />
                </div>

                <div class="form-group">
                    <label for="categoria">{"Categoría"}</label>
                    <select
                        id="categoria"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().categoria_ref.clone().unwrap_or_default()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.categoria_ref = if v.is_empty() { None } else { Some(v) });
                            }
                        }
                    >
                        <option value="">{"-- Seleccione una categoría --"}</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.categorias.get().into_iter().map(|c| {
                                let value = c.to_string_id();
                                view! {
                                    <option value=value>{c.base.description.clone()}</option>
                                }
                            }).collect_view()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="code">{"Código"}</label>
                    <input
                        type="text"
                        id="code"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().code.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.code = Some(event_target_value(&ev)));
                            }
                        }
                        placeholder="Código (opcional)"
                    />
                </div>

                <div class="form-group">
                    <label for="comment">{"Comentario"}</label>
                    <textarea id="comment"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().comment.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.comment = if v.trim().is_empty() { None } else { Some(v) });
                            }
                        }
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
