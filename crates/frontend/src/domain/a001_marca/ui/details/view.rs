use super::view_model::MarcaDetailsViewModel;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn MarcaDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = MarcaDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar marca" } else { "Nueva marca" }
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
                        placeholder="Ingrese el nombre de la marca"
                    />
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

                {
                    let vm = vm_clone.clone();
                    move || {
                        if let Some(updated_at) = vm.form.get().updated_at {
                            view! {
                                <div class="form-group">
                                    <label>{"Última actualización"}</label>
                                    <div class="readonly-field">
                                        {format!("{}", updated_at.format("%Y-%m-%d %H:%M:%S"))}
                                    </div>
                                </div>
                            }.into_any()
                        } else {
                            view! {}.into_any()
                        }
                    }
                }

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
