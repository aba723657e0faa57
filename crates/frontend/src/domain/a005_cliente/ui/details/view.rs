use super::view_model::ClienteDetailsViewModel;
use contracts::enums::{TipoDocumento, TipoPersona};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ClienteDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ClienteDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar cliente" } else { "Nuevo cliente" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="tipo_persona">{"Tipo de persona"}</label>
                        <select
                            id="tipo_persona"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().tipo_persona.code().to_string()
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    if let Some(tipo) = TipoPersona::from_code(&event_target_value(&ev)) {
                                        vm.form.update(|f| {
                                            f.tipo_persona = tipo;
                                            // El documento acompaña al tipo de persona
                                            f.tipo_documento = match tipo {
                                                TipoPersona::Juridico => TipoDocumento::Ruc,
                                                TipoPersona::Natural => TipoDocumento::Dni,
                                            };
                                        });
                                    }
                                }
                            }
                        >
                            <option value="natural">{TipoPersona::Natural.display_name()}</option>
                            <option value="juridico">{TipoPersona::Juridico.display_name()}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="tipo_documento">{"Tipo de documento"}</label>
                        <select
                            id="tipo_documento"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().tipo_documento.code().to_string()
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    if let Some(tipo) = TipoDocumento::from_code(&event_target_value(&ev)) {
                                        vm.form.update(|f| f.tipo_documento = tipo);
                                    }
                                }
                            }
                        >
                            {TipoDocumento::all().into_iter().map(|t| {
                                view! { <option value=t.code()>{t.display_name()}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-group form-group--with-action">
                    <label for="numero_documento">{"Número de documento"}</label>
                    <div class="form-inline">
                        <input
                            type="text"
                            id="numero_documento"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().numero_documento
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.numero_documento = event_target_value(&ev));
                                }
                            }
                            placeholder="DNI (8) o RUC (11)"
                        />
                        <button class="btn btn-secondary"
                            disabled={
                                let vm = vm_clone.clone();
                                move || !vm.puede_consultar()() || vm.consultando.get()
                            }
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.consultar_documento()
                            }
                        >
                            {
                                let vm = vm_clone.clone();
                                move || if vm.consultando.get() { "Consultando..." } else { "Consultar" }
                            }
                        </button>
                    </div>
                </div>

                <div class="form-group">
                    <label for="description">{"Nombre / Razón social"}</label>
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
                        placeholder="Se rellena con la consulta"
                    />
                </div>

                {
                    // Apellidos/nombres solo aplican a persona natural
                    let vm = vm_clone.clone();
                    move || {
                        if vm.form.get().tipo_persona == TipoPersona::Natural {
                            let vm_a = vm.clone();
                            let vm_b = vm.clone();
                            let vm_a2 = vm.clone();
                            let vm_b2 = vm.clone();
                            view! {
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="apellidos">{"Apellidos"}</label>
                                        <input
                                            type="text"
                                            id="apellidos"
                                            prop:value=move || vm_a.form.get().apellidos.clone().unwrap_or_default()
                                            on:input=move |ev| {
                                                vm_a2.form.update(|f| f.apellidos = Some(event_target_value(&ev)));
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="nombres">{"Nombres"}</label>
                                        <input
                                            type="text"
                                            id="nombres"
                                            prop:value=move || vm_b.form.get().nombres.clone().unwrap_or_default()
                                            on:input=move |ev| {
                                                vm_b2.form.update(|f| f.nombres = Some(event_target_value(&ev)));
                                            }
                                        />
                                    </div>
                                </div>
                            }.into_any()
                        } else {
                            view! {}.into_any()
                        }
                    }
                }

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

                <div class="form-row">
                    <div class="form-group">
                        <label for="telefono">{"Teléfono"}</label>
                        <input
                            type="text"
                            id="telefono"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().telefono.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.telefono = Some(event_target_value(&ev)));
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().email.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.email = Some(event_target_value(&ev)));
                                }
                            }
                        />
                    </div>
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
