use super::view_model::TransportistaDetailsViewModel;
use contracts::enums::TipoTransporte;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn TransportistaDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = TransportistaDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar transportista" } else { "Nuevo transportista" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="tipo_transporte">{"Modalidad"}</label>
                    <select
                        id="tipo_transporte"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().tipo_transporte.code().to_string()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                if let Some(tipo) = TipoTransporte::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.tipo_transporte = tipo);
                                }
                            }
                        }
                    >
                        <option value="01">{TipoTransporte::Publico.display_name()}</option>
                        <option value="02">{TipoTransporte::Privado.display_name()}</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="description">{"Razón social / Nombre"}</label>
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
                    />
                </div>

                {
                    // Campos según la modalidad: RUC para público, conductor
                    // para privado
                    let vm = vm_clone.clone();
                    move || {
                        match vm.form.get().tipo_transporte {
                            TipoTransporte::Publico => {
                                let vm_ruc = vm.clone();
                                let vm_ruc2 = vm.clone();
                                view! {
                                    <div class="form-group">
                                        <label for="ruc">{"RUC"}</label>
                                        <input
                                            type="text"
                                            id="ruc"
                                            prop:value=move || vm_ruc.form.get().ruc.clone().unwrap_or_default()
                                            on:input=move |ev| {
                                                vm_ruc2.form.update(|f| f.ruc = Some(event_target_value(&ev)));
                                            }
                                            placeholder="11 dígitos"
                                        />
                                    </div>
                                }.into_any()
                            }
                            TipoTransporte::Privado => {
                                let vm_dni = vm.clone();
                                let vm_dni2 = vm.clone();
                                let vm_nom = vm.clone();
                                let vm_nom2 = vm.clone();
                                let vm_lic = vm.clone();
                                let vm_lic2 = vm.clone();
                                view! {
                                    <div class="form-row">
                                        <div class="form-group">
                                            <label for="conductor_dni">{"DNI del conductor"}</label>
                                            <input
                                                type="text"
                                                id="conductor_dni"
                                                prop:value=move || vm_dni.form.get().conductor_dni.clone().unwrap_or_default()
                                                on:input=move |ev| {
                                                    vm_dni2.form.update(|f| f.conductor_dni = Some(event_target_value(&ev)));
                                                }
                                                placeholder="8 dígitos"
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label for="conductor_nombres">{"Nombres del conductor"}</label>
                                            <input
                                                type="text"
                                                id="conductor_nombres"
                                                prop:value=move || vm_nom.form.get().conductor_nombres.clone().unwrap_or_default()
                                                on:input=move |ev| {
                                                    vm_nom2.form.update(|f| f.conductor_nombres = Some(event_target_value(&ev)));
                                                }
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label for="conductor_licencia">{"Licencia"}</label>
                                            <input
                                                type="text"
                                                id="conductor_licencia"
                                                prop:value=move || vm_lic.form.get().conductor_licencia.clone().unwrap_or_default()
                                                on:input=move |ev| {
                                                    vm_lic2.form.update(|f| f.conductor_licencia = Some(event_target_value(&ev)));
                                                }
                                                placeholder="Q12345678"
                                            />
                                        </div>
                                    </div>
                                }.into_any()
                            }
                        }
                    }
                }

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

                {
                    // Vehículos: solo al editar
                    let vm = vm_clone.clone();
                    move || {
                        if !vm.is_edit_mode()() {
                            return view! {}.into_any();
                        }
                        let vm_list = vm.clone();
                        let vm_placa = vm.clone();
                        let vm_placa2 = vm.clone();
                        let vm_add = vm.clone();
                        view! {
                            <div class="details-section">
                                <h4>{"Vehículos"}</h4>
                                <div class="form-inline">
                                    <input
                                        type="text"
                                        placeholder="Placa (ABC123)"
                                        prop:value=move || vm_placa.nueva_placa.get()
                                        on:input=move |ev| vm_placa2.nueva_placa.set(event_target_value(&ev))
                                    />
                                    <button class="btn btn-secondary" on:click=move |_| vm_add.agregar_vehiculo()>
                                        {"Agregar"}
                                    </button>
                                </div>
                                <table class="table__data">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Placa"}</th>
                                            <th class="table__header-cell">{"Marca"}</th>
                                            <th class="table__header-cell">{"Modelo"}</th>
                                            <th class="table__header-cell"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || vm_list.vehiculos.get().into_iter().map(|v| {
                                            let id = v.to_string_id();
                                            let vm_del = vm_list.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{v.placa.clone()}</td>
                                                    <td class="table__cell">{if v.marca.is_empty() { "-".to_string() } else { v.marca.clone() }}</td>
                                                    <td class="table__cell">{if v.modelo.is_empty() { "-".to_string() } else { v.modelo.clone() }}</td>
                                                    <td class="table__cell">
                                                        <button class="btn btn-link" on:click=move |_| vm_del.quitar_vehiculo(id.clone())>
                                                            {"Quitar"}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_any()
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
