use super::view_model::ProductoDetailsViewModel;
use contracts::enums::UnidadMedida;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProductoDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProductoDetailsViewModel::new();
    let is_edit = id.is_some();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Editar producto" } else { "Nuevo producto" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="description">{"Descripción"}</label>
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
                        placeholder="Descripción del producto"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="code">{"Código (SKU)"}</label>
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
                            placeholder="Se genera si se deja vacío"
                        />
                    </div>

                    <div class="form-group">
                        <label for="codigo_barras">{"Código de barras"}</label>
                        <input
                            type="text"
                            id="codigo_barras"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().codigo_barras.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.codigo_barras = Some(event_target_value(&ev)));
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="marca">{"Marca"}</label>
                    <select
                        id="marca"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().marca_ref.clone().unwrap_or_default()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let v = event_target_value(&ev);
                                vm.form.update(|f| f.marca_ref = if v.is_empty() { None } else { Some(v) });
                            }
                        }
                    >
                        <option value="">{"-- Sin marca --"}</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.marcas.get().into_iter().map(|m| {
                                let value = m.to_string_id();
                                view! { <option value=value>{m.base.description.clone()}</option> }
                            }).collect_view()
                        }
                    </select>
                </div>

                <div class="form-row">
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
                                    vm.on_categoria_changed(if v.is_empty() { None } else { Some(v) });
                                }
                            }
                        >
                            <option value="">{"-- Sin categoría --"}</option>
                            {
                                let vm = vm_clone.clone();
                                move || vm.categorias.get().into_iter().map(|c| {
                                    let value = c.to_string_id();
                                    view! { <option value=value>{c.base.description.clone()}</option> }
                                }).collect_view()
                            }
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="subcategoria">{"Subcategoría"}</label>
                        <select
                            id="subcategoria"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().subcategoria_ref.clone().unwrap_or_default()
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let v = event_target_value(&ev);
                                    vm.form.update(|f| f.subcategoria_ref = if v.is_empty() { None } else { Some(v) });
                                }
                            }
                            disabled={
                                let vm = vm_clone.clone();
                                move || vm.form.get().categoria_ref.is_none()
                            }
                        >
                            <option value="">{"-- Sin subcategoría --"}</option>
                            {
                                let vm = vm_clone.clone();
                                move || vm.subcategorias.get().into_iter().map(|s| {
                                    let value = s.to_string_id();
                                    view! { <option value=value>{s.base.description.clone()}</option> }
                                }).collect_view()
                            }
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="unidad">{"Unidad"}</label>
                        <select
                            id="unidad"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().unidad.code().to_string()
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    if let Some(unidad) = UnidadMedida::from_code(&event_target_value(&ev)) {
                                        vm.form.update(|f| f.unidad = unidad);
                                    }
                                }
                            }
                        >
                            {UnidadMedida::all().into_iter().map(|u| {
                                view! { <option value=u.code()>{u.display_name()}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="precio_venta">{"Precio de venta (S/)"}</label>
                        <input
                            type="number"
                            id="precio_venta"
                            step="0.01"
                            min="0"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().precio_venta.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.precio_venta = v);
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="variante">{"Variante"}</label>
                        <input
                            type="text"
                            id="variante"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().variante.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.variante = Some(event_target_value(&ev)));
                                }
                            }
                            placeholder="Talla, color, presentación"
                        />
                    </div>

                    <div class="form-group">
                        <label for="stock_minimo">{"Stock mínimo"}</label>
                        <input
                            type="number"
                            id="stock_minimo"
                            step="1"
                            min="0"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().stock_minimo.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.stock_minimo = v);
                                }
                            }
                        />
                    </div>
                </div>

                // El stock solo lo mueven las notas y las guías
                {
                    let vm = vm_clone.clone();
                    move || {
                        if is_edit {
                            view! {
                                <div class="form-group">
                                    <label>{"Stock actual"}</label>
                                    <div class="readonly-field">{vm.stock.get().to_string()}</div>
                                </div>
                            }.into_any()
                        } else {
                            view! {}.into_any()
                        }
                    }
                }

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
