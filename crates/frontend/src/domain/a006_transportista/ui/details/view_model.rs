use super::model;
use contracts::domain::a006_transportista::TransportistaDto;
use contracts::domain::a007_vehiculo::{Vehiculo, VehiculoDto};
use contracts::domain::common::AggregateId;
use contracts::enums::TipoTransporte;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel del formulario de transportista
///
/// Los vehículos de la empresa se administran desde esta misma pantalla;
/// solo están disponibles al editar (el transportista debe existir antes de
/// colgarle vehículos).
#[derive(Clone)]
pub struct TransportistaDetailsViewModel {
    pub form: RwSignal<TransportistaDto>,
    pub vehiculos: RwSignal<Vec<Vehiculo>>,
    pub nueva_placa: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl TransportistaDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(TransportistaDto::default()),
            vehiculos: RwSignal::new(Vec::new()),
            nueva_placa: RwSignal::new(String::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let form = self.form.get();
            if form.description.trim().is_empty() {
                return false;
            }
            match form.tipo_transporte {
                TipoTransporte::Publico => form
                    .ruc
                    .as_deref()
                    .map(|r| r.trim().len() == 11)
                    .unwrap_or(false),
                TipoTransporte::Privado => {
                    let dni_ok = form
                        .conductor_dni
                        .as_deref()
                        .map(|d| d.trim().len() == 8)
                        .unwrap_or(false);
                    let nombres_ok = form
                        .conductor_nombres
                        .as_deref()
                        .map(|n| !n.trim().is_empty())
                        .unwrap_or(false);
                    let licencia_ok = form
                        .conductor_licencia
                        .as_deref()
                        .map(|l| !l.trim().is_empty())
                        .unwrap_or(false);
                    dni_ok && nombres_ok && licencia_ok
                }
            }
        }
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };

        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_by_id(existing_id.clone()).await {
                Ok(item) => {
                    this.form.update(|f| {
                        f.id = Some(item.base.id.as_string());
                        f.code = Some(item.base.code);
                        f.description = item.base.description;
                        f.comment = item.base.comment;
                        f.tipo_transporte = item.tipo_transporte;
                        f.ruc = Some(item.ruc);
                        f.conductor_dni = Some(item.conductor_dni);
                        f.conductor_nombres = Some(item.conductor_nombres);
                        f.conductor_licencia = Some(item.conductor_licencia);
                        f.telefono = Some(item.telefono);
                        f.updated_at = Some(item.base.metadata.updated_at);
                    });
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.refresh_vehiculos();
        });
    }

    pub fn refresh_vehiculos(&self) {
        let Some(id) = self.form.get_untracked().id else {
            return;
        };
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_vehiculos(&id).await {
                Ok(list) => this.vehiculos.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    /// Registra un vehículo nuevo con la placa escrita
    pub fn agregar_vehiculo(&self) {
        let placa = self.nueva_placa.get_untracked().trim().to_string();
        let Some(transportista_id) = self.form.get_untracked().id else {
            return;
        };
        if placa.len() < 6 {
            self.error
                .set(Some("La placa debe tener 6 o 7 caracteres".into()));
            return;
        }

        let this = self.clone();
        leptos::task::spawn_local(async move {
            let dto = VehiculoDto {
                placa,
                transportista_ref: Some(transportista_id),
                ..Default::default()
            };
            match model::save_vehiculo(dto).await {
                Ok(_) => {
                    this.error.set(None);
                    this.nueva_placa.set(String::new());
                    this.refresh_vehiculos();
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn quitar_vehiculo(&self, id: String) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::delete_vehiculo(&id).await {
                Ok(()) => this.refresh_vehiculos(),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            let dto = this.form.get();
            let on_saved_cb = on_saved.clone();
            leptos::task::spawn_local(async move {
                match model::save_form(dto).await {
                    Ok(_) => on_saved_cb(()),
                    Err(e) => this.error.set(Some(e)),
                }
            });
        }
    }
}
