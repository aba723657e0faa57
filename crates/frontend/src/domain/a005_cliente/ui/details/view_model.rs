use super::model;
use contracts::domain::a005_cliente::ClienteDto;
use contracts::domain::common::AggregateId;
use contracts::enums::{TipoDocumento, TipoPersona};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel del formulario de cliente/destinatario
#[derive(Clone)]
pub struct ClienteDetailsViewModel {
    pub form: RwSignal<ClienteDto>,
    pub error: RwSignal<Option<String>>,
    pub consultando: RwSignal<bool>,
}

impl ClienteDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ClienteDto::default()),
            error: RwSignal::new(None),
            consultando: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let form = self.form.get();
            !form.description.trim().is_empty()
                && form
                    .tipo_documento
                    .validar_numero(&form.numero_documento)
                    .is_ok()
        }
    }

    /// ¿El número escrito tiene la forma de un documento consultable?
    pub fn puede_consultar(&self) -> impl Fn() -> bool + '_ {
        move || TipoDocumento::clasificar(&self.form.get().numero_documento).is_some()
    }

    /// Consulta el documento en el servicio externo y rellena el formulario.
    ///
    /// 8 dígitos dispara la consulta de DNI, 11 la de RUC; el tipo de
    /// persona y documento del formulario se ajustan al resultado.
    pub fn consultar_documento(&self) {
        let numero = self.form.get_untracked().numero_documento.trim().to_string();
        let Some(tipo) = TipoDocumento::clasificar(&numero) else {
            return;
        };

        let this = self.clone();
        this.consultando.set(true);
        leptos::task::spawn_local(async move {
            let resultado = match tipo {
                TipoDocumento::Dni => model::consultar_dni(&numero).await,
                _ => model::consultar_ruc(&numero).await,
            };
            this.consultando.set(false);

            match resultado {
                Ok(identidad) => {
                    this.error.set(None);
                    this.form.update(|f| {
                        f.numero_documento = identidad.numero_documento.clone();
                        f.tipo_documento = identidad.tipo_documento;
                        f.tipo_persona = match identidad.tipo_documento {
                            TipoDocumento::Ruc => TipoPersona::Juridico,
                            _ => TipoPersona::Natural,
                        };
                        f.description = identidad.nombre_completo.clone();
                        if !identidad.apellidos.is_empty() {
                            f.apellidos = Some(identidad.apellidos.clone());
                        }
                        if !identidad.nombres.is_empty() {
                            f.nombres = Some(identidad.nombres.clone());
                        }
                        if !identidad.direccion.is_empty() {
                            f.direccion = Some(identidad.direccion.clone());
                        }
                        if !identidad.ubigeo.is_empty() {
                            f.ubigeo = Some(identidad.ubigeo.clone());
                        }
                    });
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };

        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(item) => {
                    this.form.update(|f| {
                        f.id = Some(item.base.id.as_string());
                        f.code = Some(item.base.code);
                        f.description = item.base.description;
                        f.comment = item.base.comment;
                        f.tipo_persona = item.tipo_persona;
                        f.tipo_documento = item.tipo_documento;
                        f.numero_documento = item.numero_documento;
                        f.apellidos = Some(item.apellidos);
                        f.nombres = Some(item.nombres);
                        f.direccion = Some(item.direccion);
                        f.ubigeo = Some(item.ubigeo);
                        f.telefono = Some(item.telefono);
                        f.email = Some(item.email);
                        f.updated_at = Some(item.base.metadata.updated_at);
                    });
                }
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
