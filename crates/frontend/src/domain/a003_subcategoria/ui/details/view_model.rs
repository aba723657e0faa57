use super::model;
use contracts::domain::a002_categoria::Categoria;
use contracts::domain::a003_subcategoria::SubcategoriaDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel del formulario de subcategoría
#[derive(Clone)]
pub struct SubcategoriaDetailsViewModel {
    pub form: RwSignal<SubcategoriaDto>,
    pub categorias: RwSignal<Vec<Categoria>>,
    pub error: RwSignal<Option<String>>,
}

impl SubcategoriaDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(SubcategoriaDto::default()),
            categorias: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        };

        // Las categorías del select se cargan al abrir el formulario
        let this = vm.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_categorias().await {
                Ok(list) => this.categorias.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });

        vm
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let form = self.form.get();
            !form.description.trim().is_empty()
                && form
                    .categoria_ref
                    .as_deref()
                    .map(|c| !c.is_empty())
                    .unwrap_or(false)
        }
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
                        f.categoria_ref = Some(item.categoria_ref);
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
