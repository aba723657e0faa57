use super::model;
use contracts::domain::a001_marca::Marca;
use contracts::domain::a002_categoria::Categoria;
use contracts::domain::a003_subcategoria::Subcategoria;
use contracts::domain::a004_producto::ProductoDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel del formulario de producto
///
/// El select de subcategorías depende de la categoría elegida: al cambiarla
/// se recargan las opciones y se limpia la subcategoría anterior.
#[derive(Clone)]
pub struct ProductoDetailsViewModel {
    pub form: RwSignal<ProductoDto>,
    pub stock: RwSignal<f64>,
    pub marcas: RwSignal<Vec<Marca>>,
    pub categorias: RwSignal<Vec<Categoria>>,
    pub subcategorias: RwSignal<Vec<Subcategoria>>,
    pub error: RwSignal<Option<String>>,
}

impl ProductoDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(ProductoDto::default()),
            stock: RwSignal::new(0.0),
            marcas: RwSignal::new(Vec::new()),
            categorias: RwSignal::new(Vec::new()),
            subcategorias: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        };

        // Marcas y categorías se piden en paralelo al abrir el formulario
        let this = vm.clone();
        leptos::task::spawn_local(async move {
            let (marcas, categorias) =
                futures::join!(model::fetch_marcas(), model::fetch_categorias());
            match marcas {
                Ok(list) => this.marcas.set(list),
                Err(e) => this.error.set(Some(e)),
            }
            match categorias {
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
            !form.description.trim().is_empty() && form.precio_venta >= 0.0
        }
    }

    /// Cambio de categoría: recarga subcategorías y limpia la elegida
    pub fn on_categoria_changed(&self, categoria_id: Option<String>) {
        self.form.update(|f| {
            f.categoria_ref = categoria_id.clone();
            f.subcategoria_ref = None;
        });
        self.subcategorias.set(Vec::new());

        let Some(categoria_id) = categoria_id else {
            return;
        };
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_subcategorias(&categoria_id).await {
                Ok(list) => this.subcategorias.set(list),
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
                    this.stock.set(item.stock);
                    // Las subcategorías de la categoría guardada se cargan
                    // sin limpiar la selección existente
                    if let Some(categoria_ref) = &item.categoria_ref {
                        match model::fetch_subcategorias(categoria_ref).await {
                            Ok(list) => this.subcategorias.set(list),
                            Err(e) => this.error.set(Some(e)),
                        }
                    }
                    this.form.update(|f| {
                        f.id = Some(item.base.id.as_string());
                        f.code = Some(item.base.code);
                        f.description = item.base.description;
                        f.comment = item.base.comment;
                        f.codigo_barras = Some(item.codigo_barras);
                        f.marca_ref = item.marca_ref;
                        f.categoria_ref = item.categoria_ref;
                        f.subcategoria_ref = item.subcategoria_ref;
                        f.unidad = item.unidad;
                        f.precio_venta = item.precio_venta;
                        f.stock_minimo = item.stock_minimo;
                        f.variante = Some(item.variante);
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
