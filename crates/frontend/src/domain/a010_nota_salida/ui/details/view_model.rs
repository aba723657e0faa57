use super::model;
use contracts::domain::a004_producto::Producto;
use contracts::domain::a008_almacen::Almacen;
use contracts::domain::a010_nota_salida::{NotaSalidaDto, NotaSalidaLine};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

/// ViewModel del formulario de nota de salida
///
/// Guarda el stock conocido de cada producto agregado para avisar en el
/// formulario cuando la cantidad pedida lo supera; la validación definitiva
/// la repite el backend al asentar.
#[derive(Clone)]
pub struct NotaSalidaDetailsViewModel {
    pub form: RwSignal<NotaSalidaDto>,
    pub almacenes: RwSignal<Vec<Almacen>>,
    pub stock_conocido: RwSignal<HashMap<String, f64>>,
    pub posted: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl NotaSalidaDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(NotaSalidaDto::default()),
            almacenes: RwSignal::new(Vec::new()),
            stock_conocido: RwSignal::new(HashMap::new()),
            posted: RwSignal::new(false),
            error: RwSignal::new(None),
        };

        if let Some(almacen) = crate::shared::storage::load::<String>(
            crate::shared::storage::ALMACEN_SELECCIONADO,
        ) {
            vm.form.update(|f| f.almacen_ref = Some(almacen));
        }

        let this = vm.clone();
        leptos::task::spawn_local(async move {
            match model::fetch_almacenes().await {
                Ok(list) => this.almacenes.set(list),
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
            !form.fecha.trim().is_empty()
                && form
                    .almacen_ref
                    .as_deref()
                    .map(|a| !a.is_empty())
                    .unwrap_or(false)
                && !form.lines.is_empty()
                && form.lines.iter().all(|l| l.cantidad > 0.0)
                && !self.hay_exceso()
        }
    }

    /// ¿Alguna línea pide más de lo disponible según el stock conocido?
    pub fn hay_exceso(&self) -> bool {
        let stock = self.stock_conocido.get();
        self.form.get().lines.iter().any(|l| {
            stock
                .get(&l.producto_ref)
                .map(|disponible| l.cantidad > *disponible)
                .unwrap_or(false)
        })
    }

    pub fn exceso_en(&self, producto_ref: &str, cantidad: f64) -> bool {
        self.stock_conocido
            .get()
            .get(producto_ref)
            .map(|disponible| cantidad > *disponible)
            .unwrap_or(false)
    }

    /// Agrega un producto como línea; si ya figura, suma la cantidad y la
    /// revalida contra el stock conocido
    pub fn agregar_producto(&self, producto: Producto) {
        let producto_ref = producto.to_string_id();
        self.stock_conocido.update(|s| {
            s.insert(producto_ref.clone(), producto.stock);
        });
        self.form.update(|f| {
            match f.lines.iter_mut().find(|l| l.producto_ref == producto_ref) {
                Some(line) => line.cantidad += 1.0,
                None => f.lines.push(NotaSalidaLine {
                    producto_ref,
                    descripcion: producto.display_name(),
                    cantidad: 1.0,
                }),
            }
        });
    }

    pub fn set_cantidad(&self, index: usize, cantidad: f64) {
        self.form.update(|f| {
            if let Some(line) = f.lines.get_mut(index) {
                line.cantidad = cantidad;
            }
        });
    }

    pub fn quitar_linea(&self, index: usize) {
        self.form.update(|f| {
            if index < f.lines.len() {
                f.lines.remove(index);
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
                    this.posted.set(item.base.metadata.is_posted);
                    let lines = item.parse_lines();
                    this.form.update(|f| {
                        f.id = Some(item.base.id.as_string());
                        f.fecha = item.fecha;
                        f.almacen_ref = Some(item.almacen_ref);
                        f.motivo = Some(item.motivo);
                        f.observacion = Some(item.observacion);
                        f.comment = item.base.comment;
                        f.lines = lines;
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
