//! Sidebar con grupos de menú desplegables

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalogo",
            label: "Catálogo",
            icon: "package",
            items: vec![
                ("a004_producto", tab_label_for_key("a004_producto"), "package"),
                ("a001_marca", tab_label_for_key("a001_marca"), "tag"),
                ("a002_categoria", tab_label_for_key("a002_categoria"), "list"),
                ("a003_subcategoria", tab_label_for_key("a003_subcategoria"), "list"),
            ],
        },
        MenuGroup {
            id: "terceros",
            label: "Terceros",
            icon: "contact",
            items: vec![
                ("a005_cliente", tab_label_for_key("a005_cliente"), "contact"),
                ("a006_transportista", tab_label_for_key("a006_transportista"), "truck"),
                ("a008_almacen", tab_label_for_key("a008_almacen"), "building"),
            ],
        },
        MenuGroup {
            id: "documentos",
            label: "Documentos",
            icon: "file-text",
            items: vec![
                ("a009_nota_ingreso", tab_label_for_key("a009_nota_ingreso"), "file-text"),
                ("a010_nota_salida", tab_label_for_key("a010_nota_salida"), "file-text"),
                ("a011_guia_remision", tab_label_for_key("a011_guia_remision"), "truck"),
            ],
        },
        MenuGroup {
            id: "operaciones",
            label: "Operaciones",
            icon: "layers",
            items: vec![(
                "u501_registro_guia",
                tab_label_for_key("u501_registro_guia"),
                "clipboard",
            )],
        },
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (collapsed, set_collapsed) = signal::<HashSet<&'static str>>(HashSet::new());

    let toggle_group = move |group_id: &'static str| {
        set_collapsed.update(|s| {
            if !s.insert(group_id) {
                s.remove(group_id);
            }
        });
    };

    view! {
        <nav class="sidebar">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let is_open = move || !collapsed.get().contains(group_id);
                view! {
                    <div class="sidebar__group">
                        <button
                            class="sidebar__group-header"
                            on:click=move |_| toggle_group(group_id)
                        >
                            {icon(group.icon)}
                            <span class="sidebar__group-label">{group.label}</span>
                            <span class="sidebar__group-chevron">
                                {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                            </span>
                        </button>
                        <Show when=is_open>
                            <div class="sidebar__group-items">
                                {group.items.iter().map(|(key, label, item_icon)| {
                                    let key = *key;
                                    let label = *label;
                                    let item_icon = *item_icon;
                                    let is_active = move || {
                                        tabs_store.active.get().as_deref() == Some(key)
                                    };
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=is_active
                                            on:click=move |_| tabs_store.open_tab(key, label)
                                        >
                                            {icon(item_icon)}
                                            <span class="sidebar__item-label">{label}</span>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
