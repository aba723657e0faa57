pub mod global_context;
pub mod left;
pub mod tabs;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabsHost;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHost;
use leptos::prelude::*;

/// Armazón principal de la aplicación.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button
                    class="top-header__toggle"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{"Almacén"}</span>
            </header>

            <div class="app-body">
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.left_open.get()
                >
                    {left()}
                </aside>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}

/// Layout principal: Sidebar + tabs, con la pila de modales montada una vez.
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Sincronización tabs ↔ URL; corre una sola vez al crear el componente
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <TabsHost /> }.into_any()
        />
        <ModalHost />
    }
}
