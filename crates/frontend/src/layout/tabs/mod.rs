pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Barra de tabs más el contenido de cada tab abierto.
///
/// Los tabs no activos quedan montados pero ocultos, así cada pantalla
/// conserva su estado al cambiar de tab.
#[component]
pub fn TabsHost() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        let key = tab.key.clone();
                        let key_for_activate = key.clone();
                        let key_for_close = key.clone();
                        let is_active = {
                            let key = key.clone();
                            move || tabs_store.active.get().as_deref() == Some(key.as_str())
                        };
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=is_active
                                on:click=move |_| tabs_store.activate_tab(&key_for_activate)
                            >
                                <span class="tabs__tab-title">{tab.title.clone()}</span>
                                <button
                                    class="tabs__tab-close"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    {"×"}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
