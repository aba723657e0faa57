use crate::layout::global_context::AppGlobalContext;
use crate::layout::MainLayout;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // El store global de tabs viaja por contexto a toda la aplicación
    provide_context(AppGlobalContext::new());

    // Pila centralizada de modales
    provide_context(ModalStackService::new());

    view! {
        <MainLayout />
    }
}
