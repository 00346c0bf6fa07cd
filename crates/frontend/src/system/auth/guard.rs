use leptos::prelude::*;

use super::context::use_sesion;

/// Muestra el contenido solo con sesión iniciada.
#[component]
pub fn RequireSesion(children: ChildrenFn) -> impl IntoView {
    let sesion = use_sesion();

    view! {
        <Show
            when=move || sesion.is_authenticated()
            fallback=|| view! { <div class="alert alert--error">"Sesión no iniciada."</div> }
        >
            {children()}
        </Show>
    }
}

/// Muestra el contenido solo a administradores.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let sesion = use_sesion();

    view! {
        <Show
            when=move || sesion.es_admin()
            fallback=|| view! { <div class="alert alert--error">"Acceso restringido a administradores."</div> }
        >
            {children()}
        </Show>
    }
}
