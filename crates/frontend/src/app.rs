use leptos::prelude::*;

use crate::layout::Shell;
use crate::system::auth::context::{use_sesion, SesionProvider};
use crate::system::pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SesionProvider>
            <AppGate />
        </SesionProvider>
    }
}

#[component]
fn AppGate() -> impl IntoView {
    let sesion = use_sesion();

    view! {
        <Show
            when=move || sesion.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}
