use leptos::prelude::*;

use super::Seccion;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar(seccion: RwSignal<Seccion>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            {Seccion::TODAS.iter().map(|&s| {
                view! {
                    <button
                        class=move || {
                            if seccion.get() == s {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        }
                        on:click=move |_| seccion.set(s)
                    >
                        {icon(s.icono())}
                        <span>{s.titulo()}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
