pub mod sidebar;

use leptos::prelude::*;

use crate::domain::empleado::ui::list::EmpleadoList;
use crate::domain::extra::ui::list::ExtraList;
use crate::domain::periodo_laboral::ui::list::PeriodoList;
use crate::domain::servicio::ui::list::ServicioList;
use crate::domain::sucursal::ui::list::SucursalList;
use crate::domain::turno::ui::booking::TurnoBooking;
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;
use sidebar::Sidebar;

/// Secciones del panel. La navegación es un signal local, sin router: cada
/// sección es una pantalla completa.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seccion {
    Empleados,
    Servicios,
    Extras,
    Sucursales,
    Periodos,
    Turnos,
}

impl Seccion {
    pub const TODAS: [Seccion; 6] = [
        Seccion::Empleados,
        Seccion::Servicios,
        Seccion::Extras,
        Seccion::Sucursales,
        Seccion::Periodos,
        Seccion::Turnos,
    ];

    pub fn titulo(&self) -> &'static str {
        match self {
            Seccion::Empleados => "Empleados",
            Seccion::Servicios => "Servicios",
            Seccion::Extras => "Extras",
            Seccion::Sucursales => "Sucursales",
            Seccion::Periodos => "Períodos laborales",
            Seccion::Turnos => "Turnos",
        }
    }

    pub fn icono(&self) -> &'static str {
        match self {
            Seccion::Empleados => "empleados",
            Seccion::Servicios => "servicios",
            Seccion::Extras => "extras",
            Seccion::Sucursales => "sucursales",
            Seccion::Periodos => "periodos",
            Seccion::Turnos => "turnos",
        }
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let sesion = use_sesion();
    let seccion = RwSignal::new(Seccion::Empleados);

    let nombre_usuario = move || {
        sesion
            .current()
            .map(|s| s.usuario.nombre.unwrap_or(s.usuario.usuario))
            .unwrap_or_default()
    };

    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__brand">"Salón Admin"</span>
                <div class="top-header__right">
                    <span class="top-header__user">{nombre_usuario}</span>
                    <button
                        class="button button--subtle"
                        title="Cerrar sesión"
                        on:click=move |_| sesion.cerrar()
                    >
                        {icon("logout")}
                    </button>
                </div>
            </header>

            <div class="app-body">
                <Sidebar seccion=seccion />

                <main class="app-main">
                    {move || match seccion.get() {
                        Seccion::Empleados => view! { <EmpleadoList /> }.into_any(),
                        Seccion::Servicios => view! { <ServicioList /> }.into_any(),
                        Seccion::Extras => view! { <ExtraList /> }.into_any(),
                        Seccion::Sucursales => view! { <SucursalList /> }.into_any(),
                        Seccion::Periodos => view! { <PeriodoList /> }.into_any(),
                        Seccion::Turnos => view! { <TurnoBooking /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
