use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::common::{CatalogItem, EntityId};
use contracts::domain::empleado::Empleado;
use contracts::domain::extra::Extra;
use contracts::domain::servicio::Servicio;
use contracts::domain::sucursal::Sucursal;
use contracts::domain::turno::{ConsultaDisponibilidad, FranjaDisponible, Turno, TurnoDto};

use crate::domain::empleado::api as empleado_api;
use crate::domain::extra::api as extra_api;
use crate::domain::servicio::api as servicio_api;
use crate::domain::sucursal::api as sucursal_api;
use crate::domain::turno::api;
use crate::domain::turno::model::{turno_schema, validate_turno};
use crate::shared::collection::{FormState, Selection};
use crate::shared::date_utils::{format_fecha, hoy};
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

/// Reserva de turnos. Las franjas libres las calcula el backend; esta
/// pantalla solo las pide y las renderiza. Elegir una franja abre el
/// formulario de reserva con los datos del cliente.
#[component]
pub fn TurnoBooking() -> impl IntoView {
    let sesion = use_sesion();

    let sucursales = RwSignal::new(Vec::<Sucursal>::new());
    let servicios = RwSignal::new(Vec::<Servicio>::new());
    let empleados = RwSignal::new(Vec::<Empleado>::new());
    let extras = RwSignal::new(Vec::<Extra>::new());

    let sucursal_id = RwSignal::new(0_i64);
    let servicio_id = RwSignal::new(0_i64);
    let empleado_id = RwSignal::new(0_i64);
    let fecha = RwSignal::new(hoy());

    let franjas = RwSignal::new(Vec::<FranjaDisponible>::new());
    let (buscando, set_buscando) = signal(false);
    let (consultado, set_consultado) = signal(false);
    let franja_elegida = RwSignal::new(None::<FranjaDisponible>);

    let turnos = RwSignal::new(Vec::<Turno>::new());
    let (error, set_error) = signal(None::<String>);

    let form = RwSignal::new(FormState::new(TurnoDto::default(), turno_schema()));
    let extras_sel = RwSignal::new(Selection::<EntityId>::new());

    let fetch_catalogos = move || {
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Ok(data) = sucursal_api::fetch_sucursales(&sesion).await {
                sucursales.set(data);
            }
            if let Ok(data) = servicio_api::fetch_servicios(&sesion).await {
                servicios.set(data);
            }
            if let Ok(data) = empleado_api::fetch_empleados(&sesion).await {
                empleados.set(data);
            }
            if let Ok(data) = extra_api::fetch_extras(&sesion).await {
                extras.set(data);
            }
        });
    };

    let fetch_turnos_del_dia = move || {
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        let dia = fecha.get_untracked();
        spawn_local(async move {
            match api::fetch_turnos(&sesion, &dia).await {
                Ok(data) => turnos.set(data),
                Err(e) => set_error.set(Some(format!("No se pudieron cargar los turnos: {}", e))),
            }
        });
    };

    fetch_catalogos();
    fetch_turnos_del_dia();

    let buscar_disponibilidad = move || {
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        if sucursal_id.get_untracked() <= 0 || servicio_id.get_untracked() <= 0 {
            set_error.set(Some("Elegí sucursal y servicio antes de buscar".to_string()));
            return;
        }
        set_error.set(None);
        set_buscando.set(true);
        franja_elegida.set(None);
        let consulta = ConsultaDisponibilidad {
            sucursal_id: sucursal_id.get_untracked(),
            servicio_id: servicio_id.get_untracked(),
            empleado_id: Some(empleado_id.get_untracked()).filter(|id| *id > 0),
            fecha: fecha.get_untracked(),
        };
        spawn_local(async move {
            match api::fetch_disponibilidad(&sesion, &consulta).await {
                Ok(data) => {
                    franjas.set(data);
                    set_consultado.set(true);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudo consultar disponibilidad: {}", e)))
                }
            }
            set_buscando.set(false);
        });
    };

    // elegir una franja precarga la reserva completa; los únicos campos
    // que faltan son los del cliente
    let elegir_franja = move |franja: FranjaDisponible| {
        let dto = TurnoDto {
            id: None,
            sucursal_id: sucursal_id.get_untracked(),
            empleado_id: franja.empleado_id,
            servicio_id: servicio_id.get_untracked(),
            fecha: fecha.get_untracked(),
            hora_inicio: franja.hora_inicio.clone(),
            hora_fin: franja.hora_fin.clone(),
            cliente_nombre: String::new(),
            cliente_telefono: String::new(),
            extras: Vec::new(),
        };
        form.update(|f| f.load(dto));
        extras_sel.update(|s| s.clear());
        franja_elegida.set(Some(franja));
    };

    let toggle_extra = move |id: EntityId, checked: bool| {
        extras_sel.update(|s| s.toggle(id, checked));
        let mut ids = extras_sel.with_untracked(|s| s.to_vec());
        ids.sort_unstable();
        form.update(|f| f.update_draft(|d| d.extras = ids.clone()));
    };

    let nombre_empleado = move |id: EntityId| {
        empleados.with(|es| {
            es.iter()
                .find(|e| e.id == id)
                .map(|e| e.nombre_completo())
                .unwrap_or_else(|| format!("#{}", id))
        })
    };

    let nombre_servicio = move |id: EntityId| {
        servicios.with(|ss| {
            ss.iter()
                .find(|s| s.id == id)
                .map(|s| s.nombre.clone())
                .unwrap_or_else(|| format!("#{}", id))
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form
            .try_update(|f| f.begin_submit(|d| validate_turno(d).first_message()))
            .flatten()
        else {
            return;
        };
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = api::crear_turno(&sesion, &draft).await;
            let ok = result.is_ok();
            form.update(|f| f.finish_submit(result));
            if ok {
                form.update(|f| f.reset_form());
                franja_elegida.set(None);
                franjas.set(Vec::new());
                set_consultado.set(false);
                fetch_turnos_del_dia();
            }
        });
    };

    let cancelar_reserva = move || {
        form.update(|f| f.reset_form());
        franja_elegida.set(None);
    };

    let cancelar_turno = move |id: EntityId| {
        let confirmado = web_sys::window()
            .map(|w| w.confirm_with_message("¿Cancelar el turno?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmado {
            return;
        }
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = api::cancelar_turno(&sesion, id).await {
                set_error.set(Some(e));
            }
        });
        fetch_turnos_del_dia();
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Turnos"</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="booking-query">
                <div class="form-row">
                    <div class="form-group">
                        <label for="b-sucursal">"Sucursal"</label>
                        <select
                            id="b-sucursal"
                            on:change=move |ev| {
                                sucursal_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || sucursal_id.get().to_string()
                        >
                            <option value="0">"Seleccionar..."</option>
                            {move || sucursales.get().into_iter().map(|s| view! {
                                <option value={s.id.to_string()}>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="b-servicio">"Servicio"</label>
                        <select
                            id="b-servicio"
                            on:change=move |ev| {
                                servicio_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || servicio_id.get().to_string()
                        >
                            <option value="0">"Seleccionar..."</option>
                            {move || servicios.get().into_iter().map(|s| view! {
                                <option value={s.id.to_string()}>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="b-empleado">"Empleado (opcional)"</label>
                        <select
                            id="b-empleado"
                            on:change=move |ev| {
                                empleado_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || empleado_id.get().to_string()
                        >
                            <option value="0">"Cualquiera"</option>
                            {move || empleados.get().into_iter().map(|e| view! {
                                <option value={e.id.to_string()}>{e.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="b-fecha">"Fecha"</label>
                        <input
                            type="date"
                            id="b-fecha"
                            prop:value=move || fecha.get()
                            on:input=move |ev| {
                                fecha.set(event_target_value(&ev));
                                fetch_turnos_del_dia();
                            }
                        />
                    </div>
                    <button
                        class="button button--primary"
                        on:click=move |_| buscar_disponibilidad()
                        disabled=move || buscando.get()
                    >
                        {icon("search")}
                        {move || if buscando.get() { " Buscando..." } else { " Buscar disponibilidad" }}
                    </button>
                </div>
            </div>

            {move || (consultado.get() && franjas.with(|f| f.is_empty())).then(|| view! {
                <div class="alert alert--info">"No hay franjas libres para esa búsqueda."</div>
            })}

            <div class="slot-grid">
                {move || franjas.get().into_iter().map(|franja| {
                    let etiqueta = format!(
                        "{} - {} · {}",
                        franja.hora_inicio,
                        franja.hora_fin,
                        nombre_empleado(franja.empleado_id),
                    );
                    let elegida = franja_elegida.get()
                        .map(|f| f == franja)
                        .unwrap_or(false);
                    let para_elegir = franja.clone();
                    view! {
                        <button
                            class=if elegida { "slot slot--selected" } else { "slot" }
                            on:click=move |_| elegir_franja(para_elegir.clone())
                        >
                            {etiqueta}
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show when=move || franja_elegida.get().is_some()>
                <form class="booking-form" on:submit=on_submit>
                    <h2>"Datos de la reserva"</h2>

                    {move || form.with(|f| f.error().map(String::from)).map(|e| view! {
                        <div class="alert alert--error">{e}</div>
                    })}

                    <div class="form-row">
                        <div class="form-group">
                            <label for="cliente-nombre">"Nombre del cliente"</label>
                            <input
                                type="text"
                                id="cliente-nombre"
                                prop:value=move || form.with(|f| f.draft().cliente_nombre.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.handle_change("clienteNombre", &event_target_value(&ev)));
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label for="cliente-telefono">"Teléfono"</label>
                            <input
                                type="text"
                                id="cliente-telefono"
                                prop:value=move || form.with(|f| f.draft().cliente_telefono.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.handle_change("clienteTelefono", &event_target_value(&ev)));
                                }
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label>"Extras"</label>
                        <div class="multi-select__options">
                            {move || extras.get().into_iter().map(|e| {
                                let id = e.id;
                                view! {
                                    <label class="multi-select__option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || extras_sel.with(|s| s.contains(&id))
                                            on:change=move |ev| toggle_extra(id, event_target_checked(&ev))
                                        />
                                        {e.nombre.clone()}
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="form-row">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| cancelar_reserva()
                            disabled=move || form.with(|f| f.is_submitting())
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || form.with(|f| f.is_submitting())
                        >
                            {move || if form.with(|f| f.is_submitting()) { "Reservando..." } else { "Reservar turno" }}
                        </button>
                    </div>
                </form>
            </Show>

            <h2 class="section-title">
                {move || format!("Turnos del {}", format_fecha(&fecha.get()))}
            </h2>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Horario"</th>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Servicio"</th>
                            <th class="table__header-cell">"Empleado"</th>
                            <th class="table__header-cell">"Extras"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || turnos.get()
                            key=|t| t.id
                            children=move |turno| {
                                let id = turno.id;
                                let horario = format!("{} - {}", turno.hora_inicio, turno.hora_fin);
                                let cliente = turno.cliente_nombre.clone();
                                let servicio = turno.servicio_id;
                                let empleado = turno.empleado_id;
                                let cantidad_extras = turno.extras.len();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{horario}</td>
                                        <td class="table__cell">{cliente}</td>
                                        <td class="table__cell">{move || nombre_servicio(servicio)}</td>
                                        <td class="table__cell">{move || nombre_empleado(empleado)}</td>
                                        <td class="table__cell">{cantidad_extras}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--subtle"
                                                title="Cancelar turno"
                                                on:click=move |_| cancelar_turno(id)
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
