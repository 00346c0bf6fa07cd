use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::common::CatalogItem;
use contracts::domain::empleado::Empleado;
use contracts::domain::periodo_laboral::{PeriodoLaboral, TipoPeriodo, DIAS_SEMANA};

use crate::domain::periodo_laboral::api;
use crate::domain::periodo_laboral::model::{periodo_schema, validate_periodo};
use crate::shared::collection::FormState;
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

/// Alta/edición de período. El tipo es un grupo de opciones excluyentes:
/// elegir "Horario" muestra día y horas, elegir "Licencia" muestra el rango
/// de fechas. El validador solo mira el grupo activo.
#[component]
pub fn PeriodoDetails(
    periodo: Option<PeriodoLaboral>,

    #[prop(into)]
    empleados: Signal<Vec<Empleado>>,

    on_close: Callback<()>,

    on_saved: Callback<()>,
) -> impl IntoView {
    let sesion = use_sesion();

    let initial = periodo.as_ref().map(|p| p.to_dto()).unwrap_or_default();
    let es_edicion = initial.id.is_some();

    let form = RwSignal::new(FormState::new(initial, periodo_schema()));

    let tipo_actual = Signal::derive(move || form.with(|f| f.draft().tipo));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form
            .try_update(|f| f.begin_submit(|d| validate_periodo(d).first_message()))
            .flatten()
        else {
            return;
        };
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = api::guardar_periodo(&sesion, &draft).await;
            let ok = result.is_ok();
            form.update(|f| f.finish_submit(result));
            if ok {
                on_saved.run(());
            }
        });
    };

    let on_cancel = move || {
        form.update(|f| f.reset_form());
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if es_edicion { "Edición de período" } else { "Nuevo período" }}
                    </h2>
                    <button class="button button--subtle" on:click=move |_| on_cancel()>
                        {icon("x")}
                    </button>
                </div>

                <form on:submit=on_submit>
                    <div class="modal-body">
                        {move || form.with(|f| f.error().map(String::from)).map(|e| view! {
                            <div class="alert alert--error">{e}</div>
                        })}

                        <div class="form-group">
                            <label for="empleado">"Empleado"</label>
                            <select
                                id="empleado"
                                on:change=move |ev| {
                                    form.update(|f| f.handle_change("empleadoId", &event_target_value(&ev)));
                                }
                                prop:value=move || form.with(|f| f.draft().empleado_id).to_string()
                            >
                                <option value="0">"Seleccionar..."</option>
                                {move || empleados.get().into_iter().map(|e| view! {
                                    <option value={e.id.to_string()}>{e.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Tipo de período"</label>
                            <div class="radio-group">
                                <label class="radio-option">
                                    <input
                                        type="radio"
                                        name="tipo"
                                        value="horario"
                                        prop:checked=move || tipo_actual.get() == TipoPeriodo::Horario
                                        on:change=move |_| {
                                            form.update(|f| f.handle_change("tipo", "horario"));
                                        }
                                    />
                                    "Horario recurrente"
                                </label>
                                <label class="radio-option">
                                    <input
                                        type="radio"
                                        name="tipo"
                                        value="licencia"
                                        prop:checked=move || tipo_actual.get() == TipoPeriodo::Licencia
                                        on:change=move |_| {
                                            form.update(|f| f.handle_change("tipo", "licencia"));
                                        }
                                    />
                                    "Licencia"
                                </label>
                            </div>
                        </div>

                        <Show
                            when=move || tipo_actual.get() == TipoPeriodo::Horario
                            fallback=move || view! {
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="fecha-desde">"Desde"</label>
                                        <input
                                            type="date"
                                            id="fecha-desde"
                                            prop:value=move || form.with(|f| f.draft().fecha_desde.clone())
                                            on:input=move |ev| {
                                                form.update(|f| f.handle_change("fechaDesde", &event_target_value(&ev)));
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="fecha-hasta">"Hasta"</label>
                                        <input
                                            type="date"
                                            id="fecha-hasta"
                                            prop:value=move || form.with(|f| f.draft().fecha_hasta.clone())
                                            on:input=move |ev| {
                                                form.update(|f| f.handle_change("fechaHasta", &event_target_value(&ev)));
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="motivo">"Motivo"</label>
                                        <input
                                            type="text"
                                            id="motivo"
                                            placeholder="Vacaciones"
                                            prop:value=move || form.with(|f| f.draft().motivo.clone())
                                            on:input=move |ev| {
                                                form.update(|f| f.handle_change("motivo", &event_target_value(&ev)));
                                            }
                                        />
                                    </div>
                                </div>
                            }
                        >
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="dia">"Día de la semana"</label>
                                    <select
                                        id="dia"
                                        on:change=move |ev| {
                                            form.update(|f| f.handle_change("diaSemana", &event_target_value(&ev)));
                                        }
                                        prop:value=move || {
                                            form.with(|f| f.draft().dia_semana)
                                                .map(|d| d.to_string())
                                                .unwrap_or_default()
                                        }
                                    >
                                        <option value="">"Seleccionar..."</option>
                                        {DIAS_SEMANA.iter().enumerate().map(|(i, dia)| view! {
                                            <option value={i.to_string()}>{*dia}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label for="hora-inicio">"Hora inicio"</label>
                                    <input
                                        type="time"
                                        id="hora-inicio"
                                        prop:value=move || form.with(|f| f.draft().hora_inicio.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.handle_change("horaInicio", &event_target_value(&ev)));
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="hora-fin">"Hora fin"</label>
                                    <input
                                        type="time"
                                        id="hora-fin"
                                        prop:value=move || form.with(|f| f.draft().hora_fin.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.handle_change("horaFin", &event_target_value(&ev)));
                                        }
                                    />
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="modal-footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_cancel()
                            disabled=move || form.with(|f| f.is_submitting())
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || form.with(|f| f.is_submitting())
                        >
                            {move || if form.with(|f| f.is_submitting()) { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
