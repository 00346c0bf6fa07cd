use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::servicio::{CategoriaServicio, Servicio};

use crate::domain::servicio::api;
use crate::domain::servicio::model::{servicio_schema, validate_servicio};
use crate::shared::collection::FormState;
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

#[component]
pub fn ServicioDetails(
    servicio: Option<Servicio>,

    on_close: Callback<()>,

    on_saved: Callback<()>,
) -> impl IntoView {
    let sesion = use_sesion();

    let initial = servicio
        .as_ref()
        .map(|s| s.to_dto())
        .unwrap_or_default();
    let es_edicion = initial.id.is_some();

    let form = RwSignal::new(FormState::new(initial, servicio_schema()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form
            .try_update(|f| f.begin_submit(|d| validate_servicio(d).first_message()))
            .flatten()
        else {
            return;
        };
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = api::guardar_servicio(&sesion, &draft).await;
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
                        {if es_edicion { "Edición de servicio" } else { "Nuevo servicio" }}
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
                            <label for="nombre">"Nombre"</label>
                            <input
                                type="text"
                                id="nombre"
                                placeholder="Corte de pelo"
                                prop:value=move || form.with(|f| f.draft().nombre.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.handle_change("nombre", &event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="precio">"Precio"</label>
                                <input
                                    type="number"
                                    id="precio"
                                    min="0"
                                    step="0.01"
                                    prop:value=move || form.with(|f| f.draft().precio.to_string())
                                    on:input=move |ev| {
                                        form.update(|f| f.handle_change("precio", &event_target_value(&ev)));
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label for="duracion">"Duración (minutos)"</label>
                                <input
                                    type="number"
                                    id="duracion"
                                    min="0"
                                    step="5"
                                    prop:value=move || form.with(|f| f.draft().duracion_minutos.to_string())
                                    on:input=move |ev| {
                                        form.update(|f| f.handle_change("duracionMinutos", &event_target_value(&ev)));
                                    }
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="categoria">"Categoría"</label>
                            <select
                                id="categoria"
                                on:change=move |ev| {
                                    form.update(|f| f.handle_change("categoria", &event_target_value(&ev)));
                                }
                                prop:value=move || form.with(|f| f.draft().categoria.clave().to_string())
                            >
                                {CategoriaServicio::TODAS.iter().map(|c| view! {
                                    <option value={c.clave()}>{c.nombre()}</option>
                                }).collect_view()}
                            </select>
                        </div>
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
