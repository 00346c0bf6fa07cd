use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::sucursal::Sucursal;

use crate::domain::sucursal::api;
use crate::domain::sucursal::model::{sucursal_schema, validate_sucursal};
use crate::shared::collection::FormState;
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

/// Alta/edición de sucursal. Los sectores se muestran de solo lectura:
/// los administra el backend.
#[component]
pub fn SucursalDetails(
    sucursal: Option<Sucursal>,

    on_close: Callback<()>,

    on_saved: Callback<()>,
) -> impl IntoView {
    let sesion = use_sesion();

    let initial = sucursal.as_ref().map(|s| s.to_dto()).unwrap_or_default();
    let es_edicion = initial.id.is_some();
    let sectores = sucursal
        .as_ref()
        .map(|s| s.sectores.clone())
        .unwrap_or_default();

    let form = RwSignal::new(FormState::new(initial, sucursal_schema()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form
            .try_update(|f| f.begin_submit(|d| validate_sucursal(d).first_message()))
            .flatten()
        else {
            return;
        };
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = api::guardar_sucursal(&sesion, &draft).await;
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
                        {if es_edicion { "Edición de sucursal" } else { "Nueva sucursal" }}
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
                                placeholder="Sucursal Centro"
                                prop:value=move || form.with(|f| f.draft().nombre.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.handle_change("nombre", &event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="direccion">"Dirección"</label>
                            <input
                                type="text"
                                id="direccion"
                                prop:value=move || form.with(|f| f.draft().direccion.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.handle_change("direccion", &event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="telefono">"Teléfono"</label>
                            <input
                                type="text"
                                id="telefono"
                                prop:value=move || form.with(|f| f.draft().telefono.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.handle_change("telefono", &event_target_value(&ev)));
                                }
                            />
                        </div>

                        {(!sectores.is_empty()).then(|| view! {
                            <div class="form-group">
                                <label>"Sectores"</label>
                                <div class="badge-row">
                                    {sectores.iter().map(|s| view! {
                                        <span class="badge badge--neutral">{s.nombre.clone()}</span>
                                    }).collect_view()}
                                </div>
                            </div>
                        })}
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
