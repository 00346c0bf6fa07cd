use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::common::{CatalogItem, EntityId};
use contracts::domain::empleado::Empleado;
use contracts::domain::habilidad::Habilidad;
use contracts::domain::sucursal::Sucursal;

use crate::domain::empleado::api;
use crate::domain::empleado::model::{empleado_schema, validate_empleado};
use crate::shared::collection::{FormState, Selection};
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

/// Formulario de alta/edición de empleado en un modal sobre la lista.
/// El multi-select de habilidades corre sobre el catálogo completo como
/// lista de candidatos.
#[component]
pub fn EmpleadoDetails(
    empleado: Option<Empleado>,

    #[prop(into)]
    sucursales: Signal<Vec<Sucursal>>,

    #[prop(into)]
    habilidades: Signal<Vec<Habilidad>>,

    on_close: Callback<()>,

    on_saved: Callback<()>,
) -> impl IntoView {
    let sesion = use_sesion();

    let initial = empleado
        .as_ref()
        .map(|e| e.to_dto())
        .unwrap_or_default();
    let es_edicion = initial.id.is_some();
    let seleccion_inicial: Selection<EntityId> = initial.habilidades.iter().copied().collect();

    let form = RwSignal::new(FormState::new(initial, empleado_schema()));
    let habilidades_sel = RwSignal::new(seleccion_inicial);

    // la selección es la fuente de verdad; el borrador se sincroniza en
    // cada toggle para que el guardado mande lo que se ve
    let sync_habilidades = move || {
        let mut ids = habilidades_sel.with_untracked(|s| s.to_vec());
        ids.sort_unstable();
        form.update(|f| f.update_draft(|d| d.habilidades = ids.clone()));
    };

    let toggle_habilidad = move |id: EntityId, checked: bool| {
        habilidades_sel.update(|s| s.toggle(id, checked));
        sync_habilidades();
    };

    let toggle_todas = move |checked: bool| {
        let ids: Vec<EntityId> = habilidades.with_untracked(|hs| hs.iter().map(|h| h.id).collect());
        habilidades_sel.update(|s| s.select_all(&ids, checked));
        sync_habilidades();
    };

    let todas_seleccionadas = Signal::derive(move || {
        let ids: Vec<EntityId> = habilidades.with(|hs| hs.iter().map(|h| h.id).collect());
        habilidades_sel.with(|s| s.all_selected(&ids))
    });

    // sectores de la sucursal elegida
    let sectores = Signal::derive(move || {
        let sucursal_id = form.with(|f| f.draft().sucursal_id);
        match sucursal_id {
            Some(id) => sucursales.with(|ss| {
                ss.iter()
                    .find(|s| s.id == id)
                    .map(|s| s.sectores.clone())
                    .unwrap_or_default()
            }),
            None => Vec::new(),
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form
            .try_update(|f| f.begin_submit(|d| validate_empleado(d).first_message()))
            .flatten()
        else {
            return;
        };
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = api::guardar_empleado(&sesion, &draft).await;
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
                        {if es_edicion { "Edición de empleado" } else { "Nuevo empleado" }}
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

                        <div class="form-row">
                            <div class="form-group">
                                <label for="nombre">"Nombre"</label>
                                <input
                                    type="text"
                                    id="nombre"
                                    prop:value=move || form.with(|f| f.draft().nombre.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.handle_change("nombre", &event_target_value(&ev)));
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label for="apellido">"Apellido"</label>
                                <input
                                    type="text"
                                    id="apellido"
                                    prop:value=move || form.with(|f| f.draft().apellido.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.handle_change("apellido", &event_target_value(&ev)));
                                    }
                                />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="email">"Email"</label>
                                <input
                                    type="email"
                                    id="email"
                                    prop:value=move || form.with(|f| f.draft().email.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.handle_change("email", &event_target_value(&ev)));
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
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="sucursal">"Sucursal"</label>
                                <select
                                    id="sucursal"
                                    on:change=move |ev| {
                                        form.update(|f| f.handle_change("sucursalId", &event_target_value(&ev)));
                                    }
                                    prop:value=move || {
                                        form.with(|f| f.draft().sucursal_id)
                                            .map(|id| id.to_string())
                                            .unwrap_or_else(|| "0".to_string())
                                    }
                                >
                                    <option value="0">"Sin asignar"</option>
                                    {move || sucursales.get().into_iter().map(|s| view! {
                                        <option value={s.id.to_string()}>{s.display_name()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="sector">"Sector"</label>
                                <select
                                    id="sector"
                                    disabled=move || sectores.with(|s| s.is_empty())
                                    on:change=move |ev| {
                                        form.update(|f| f.handle_change("sectorId", &event_target_value(&ev)));
                                    }
                                    prop:value=move || {
                                        form.with(|f| f.draft().sector_id)
                                            .map(|id| id.to_string())
                                            .unwrap_or_else(|| "0".to_string())
                                    }
                                >
                                    <option value="0">"Sin sector"</option>
                                    {move || sectores.get().into_iter().map(|s| view! {
                                        <option value={s.id.to_string()}>{s.nombre.clone()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form-group">
                            <div class="multi-select__header">
                                <label>"Habilidades"</label>
                                <label class="multi-select__all">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || todas_seleccionadas.get()
                                        on:change=move |ev| toggle_todas(event_target_checked(&ev))
                                    />
                                    "Seleccionar todas"
                                </label>
                            </div>
                            <div class="multi-select__options">
                                {move || habilidades.get().into_iter().map(|h| {
                                    let id = h.id;
                                    view! {
                                        <label class="multi-select__option">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || habilidades_sel.with(|s| s.contains(&id))
                                                on:change=move |ev| toggle_habilidad(id, event_target_checked(&ev))
                                            />
                                            {h.nombre.clone()}
                                        </label>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="form-group">
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.draft().activo)
                                    on:change=move |ev| {
                                        let raw = if event_target_checked(&ev) { "true" } else { "false" };
                                        form.update(|f| f.handle_change("activo", raw));
                                    }
                                />
                                "Activo"
                            </label>
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
