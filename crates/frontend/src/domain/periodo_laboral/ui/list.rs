use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::common::{CatalogItem, EntityId};
use contracts::domain::empleado::Empleado;
use contracts::domain::periodo_laboral::{PeriodoLaboral, TipoPeriodo};

use crate::domain::empleado::api as empleado_api;
use crate::domain::periodo_laboral::api;
use crate::domain::periodo_laboral::model::FiltroPeriodo;
use crate::domain::periodo_laboral::ui::details::PeriodoDetails;
use crate::shared::collection::{ListFilter, Pagination, Selection};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table_checkbox::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

/// Agenda de períodos laborales. El recorte por empleado pasa antes del
/// filtro de texto/categoría; de ahí en más el flujo es el de siempre:
/// filtro → paginación → página.
#[component]
pub fn PeriodoList() -> impl IntoView {
    let sesion = use_sesion();

    let items = RwSignal::new(Vec::<PeriodoLaboral>::new());
    let empleados = RwSignal::new(Vec::<Empleado>::new());
    let empleado_filtro = RwSignal::new(None::<EntityId>);

    let filter = RwSignal::new(ListFilter::<FiltroPeriodo>::new());
    let pagination = RwSignal::new(Pagination::default());
    let selection = RwSignal::new(Selection::<EntityId>::new());

    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let editing = RwSignal::new(None::<PeriodoLaboral>);
    let (show_details, set_show_details) = signal(false);
    let filtros_abiertos = RwSignal::new(false);

    let fetch = move || {
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_periodos(&sesion).await {
                Ok(data) => {
                    items.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los períodos: {}", e)))
                }
            }
            set_loading.set(false);
        });
    };

    let fetch_empleados = move || {
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Ok(data) = empleado_api::fetch_empleados(&sesion).await {
                empleados.set(data);
            }
        });
    };

    fetch();
    fetch_empleados();

    let del_empleado = Signal::derive(move || {
        let seleccionado = empleado_filtro.get();
        items.with(|items| {
            items
                .iter()
                .filter(|p| seleccionado.map(|id| p.empleado_id == id).unwrap_or(true))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let filtered = Signal::derive(move || filter.with(|f| del_empleado.with(|i| f.apply(i))));

    Effect::new(move |_| {
        let shown = filtered.with(|f| f.shown());
        pagination.update(|p| p.set_total_items(shown));
    });

    let page_items = Signal::derive(move || {
        let filtered = filtered.get();
        pagination.with(|p| p.page_slice(&filtered.items).to_vec())
    });

    let page_ids = Signal::derive(move || {
        page_items.with(|items| items.iter().map(|p| p.id).collect::<Vec<_>>())
    });

    let go_to_page = Callback::new(move |page: usize| {
        pagination.update(|p| p.set_current_page(page));
    });

    let change_page_size = Callback::new(move |size: usize| {
        pagination.update(|p| {
            p.set_items_per_page(size);
            p.reset_to_first_page();
        });
    });

    let on_search = Callback::new(move |term: String| {
        filter.update(|f| f.set_search_term(term));
        pagination.update(|p| p.reset_to_first_page());
    });

    let on_categoria = move |clave: String| {
        filter.update(|f| f.set_category(FiltroPeriodo::from_clave(&clave)));
        pagination.update(|p| p.reset_to_first_page());
    };

    let on_empleado = move |valor: String| {
        let id = valor.parse::<EntityId>().ok().filter(|id| *id > 0);
        empleado_filtro.set(id);
        pagination.update(|p| p.reset_to_first_page());
    };

    let reset_filtros = move |_| {
        filter.update(|f| f.reset());
        empleado_filtro.set(None);
        pagination.update(|p| p.reset_to_first_page());
    };

    let toggle_select = Callback::new(move |(id, checked): (EntityId, bool)| {
        selection.update(|s| s.toggle(id, checked));
    });

    let toggle_all = Callback::new(move |checked: bool| {
        let ids = page_ids.get_untracked();
        selection.update(|s| s.select_all(&ids, checked));
    });

    let nombre_empleado = move |id: EntityId| {
        empleados.with(|es| {
            es.iter()
                .find(|e| e.id == id)
                .map(|e| e.nombre_completo())
                .unwrap_or_else(|| format!("#{}", id))
        })
    };

    let delete_selected = move || {
        let ids = selection.get_untracked().to_vec();
        if ids.is_empty() {
            return;
        }
        let confirmado = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "¿Eliminar los períodos seleccionados? Cantidad: {}",
                    ids.len()
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmado {
            return;
        }
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        spawn_local(async move {
            let mut todo_ok = true;
            for id in ids {
                if api::eliminar_periodo(&sesion, id).await.is_err() {
                    todo_ok = false;
                }
            }
            if !todo_ok {
                set_error.set(Some("No se pudieron eliminar todos los períodos".to_string()));
            }
            match api::fetch_periodos(&sesion).await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(e)),
            }
        });
        selection.update(|s| s.clear());
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Períodos laborales"</h1>
                    <span class="badge badge--neutral">
                        {move || filtered.with(|f| f.total).to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| {
                        editing.set(None);
                        set_show_details.set(true);
                    }>
                        {icon("plus")}
                        " Nuevo período"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| fetch()
                        disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selection.with(|s| s.is_empty())
                    >
                        {icon("delete")}
                        {move || format!(" Eliminar ({})", selection.with(|s| s.len()))}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <FilterPanel
                is_expanded=filtros_abiertos
                active_filters_count=Signal::derive(move || {
                    filter.with(|f| f.active_count()) + usize::from(empleado_filtro.get().is_some())
                })
                pagination=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || pagination.with(|p| p.current_page()))
                        total_pages=Signal::derive(move || pagination.with(|p| p.total_pages()))
                        shown_count=Signal::derive(move || filtered.with(|f| f.shown()))
                        total_count=Signal::derive(move || filtered.with(|f| f.total))
                        page_size=Signal::derive(move || pagination.with(|p| p.items_per_page()))
                        on_page_change=go_to_page
                        on_page_size_change=change_page_size
                    />
                }
            >
                <div class="filter-row">
                    <select
                        class="filter-select"
                        on:change=move |ev| on_empleado(event_target_value(&ev))
                        prop:value=move || {
                            empleado_filtro.get()
                                .map(|id| id.to_string())
                                .unwrap_or_else(|| "0".to_string())
                        }
                    >
                        <option value="0">"Todos los empleados"</option>
                        {move || empleados.get().into_iter().map(|e| view! {
                            <option value={e.id.to_string()}>{e.display_name()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="filter-select"
                        on:change=move |ev| on_categoria(event_target_value(&ev))
                        prop:value=move || filter.with(|f| f.category().clave().to_string())
                    >
                        {FiltroPeriodo::TODOS.iter().map(|f| view! {
                            <option value={f.clave()}>{f.nombre()}</option>
                        }).collect_view()}
                    </select>
                    <SearchInput
                        value=Signal::derive(move || filter.with(|f| f.search_term().to_string()))
                        on_change=on_search
                        placeholder="Motivo, día..."
                    />
                    <button class="button button--secondary" on:click=reset_filtros>
                        "Limpiar filtros"
                    </button>
                </div>
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <TableHeaderCheckbox
                                candidates=page_ids
                                selection=Signal::derive(move || selection.get())
                                on_change=toggle_all
                            />
                            <th class="table__header-cell">"Empleado"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Detalle"</th>
                            <th class="table__header-cell">"Motivo"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page_items.get()
                            key=|p| p.id
                            children=move |periodo| {
                                let id = periodo.id;
                                let empleado_id = periodo.empleado_id;
                                let tipo = periodo.tipo;
                                let detalle = periodo.resumen();
                                let motivo = periodo.motivo.clone().unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selection.with(|s| s.contains(&id))
                                        on:click=move |_| {
                                            editing.set(Some(periodo.clone()));
                                            set_show_details.set(true);
                                        }
                                    >
                                        <TableCellCheckbox
                                            item_id=id
                                            selection=Signal::derive(move || selection.get())
                                            on_change=toggle_select
                                        />
                                        <td class="table__cell">{move || nombre_empleado(empleado_id)}</td>
                                        <td class="table__cell">
                                            {if tipo == TipoPeriodo::Horario {
                                                view! { <span class="badge badge--success">"Horario"</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge--warning">"Licencia"</span> }.into_any()
                                            }}
                                        </td>
                                        <td class="table__cell">{detalle}</td>
                                        <td class="table__cell">{motivo}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get()>
                <PeriodoDetails
                    periodo=editing.get_untracked()
                    empleados=Signal::derive(move || empleados.get())
                    on_close=Callback::new(move |_| set_show_details.set(false))
                    on_saved=Callback::new(move |_| {
                        set_show_details.set(false);
                        fetch();
                    })
                />
            </Show>
        </div>
    }
}
