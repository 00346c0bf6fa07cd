use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::common::EntityId;
use contracts::domain::sucursal::Sucursal;

use crate::domain::sucursal::api;
use crate::domain::sucursal::ui::details::SucursalDetails;
use crate::shared::collection::{ListFilter, NoCategory, Pagination, Selection};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table_checkbox::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

#[component]
pub fn SucursalList() -> impl IntoView {
    let sesion = use_sesion();

    let items = RwSignal::new(Vec::<Sucursal>::new());
    let filter = RwSignal::new(ListFilter::<NoCategory>::new());
    let pagination = RwSignal::new(Pagination::default());
    let selection = RwSignal::new(Selection::<EntityId>::new());

    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let editing = RwSignal::new(None::<Sucursal>);
    let (show_details, set_show_details) = signal(false);
    let filtros_abiertos = RwSignal::new(false);

    let fetch = move || {
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_sucursales(&sesion).await {
                Ok(data) => {
                    items.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar las sucursales: {}", e)))
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    let filtered = Signal::derive(move || filter.with(|f| items.with(|i| f.apply(i))));

    Effect::new(move |_| {
        let shown = filtered.with(|f| f.shown());
        pagination.update(|p| p.set_total_items(shown));
    });

    let page_items = Signal::derive(move || {
        let filtered = filtered.get();
        pagination.with(|p| p.page_slice(&filtered.items).to_vec())
    });

    let page_ids = Signal::derive(move || {
        page_items.with(|items| items.iter().map(|s| s.id).collect::<Vec<_>>())
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

    let toggle_select = Callback::new(move |(id, checked): (EntityId, bool)| {
        selection.update(|s| s.toggle(id, checked));
    });

    let toggle_all = Callback::new(move |checked: bool| {
        let ids = page_ids.get_untracked();
        selection.update(|s| s.select_all(&ids, checked));
    });

    let delete_selected = move || {
        let ids = selection.get_untracked().to_vec();
        if ids.is_empty() {
            return;
        }
        let confirmado = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "¿Eliminar las sucursales seleccionadas? Cantidad: {}",
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
                if api::eliminar_sucursal(&sesion, id).await.is_err() {
                    todo_ok = false;
                }
            }
            if !todo_ok {
                set_error.set(Some("No se pudieron eliminar todas las sucursales".to_string()));
            }
            match api::fetch_sucursales(&sesion).await {
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
                    <h1 class="page__title">"Sucursales"</h1>
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
                        " Nueva sucursal"
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
                active_filters_count=Signal::derive(move || filter.with(|f| f.active_count()))
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
                    <SearchInput
                        value=Signal::derive(move || filter.with(|f| f.search_term().to_string()))
                        on_change=on_search
                        placeholder="Nombre o dirección..."
                    />
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
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Dirección"</th>
                            <th class="table__header-cell">"Teléfono"</th>
                            <th class="table__header-cell">"Sectores"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page_items.get()
                            key=|s| s.id
                            children=move |sucursal| {
                                let id = sucursal.id;
                                let nombre = sucursal.nombre.clone();
                                let direccion = sucursal.direccion.clone();
                                let telefono = sucursal.telefono.clone();
                                let sectores = sucursal
                                    .sectores
                                    .iter()
                                    .map(|s| s.nombre.clone())
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selection.with(|s| s.contains(&id))
                                        on:click=move |_| {
                                            editing.set(Some(sucursal.clone()));
                                            set_show_details.set(true);
                                        }
                                    >
                                        <TableCellCheckbox
                                            item_id=id
                                            selection=Signal::derive(move || selection.get())
                                            on_change=toggle_select
                                        />
                                        <td class="table__cell">{nombre}</td>
                                        <td class="table__cell">{direccion}</td>
                                        <td class="table__cell">{telefono}</td>
                                        <td class="table__cell">{sectores}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get()>
                <SucursalDetails
                    sucursal=editing.get_untracked()
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
