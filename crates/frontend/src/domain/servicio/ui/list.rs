use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::common::EntityId;
use contracts::domain::servicio::{CategoriaServicio, Servicio};

use crate::domain::servicio::api;
use crate::domain::servicio::model::{format_precio, FiltroServicio};
use crate::domain::servicio::ui::details::ServicioDetails;
use crate::shared::collection::{ListFilter, Pagination, Selection};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table_checkbox::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::system::auth::context::use_sesion;

#[component]
pub fn ServicioList() -> impl IntoView {
    let sesion = use_sesion();

    let items = RwSignal::new(Vec::<Servicio>::new());
    let filter = RwSignal::new(ListFilter::<FiltroServicio>::new());
    let pagination = RwSignal::new(Pagination::default());
    let selection = RwSignal::new(Selection::<EntityId>::new());

    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let editing = RwSignal::new(None::<Servicio>);
    let (show_details, set_show_details) = signal(false);
    let filtros_abiertos = RwSignal::new(false);

    let fetch = move || {
        let Some(sesion) = sesion.current_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_servicios(&sesion).await {
                Ok(data) => {
                    items.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los servicios: {}", e)))
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

    let on_categoria = move |clave: String| {
        filter.update(|f| f.set_category(FiltroServicio::from_clave(&clave)));
        pagination.update(|p| p.reset_to_first_page());
    };

    let reset_filtros = move |_| {
        filter.update(|f| f.reset());
        pagination.update(|p| p.reset_to_first_page());
    };

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
                    "¿Eliminar los servicios seleccionados? Cantidad: {}",
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
                if api::eliminar_servicio(&sesion, id).await.is_err() {
                    todo_ok = false;
                }
            }
            if !todo_ok {
                set_error.set(Some("No se pudieron eliminar todos los servicios".to_string()));
            }
            match api::fetch_servicios(&sesion).await {
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
                    <h1 class="page__title">"Servicios"</h1>
                    <Badge>
                        {move || filtered.with(|f| f.total).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            editing.set(None);
                            set_show_details.set(true);
                        }
                    >
                        {icon("plus")}
                        " Nuevo servicio"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=Signal::derive(move || selection.with(|s| s.is_empty()))
                    >
                        {icon("delete")}
                        {move || format!(" Eliminar ({})", selection.with(|s| s.len()))}
                    </Button>
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
                        placeholder="Nombre del servicio..."
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| on_categoria(event_target_value(&ev))
                        prop:value=move || filter.with(|f| f.category().clave().to_string())
                    >
                        <option value="todas">"Todas las categorías"</option>
                        {CategoriaServicio::TODAS.iter().map(|c| view! {
                            <option value={c.clave()}>{c.nombre()}</option>
                        }).collect_view()}
                    </select>
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
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Categoría"</th>
                            <th class="table__header-cell">"Precio"</th>
                            <th class="table__header-cell">"Duración"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || page_items.get()
                            key=|s| s.id
                            children=move |servicio| {
                                let id = servicio.id;
                                let nombre = servicio.nombre.clone();
                                let categoria = servicio.categoria.nombre();
                                let precio = format_precio(servicio.precio);
                                let duracion = format!("{} min", servicio.duracion_minutos);
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selection.with(|s| s.contains(&id))
                                        on:click=move |_| {
                                            editing.set(Some(servicio.clone()));
                                            set_show_details.set(true);
                                        }
                                    >
                                        <TableCellCheckbox
                                            item_id=id
                                            selection=Signal::derive(move || selection.get())
                                            on_change=toggle_select
                                        />
                                        <td class="table__cell">{nombre}</td>
                                        <td class="table__cell">{categoria}</td>
                                        <td class="table__cell">{precio}</td>
                                        <td class="table__cell">{duracion}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get()>
                <ServicioDetails
                    servicio=editing.get_untracked()
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
