//! Checkboxes de selección para tablas, atados al controlador `Selection`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use contracts::domain::common::EntityId;

use crate::shared::collection::Selection;

#[derive(Debug, Clone, Copy, PartialEq)]
enum HeaderState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Checkbox del encabezado: tres estados (nada / algo / todo) calculados
/// contra los candidatos visibles. El click alterna entre seleccionar todo
/// y limpiar.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids candidatos (los de la página o la lista filtrada).
    #[prop(into)]
    candidates: Signal<Vec<EntityId>>,

    #[prop(into)]
    selection: Signal<Selection<EntityId>>,

    /// true = seleccionar todos los candidatos, false = limpiar.
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || {
        let ids = candidates.get();
        let sel = selection.get();
        if ids.is_empty() {
            return HeaderState::Unchecked;
        }
        let marcados = ids.iter().filter(|id| sel.contains(id)).count();
        if marcados == 0 {
            HeaderState::Unchecked
        } else if marcados == ids.len() {
            HeaderState::Checked
        } else {
            HeaderState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // el estado indeterminate solo existe como propiedad del DOM
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state.get(), HeaderState::Indeterminate));
            }
        }
    });

    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), HeaderState::Checked)
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </th>
    }
}

/// Checkbox de una fila. Frena la propagación para no disparar el click de
/// edición de la fila.
#[component]
pub fn TableCellCheckbox(
    item_id: EntityId,

    #[prop(into)]
    selection: Signal<Selection<EntityId>>,

    /// (id, checked)
    on_change: Callback<(EntityId, bool)>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selection.get().contains(&item_id)
                on:change=move |ev| {
                    on_change.run((item_id, event_target_checked(&ev)));
                }
            />
        </td>
    }
}
