use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Buscador con debounce y botón de limpiar. El callback recibe el término
/// recién 300 ms después de la última tecla; limpiar dispara al instante.
#[component]
pub fn SearchInput(
    /// Valor aplicado actualmente (para repoblar el input tras un reset).
    #[prop(into)]
    value: Signal<String>,

    on_change: Callback<String>,

    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    // generación del debounce: cada tecla la avanza y el timer viejo
    // se da cuenta de que quedó obsoleto
    let generation = StoredValue::new(0_u64);

    let handle_input = move |nuevo: String| {
        set_input_value.set(nuevo.clone());
        let gen = generation.get_value() + 1;
        generation.set_value(gen);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == gen {
                on_change.run(nuevo);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    // un reset externo (resetFilters) también vacía el input
    Effect::new(move |_| {
        let aplicado = value.get();
        if aplicado.is_empty() {
            set_input_value.set(String::new());
        }
    });

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear title="Limpiar">
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
