use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::system::auth::LoginRequest;

use crate::shared::collection::{
    require_text, FieldErrors, FieldSchema, FieldValue, FormModel, FormState,
};
use crate::system::auth::api;
use crate::system::auth::context::{use_sesion, Sesion};

impl FormModel for LoginRequest {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("usuario", FieldValue::Text(v)) => self.usuario = v,
            ("password", FieldValue::Text(v)) => self.password = v,
            _ => {}
        }
    }
}

fn validate_login(draft: &LoginRequest) -> Option<String> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "usuario", &draft.usuario, "El usuario es obligatorio");
    require_text(
        &mut errors,
        "password",
        &draft.password,
        "La contraseña es obligatoria",
    );
    errors.first_message()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_sesion();

    let initial = LoginRequest {
        usuario: String::new(),
        password: String::new(),
    };
    let form = RwSignal::new(FormState::new(initial, FieldSchema::new()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form
            .try_update(|f| f.begin_submit(validate_login))
            .flatten()
        else {
            return;
        };

        spawn_local(async move {
            match api::login(&draft).await {
                Ok(respuesta) => {
                    form.update(|f| f.finish_submit(Ok(())));
                    ctx.iniciar(Sesion {
                        token: respuesta.token,
                        usuario: respuesta.usuario,
                    });
                }
                Err(e) => form.update(|f| f.finish_submit(Err(e))),
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1 class="login-card__title">"Salón Admin"</h1>

                {move || form.with(|f| f.error().map(String::from)).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="form-group">
                    <label for="usuario">"Usuario"</label>
                    <input
                        type="text"
                        id="usuario"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.draft().usuario.clone())
                        on:input=move |ev| {
                            form.update(|f| f.handle_change("usuario", &event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Contraseña"</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.draft().password.clone())
                        on:input=move |ev| {
                            form.update(|f| f.handle_change("password", &event_target_value(&ev)));
                        }
                    />
                </div>

                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || form.with(|f| f.is_submitting())
                >
                    {move || if form.with(|f| f.is_submitting()) { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
        </div>
    }
}
