//! Sesión como contexto explícito.
//!
//! `Sesion` es un snapshot inmutable (token + usuario) con un ciclo de vida
//! definido: `iniciar` en el login exitoso, `cerrar` en el logout. Los
//! módulos de API la reciben por parámetro; nadie lee el token de storage
//! de forma ambiente.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::system::auth::UsuarioInfo;

use super::{api, storage};

#[derive(Clone, Debug, PartialEq)]
pub struct Sesion {
    pub token: String,
    pub usuario: UsuarioInfo,
}

#[derive(Clone, Copy)]
pub struct SesionContext {
    estado: RwSignal<Option<Sesion>>,
}

impl SesionContext {
    pub fn new() -> Self {
        Self {
            estado: RwSignal::new(None),
        }
    }

    pub fn current(&self) -> Option<Sesion> {
        self.estado.get()
    }

    pub fn current_untracked(&self) -> Option<Sesion> {
        self.estado.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.estado.with(|s| s.is_some())
    }

    pub fn es_admin(&self) -> bool {
        self.estado
            .with(|s| s.as_ref().map(|s| s.usuario.es_admin).unwrap_or(false))
    }

    /// Inicio de sesión: persiste el token y publica el snapshot.
    pub fn iniciar(&self, sesion: Sesion) {
        storage::save_token(&sesion.token);
        self.estado.set(Some(sesion));
    }

    /// Cierre de sesión: borra el token y el snapshot.
    pub fn cerrar(&self) {
        storage::clear_token();
        self.estado.set(None);
    }
}

impl Default for SesionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provee la sesión a todo el árbol e intenta restaurarla desde
/// localStorage al montar (el token guardado se valida contra el backend
/// antes de darla por buena).
#[component]
pub fn SesionProvider(children: ChildrenFn) -> impl IntoView {
    let ctx = SesionContext::new();

    Effect::new(move |_| {
        if let Some(token) = storage::get_token() {
            spawn_local(async move {
                match api::me(&token).await {
                    Ok(usuario) => ctx.iniciar(Sesion { token, usuario }),
                    Err(_) => {
                        // token vencido o inválido
                        storage::clear_token();
                    }
                }
            });
        }
    });

    provide_context(ctx);

    children()
}

pub fn use_sesion() -> SesionContext {
    use_context::<SesionContext>().expect("SesionProvider not found in component tree")
}
