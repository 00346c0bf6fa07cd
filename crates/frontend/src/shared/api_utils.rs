//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Todas las llamadas reciben la sesión como parámetro explícito; acá no se
//! lee ningún token de storage.

use contracts::system::auth::LoginResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::context::Sesion;

/// Base URL del API. Se deriva de la ubicación actual; el backend siempre
/// atiende en el puerto 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn bearer(sesion: &Sesion) -> String {
    format!("Bearer {}", sesion.token)
}

/// GET autenticado que espera JSON.
pub async fn get_json<T: DeserializeOwned>(sesion: &Sesion, path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer(sesion))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        log::warn!("GET {} -> HTTP {}", path, response.status());
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

/// POST autenticado con cuerpo JSON.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    sesion: &Sesion,
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &bearer(sesion))
        .json(body)
        .map_err(|e| format!("No se pudo serializar el pedido: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        log::warn!("POST {} -> HTTP {}", path, response.status());
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

/// PUT autenticado con cuerpo JSON; descarta el cuerpo de la respuesta.
pub async fn put_json<B: Serialize>(sesion: &Sesion, path: &str, body: &B) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &bearer(sesion))
        .json(body)
        .map_err(|e| format!("No se pudo serializar el pedido: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        log::warn!("PUT {} -> HTTP {}", path, response.status());
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// DELETE autenticado.
pub async fn delete(sesion: &Sesion, path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &bearer(sesion))
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        log::warn!("DELETE {} -> HTTP {}", path, response.status());
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// POST sin token (solo login).
pub async fn post_login<B: Serialize>(path: &str, body: &B) -> Result<LoginResponse, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("No se pudo serializar el pedido: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if response.status() == 401 {
        return Err("Usuario o contraseña incorrectos".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}
