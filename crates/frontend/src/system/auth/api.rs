use contracts::system::auth::{LoginRequest, LoginResponse, UsuarioInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, post_login};

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    post_login("/api/auth/login", request).await
}

/// Valida un token guardado devolviendo el usuario actual. Se usa solo al
/// restaurar la sesión en el arranque, por eso recibe el token crudo y no
/// una `Sesion`.
pub async fn me(token: &str) -> Result<UsuarioInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<UsuarioInfo>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}
