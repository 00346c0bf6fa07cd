use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: UsuarioInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioInfo {
    pub id: EntityId,
    pub usuario: String,
    pub nombre: Option<String>,

    #[serde(rename = "esAdmin")]
    pub es_admin: bool,
}
