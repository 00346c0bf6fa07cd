use contracts::domain::common::EntityId;
use contracts::domain::servicio::{Servicio, ServicioDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::system::auth::context::Sesion;

pub async fn fetch_servicios(sesion: &Sesion) -> Result<Vec<Servicio>, String> {
    get_json(sesion, "/api/servicios").await
}

pub async fn guardar_servicio(sesion: &Sesion, dto: &ServicioDto) -> Result<(), String> {
    match dto.id {
        Some(id) => put_json(sesion, &format!("/api/servicios/{}", id), dto).await,
        None => {
            let _: serde_json::Value = post_json(sesion, "/api/servicios", dto).await?;
            Ok(())
        }
    }
}

pub async fn eliminar_servicio(sesion: &Sesion, id: EntityId) -> Result<(), String> {
    delete(sesion, &format!("/api/servicios/{}", id)).await
}
