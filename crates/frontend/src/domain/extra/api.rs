use contracts::domain::common::EntityId;
use contracts::domain::extra::{Extra, ExtraDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::system::auth::context::Sesion;

pub async fn fetch_extras(sesion: &Sesion) -> Result<Vec<Extra>, String> {
    get_json(sesion, "/api/extras").await
}

pub async fn guardar_extra(sesion: &Sesion, dto: &ExtraDto) -> Result<(), String> {
    match dto.id {
        Some(id) => put_json(sesion, &format!("/api/extras/{}", id), dto).await,
        None => {
            let _: serde_json::Value = post_json(sesion, "/api/extras", dto).await?;
            Ok(())
        }
    }
}

pub async fn eliminar_extra(sesion: &Sesion, id: EntityId) -> Result<(), String> {
    delete(sesion, &format!("/api/extras/{}", id)).await
}
