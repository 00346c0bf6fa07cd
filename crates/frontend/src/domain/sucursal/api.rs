use contracts::domain::common::EntityId;
use contracts::domain::sucursal::{Sucursal, SucursalDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::system::auth::context::Sesion;

pub async fn fetch_sucursales(sesion: &Sesion) -> Result<Vec<Sucursal>, String> {
    get_json(sesion, "/api/sucursales").await
}

pub async fn guardar_sucursal(sesion: &Sesion, dto: &SucursalDto) -> Result<(), String> {
    match dto.id {
        Some(id) => put_json(sesion, &format!("/api/sucursales/{}", id), dto).await,
        None => {
            let _: serde_json::Value = post_json(sesion, "/api/sucursales", dto).await?;
            Ok(())
        }
    }
}

pub async fn eliminar_sucursal(sesion: &Sesion, id: EntityId) -> Result<(), String> {
    delete(sesion, &format!("/api/sucursales/{}", id)).await
}
