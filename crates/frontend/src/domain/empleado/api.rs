use contracts::domain::common::EntityId;
use contracts::domain::empleado::{Empleado, EmpleadoDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::system::auth::context::Sesion;

pub async fn fetch_empleados(sesion: &Sesion) -> Result<Vec<Empleado>, String> {
    get_json(sesion, "/api/empleados").await
}

/// Alta o modificación según tenga id.
pub async fn guardar_empleado(sesion: &Sesion, dto: &EmpleadoDto) -> Result<(), String> {
    match dto.id {
        Some(id) => put_json(sesion, &format!("/api/empleados/{}", id), dto).await,
        None => {
            let _: serde_json::Value = post_json(sesion, "/api/empleados", dto).await?;
            Ok(())
        }
    }
}

pub async fn eliminar_empleado(sesion: &Sesion, id: EntityId) -> Result<(), String> {
    delete(sesion, &format!("/api/empleados/{}", id)).await
}
