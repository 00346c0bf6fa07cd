use contracts::domain::common::EntityId;
use contracts::domain::periodo_laboral::{PeriodoLaboral, PeriodoLaboralDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::system::auth::context::Sesion;

pub async fn fetch_periodos(sesion: &Sesion) -> Result<Vec<PeriodoLaboral>, String> {
    get_json(sesion, "/api/periodos").await
}

pub async fn guardar_periodo(sesion: &Sesion, dto: &PeriodoLaboralDto) -> Result<(), String> {
    match dto.id {
        Some(id) => put_json(sesion, &format!("/api/periodos/{}", id), dto).await,
        None => {
            let _: serde_json::Value = post_json(sesion, "/api/periodos", dto).await?;
            Ok(())
        }
    }
}

pub async fn eliminar_periodo(sesion: &Sesion, id: EntityId) -> Result<(), String> {
    delete(sesion, &format!("/api/periodos/{}", id)).await
}
