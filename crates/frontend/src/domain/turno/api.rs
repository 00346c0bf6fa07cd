use contracts::domain::common::EntityId;
use contracts::domain::turno::{ConsultaDisponibilidad, FranjaDisponible, Turno, TurnoDto};

use crate::shared::api_utils::{delete, get_json, post_json};
use crate::system::auth::context::Sesion;

/// Turnos de una fecha puntual.
pub async fn fetch_turnos(sesion: &Sesion, fecha: &str) -> Result<Vec<Turno>, String> {
    get_json(sesion, &format!("/api/turnos?fecha={}", fecha)).await
}

/// Franjas libres calculadas por el backend para la consulta dada.
pub async fn fetch_disponibilidad(
    sesion: &Sesion,
    consulta: &ConsultaDisponibilidad,
) -> Result<Vec<FranjaDisponible>, String> {
    post_json(sesion, "/api/turnos/disponibilidad", consulta).await
}

pub async fn crear_turno(sesion: &Sesion, dto: &TurnoDto) -> Result<(), String> {
    let _: serde_json::Value = post_json(sesion, "/api/turnos", dto).await?;
    Ok(())
}

pub async fn cancelar_turno(sesion: &Sesion, id: EntityId) -> Result<(), String> {
    delete(sesion, &format!("/api/turnos/{}", id)).await
}
