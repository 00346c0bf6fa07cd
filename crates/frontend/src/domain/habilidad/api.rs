use contracts::domain::habilidad::Habilidad;

use crate::shared::api_utils::get_json;
use crate::system::auth::context::Sesion;

/// El catálogo de habilidades es de solo lectura para este panel: lo
/// administra el backend y acá solo alimenta el multi-select de empleados.
pub async fn fetch_habilidades(sesion: &Sesion) -> Result<Vec<Habilidad>, String> {
    get_json(sesion, "/api/habilidades").await
}
