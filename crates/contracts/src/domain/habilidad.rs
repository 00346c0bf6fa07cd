use serde::{Deserialize, Serialize};

use super::common::{CatalogItem, EntityId};

/// Habilidad del catálogo (colorimetría, barbería, uñas...). Es la lista
/// de candidatos del multi-select de empleados.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habilidad {
    pub id: EntityId,
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl CatalogItem for Habilidad {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}
