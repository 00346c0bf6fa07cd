use serde::{Deserialize, Serialize};

use super::common::{CatalogItem, EntityId};

/// Sector dentro de una sucursal (peluquería, estética, barbería...).
/// Los sectores los administra el backend; el frontend solo los asigna.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub id: EntityId,
    pub nombre: String,
}

impl CatalogItem for Sector {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sucursal {
    pub id: EntityId,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,

    #[serde(default)]
    pub sectores: Vec<Sector>,
}

impl Sucursal {
    pub fn to_dto(&self) -> SucursalDto {
        SucursalDto {
            id: Some(self.id),
            nombre: self.nombre.clone(),
            direccion: self.direccion.clone(),
            telefono: self.telefono.clone(),
        }
    }
}

impl CatalogItem for Sucursal {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SucursalDto {
    pub id: Option<EntityId>,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
}
