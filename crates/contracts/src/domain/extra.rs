use serde::{Deserialize, Serialize};

use super::common::{CatalogItem, EntityId};

/// Adicional que se puede sumar a un turno (lavado, masaje capilar...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extra {
    pub id: EntityId,
    pub nombre: String,
    pub precio: f64,

    #[serde(rename = "duracionMinutos")]
    pub duracion_minutos: i64,
}

impl Extra {
    pub fn to_dto(&self) -> ExtraDto {
        ExtraDto {
            id: Some(self.id),
            nombre: self.nombre.clone(),
            precio: self.precio,
            duracion_minutos: self.duracion_minutos,
        }
    }
}

impl CatalogItem for Extra {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExtraDto {
    pub id: Option<EntityId>,
    pub nombre: String,
    pub precio: f64,

    #[serde(rename = "duracionMinutos")]
    pub duracion_minutos: i64,
}
