use serde::{Deserialize, Serialize};

use super::common::{CatalogItem, EntityId};

/// Categoría del servicio. Enumeración cerrada: el filtro de la lista
/// depende de que no aparezcan valores nuevos sin tocar el frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoriaServicio {
    #[default]
    Corte,
    Color,
    Peinado,
    Estetica,
    Otro,
}

impl CategoriaServicio {
    pub const TODAS: [CategoriaServicio; 5] = [
        CategoriaServicio::Corte,
        CategoriaServicio::Color,
        CategoriaServicio::Peinado,
        CategoriaServicio::Estetica,
        CategoriaServicio::Otro,
    ];

    pub fn nombre(&self) -> &'static str {
        match self {
            CategoriaServicio::Corte => "Corte",
            CategoriaServicio::Color => "Color",
            CategoriaServicio::Peinado => "Peinado",
            CategoriaServicio::Estetica => "Estética",
            CategoriaServicio::Otro => "Otro",
        }
    }

    pub fn clave(&self) -> &'static str {
        match self {
            CategoriaServicio::Corte => "corte",
            CategoriaServicio::Color => "color",
            CategoriaServicio::Peinado => "peinado",
            CategoriaServicio::Estetica => "estetica",
            CategoriaServicio::Otro => "otro",
        }
    }

    pub fn from_clave(clave: &str) -> Option<Self> {
        Self::TODAS.iter().copied().find(|c| c.clave() == clave)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Servicio {
    pub id: EntityId,
    pub nombre: String,
    pub precio: f64,

    #[serde(rename = "duracionMinutos")]
    pub duracion_minutos: i64,

    pub categoria: CategoriaServicio,
}

impl Servicio {
    pub fn to_dto(&self) -> ServicioDto {
        ServicioDto {
            id: Some(self.id),
            nombre: self.nombre.clone(),
            precio: self.precio,
            duracion_minutos: self.duracion_minutos,
            categoria: self.categoria,
        }
    }
}

impl CatalogItem for Servicio {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServicioDto {
    pub id: Option<EntityId>,
    pub nombre: String,
    pub precio: f64,

    #[serde(rename = "duracionMinutos")]
    pub duracion_minutos: i64,

    pub categoria: CategoriaServicio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clave_y_from_clave_son_inversas() {
        for categoria in CategoriaServicio::TODAS {
            assert_eq!(CategoriaServicio::from_clave(categoria.clave()), Some(categoria));
        }
        assert_eq!(CategoriaServicio::from_clave("inexistente"), None);
    }
}
