use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CatalogItem, EntityId};

/// Empleado del salón. La asignación de sucursal/sector es opcional:
/// un empleado recién cargado todavía no pertenece a ninguna.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empleado {
    pub id: EntityId,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,

    #[serde(rename = "sucursalId")]
    pub sucursal_id: Option<EntityId>,

    #[serde(rename = "sectorId")]
    pub sector_id: Option<EntityId>,

    /// Ids de habilidades (catálogo `Habilidad`).
    pub habilidades: Vec<EntityId>,

    pub activo: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Empleado {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
            .trim()
            .to_string()
    }

    /// Un empleado está asignado cuando tiene sucursal.
    pub fn esta_asignado(&self) -> bool {
        self.sucursal_id.is_some()
    }

    pub fn to_dto(&self) -> EmpleadoDto {
        EmpleadoDto {
            id: Some(self.id),
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            sucursal_id: self.sucursal_id,
            sector_id: self.sector_id,
            habilidades: self.habilidades.clone(),
            activo: self.activo,
        }
    }
}

impl CatalogItem for Empleado {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre_completo()
    }
}

/// DTO de alta/edición de empleado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpleadoDto {
    pub id: Option<EntityId>,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,

    #[serde(rename = "sucursalId")]
    pub sucursal_id: Option<EntityId>,

    #[serde(rename = "sectorId")]
    pub sector_id: Option<EntityId>,

    pub habilidades: Vec<EntityId>,
    pub activo: bool,
}

impl Default for EmpleadoDto {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            apellido: String::new(),
            email: String::new(),
            telefono: String::new(),
            sucursal_id: None,
            sector_id: None,
            habilidades: Vec::new(),
            // un alta nueva arranca activa
            activo: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombre_completo_recorta_espacios() {
        let dto = EmpleadoDto {
            nombre: "Ana".to_string(),
            ..Default::default()
        };
        let empleado = Empleado {
            id: 1,
            nombre: dto.nombre,
            apellido: String::new(),
            email: String::new(),
            telefono: String::new(),
            sucursal_id: None,
            sector_id: None,
            habilidades: vec![],
            activo: true,
            created_at: None,
        };
        assert_eq!(empleado.nombre_completo(), "Ana");
        assert!(!empleado.esta_asignado());
    }
}
