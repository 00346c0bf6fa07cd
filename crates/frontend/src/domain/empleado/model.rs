//! Reglas de vista del catálogo de empleados: búsqueda, filtro por
//! asignación, esquema del formulario y validación.

use contracts::domain::common::EntityId;
use contracts::domain::empleado::{Empleado, EmpleadoDto};

use crate::shared::collection::{
    contains_ci, require_text, CategoryFilter, FieldErrors, FieldKind, FieldSchema, FieldValue,
    FormModel, Searchable,
};

impl Searchable for Empleado {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.nombre, term)
            || contains_ci(&self.apellido, term)
            || contains_ci(&self.email, term)
    }
}

/// Filtro por asignación de sucursal. "Asignados" es pertenencia derivada:
/// la clave foránea no nula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FiltroEmpleado {
    #[default]
    Todos,
    Asignados,
    SinSucursal,
}

impl FiltroEmpleado {
    pub const TODOS: [FiltroEmpleado; 3] = [
        FiltroEmpleado::Todos,
        FiltroEmpleado::Asignados,
        FiltroEmpleado::SinSucursal,
    ];

    pub fn nombre(&self) -> &'static str {
        match self {
            FiltroEmpleado::Todos => "Todos",
            FiltroEmpleado::Asignados => "Asignados",
            FiltroEmpleado::SinSucursal => "Sin sucursal",
        }
    }

    pub fn clave(&self) -> &'static str {
        match self {
            FiltroEmpleado::Todos => "todos",
            FiltroEmpleado::Asignados => "asignados",
            FiltroEmpleado::SinSucursal => "sin_sucursal",
        }
    }

    pub fn from_clave(clave: &str) -> Self {
        Self::TODOS
            .iter()
            .copied()
            .find(|f| f.clave() == clave)
            .unwrap_or_default()
    }
}

impl CategoryFilter<Empleado> for FiltroEmpleado {
    fn matches(&self, item: &Empleado) -> bool {
        match self {
            FiltroEmpleado::Todos => true,
            FiltroEmpleado::Asignados => item.sucursal_id.is_some(),
            FiltroEmpleado::SinSucursal => item.sucursal_id.is_none(),
        }
    }
}

impl FormModel for EmpleadoDto {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("nombre", FieldValue::Text(v)) => self.nombre = v,
            ("apellido", FieldValue::Text(v)) => self.apellido = v,
            ("email", FieldValue::Text(v)) => self.email = v,
            ("telefono", FieldValue::Text(v)) => self.telefono = v,
            ("sucursalId", FieldValue::Integer(v)) => {
                self.sucursal_id = (v > 0).then_some(v);
                // el sector pertenece a la sucursal anterior
                self.sector_id = None;
            }
            ("sectorId", FieldValue::Integer(v)) => self.sector_id = (v > 0).then_some(v),
            ("activo", FieldValue::Flag(v)) => self.activo = v,
            _ => {}
        }
    }
}

pub fn empleado_schema() -> FieldSchema {
    FieldSchema::new()
        .field("sucursalId", FieldKind::Integer)
        .field("sectorId", FieldKind::Integer)
        .field("activo", FieldKind::Flag)
}

pub fn validate_empleado(dto: &EmpleadoDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "nombre", &dto.nombre, "El nombre es obligatorio");
    require_text(
        &mut errors,
        "apellido",
        &dto.apellido,
        "El apellido es obligatorio",
    );
    if !dto.email.trim().is_empty() && !dto.email.contains('@') {
        errors.add("email", "El email no es válido");
    }
    if dto.sector_id.is_some() && dto.sucursal_id.is_none() {
        errors.add("sectorId", "No se puede asignar sector sin sucursal");
    }
    errors
}

/// Nombre de la sucursal asignada, para la columna de la tabla.
pub fn nombre_sucursal(
    sucursales: &[contracts::domain::sucursal::Sucursal],
    id: Option<EntityId>,
) -> String {
    id.and_then(|id| sucursales.iter().find(|s| s.id == id))
        .map(|s| s.nombre.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_valido() -> EmpleadoDto {
        EmpleadoDto {
            nombre: "Ana".to_string(),
            apellido: "Suárez".to_string(),
            email: "ana@salon.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validacion_basica() {
        assert!(validate_empleado(&dto_valido()).is_empty());

        let sin_nombre = EmpleadoDto {
            nombre: "  ".to_string(),
            ..dto_valido()
        };
        assert_eq!(
            validate_empleado(&sin_nombre).first_message().as_deref(),
            Some("El nombre es obligatorio")
        );
    }

    #[test]
    fn sector_sin_sucursal_es_invalido() {
        let dto = EmpleadoDto {
            sector_id: Some(3),
            sucursal_id: None,
            ..dto_valido()
        };
        assert_eq!(
            validate_empleado(&dto).get("sectorId"),
            Some("No se puede asignar sector sin sucursal")
        );
    }

    #[test]
    fn cambiar_de_sucursal_limpia_el_sector() {
        let mut dto = dto_valido();
        dto.set_field("sucursalId", FieldValue::Integer(7));
        assert_eq!(dto.sucursal_id, Some(7));

        dto.set_field("sectorId", FieldValue::Integer(2));
        assert_eq!(dto.sector_id, Some(2));

        dto.set_field("sucursalId", FieldValue::Integer(8));
        assert_eq!(dto.sucursal_id, Some(8));
        assert_eq!(dto.sector_id, None);

        // cero = "sin asignar"
        dto.set_field("sucursalId", FieldValue::Integer(0));
        assert_eq!(dto.sucursal_id, None);
    }

    #[test]
    fn coercion_del_esquema_para_sucursal_id() {
        let schema = empleado_schema();
        let mut dto = dto_valido();
        if let Some(value) = schema.coerce("sucursalId", "7") {
            dto.set_field("sucursalId", value);
        }
        assert_eq!(dto.sucursal_id, Some(7));
    }
}
