use contracts::domain::sucursal::{Sucursal, SucursalDto};

use crate::shared::collection::{
    contains_ci, require_text, FieldErrors, FieldSchema, FieldValue, FormModel, Searchable,
};

impl Searchable for Sucursal {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.nombre, term) || contains_ci(&self.direccion, term)
    }
}

impl FormModel for SucursalDto {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("nombre", FieldValue::Text(v)) => self.nombre = v,
            ("direccion", FieldValue::Text(v)) => self.direccion = v,
            ("telefono", FieldValue::Text(v)) => self.telefono = v,
            _ => {}
        }
    }
}

/// Todos los campos son texto; no hace falta declarar ninguno.
pub fn sucursal_schema() -> FieldSchema {
    FieldSchema::new()
}

pub fn validate_sucursal(dto: &SucursalDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "nombre", &dto.nombre, "El nombre es obligatorio");
    require_text(
        &mut errors,
        "direccion",
        &dto.direccion,
        "La dirección es obligatoria",
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_busqueda_tambien_mira_la_direccion() {
        let sucursal = Sucursal {
            id: 1,
            nombre: "Centro".to_string(),
            direccion: "Av. Corrientes 1234".to_string(),
            telefono: String::new(),
            sectores: vec![],
        };
        assert!(sucursal.matches_search("corrientes"));
        assert!(sucursal.matches_search("CENTRO"));
        assert!(!sucursal.matches_search("palermo"));
    }
}
