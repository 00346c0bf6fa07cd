use contracts::domain::extra::{Extra, ExtraDto};

use crate::shared::collection::{
    contains_ci, require_positive, require_text, FieldErrors, FieldKind, FieldSchema, FieldValue,
    FormModel, Searchable,
};

impl Searchable for Extra {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.nombre, term)
    }
}

impl FormModel for ExtraDto {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("nombre", FieldValue::Text(v)) => self.nombre = v,
            ("precio", FieldValue::Decimal(v)) => self.precio = v,
            ("duracionMinutos", FieldValue::Integer(v)) => self.duracion_minutos = v,
            _ => {}
        }
    }
}

pub fn extra_schema() -> FieldSchema {
    FieldSchema::new()
        .field("precio", FieldKind::Decimal)
        .field("duracionMinutos", FieldKind::Integer)
}

pub fn validate_extra(dto: &ExtraDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "nombre", &dto.nombre, "El nombre es obligatorio");
    require_positive(
        &mut errors,
        "precio",
        dto.precio,
        "El precio debe ser mayor a cero",
    );
    if dto.duracion_minutos < 0 {
        errors.add("duracionMinutos", "La duración no puede ser negativa");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn un_extra_sin_duracion_es_valido() {
        // un adicional instantáneo (p. ej. producto) dura cero minutos
        let dto = ExtraDto {
            nombre: "Ampolla capilar".to_string(),
            precio: 12.0,
            duracion_minutos: 0,
            ..Default::default()
        };
        assert!(validate_extra(&dto).is_empty());
    }

    #[test]
    fn duracion_negativa_es_invalida() {
        let dto = ExtraDto {
            nombre: "Masaje".to_string(),
            precio: 10.0,
            duracion_minutos: -5,
            ..Default::default()
        };
        assert_eq!(
            validate_extra(&dto).get("duracionMinutos"),
            Some("La duración no puede ser negativa")
        );
    }
}
