use contracts::domain::turno::TurnoDto;

use crate::shared::collection::{require_text, FieldErrors, FieldSchema, FieldValue, FormModel};

impl FormModel for TurnoDto {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("clienteNombre", FieldValue::Text(v)) => self.cliente_nombre = v,
            ("clienteTelefono", FieldValue::Text(v)) => self.cliente_telefono = v,
            _ => {}
        }
    }
}

/// Los únicos campos tipeables son los del cliente; el resto de la reserva
/// (sucursal, servicio, franja) viene de la franja elegida.
pub fn turno_schema() -> FieldSchema {
    FieldSchema::new()
}

pub fn validate_turno(dto: &TurnoDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_text(
        &mut errors,
        "clienteNombre",
        &dto.cliente_nombre,
        "El nombre del cliente es obligatorio",
    );
    if dto.servicio_id <= 0 {
        errors.add("servicioId", "Seleccioná un servicio");
    }
    if dto.empleado_id <= 0 || dto.hora_inicio.is_empty() {
        errors.add("horaInicio", "Elegí una franja horaria disponible");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_reserva_exige_cliente_y_franja() {
        let dto = TurnoDto::default();
        let errors = validate_turno(&dto);
        assert_eq!(
            errors.get("clienteNombre"),
            Some("El nombre del cliente es obligatorio")
        );
        assert!(errors.get("horaInicio").is_some());

        let completa = TurnoDto {
            sucursal_id: 1,
            servicio_id: 2,
            empleado_id: 3,
            fecha: "2026-08-10".to_string(),
            hora_inicio: "10:00".to_string(),
            hora_fin: "10:30".to_string(),
            cliente_nombre: "Laura Paz".to_string(),
            ..Default::default()
        };
        assert!(validate_turno(&completa).is_empty());
    }
}
