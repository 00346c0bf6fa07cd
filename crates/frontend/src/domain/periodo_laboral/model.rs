use contracts::domain::periodo_laboral::{PeriodoLaboral, PeriodoLaboralDto, TipoPeriodo};

use crate::shared::collection::{
    contains_ci, require_text, CategoryFilter, FieldErrors, FieldKind, FieldSchema, FieldValue,
    FormModel, Searchable,
};

impl Searchable for PeriodoLaboral {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.resumen(), term)
            || self
                .motivo
                .as_deref()
                .map(|m| contains_ci(m, term))
                .unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FiltroPeriodo {
    #[default]
    Todos,
    Horarios,
    Licencias,
}

impl FiltroPeriodo {
    pub const TODOS: [FiltroPeriodo; 3] = [
        FiltroPeriodo::Todos,
        FiltroPeriodo::Horarios,
        FiltroPeriodo::Licencias,
    ];

    pub fn nombre(&self) -> &'static str {
        match self {
            FiltroPeriodo::Todos => "Todos",
            FiltroPeriodo::Horarios => "Horarios",
            FiltroPeriodo::Licencias => "Licencias",
        }
    }

    pub fn clave(&self) -> &'static str {
        match self {
            FiltroPeriodo::Todos => "todos",
            FiltroPeriodo::Horarios => "horarios",
            FiltroPeriodo::Licencias => "licencias",
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

impl CategoryFilter<PeriodoLaboral> for FiltroPeriodo {
    fn matches(&self, item: &PeriodoLaboral) -> bool {
        match self {
            FiltroPeriodo::Todos => true,
            FiltroPeriodo::Horarios => item.tipo == TipoPeriodo::Horario,
            FiltroPeriodo::Licencias => item.tipo == TipoPeriodo::Licencia,
        }
    }
}

impl FormModel for PeriodoLaboralDto {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("empleadoId", FieldValue::Integer(v)) => self.empleado_id = v,
            ("tipo", FieldValue::Text(v)) => {
                // grupo de opciones excluyentes: elegir una descarta la otra
                self.tipo = match v.as_str() {
                    "licencia" => TipoPeriodo::Licencia,
                    _ => TipoPeriodo::Horario,
                };
            }
            ("diaSemana", FieldValue::Integer(v)) => self.dia_semana = Some(v),
            ("horaInicio", FieldValue::Text(v)) => self.hora_inicio = v,
            ("horaFin", FieldValue::Text(v)) => self.hora_fin = v,
            ("fechaDesde", FieldValue::Text(v)) => self.fecha_desde = v,
            ("fechaHasta", FieldValue::Text(v)) => self.fecha_hasta = v,
            ("motivo", FieldValue::Text(v)) => self.motivo = v,
            _ => {}
        }
    }
}

pub fn periodo_schema() -> FieldSchema {
    FieldSchema::new()
        .field("empleadoId", FieldKind::Integer)
        .field("diaSemana", FieldKind::Integer)
}

/// Valida solo el grupo de campos del tipo elegido: cambiar de tipo nunca
/// arrastra errores del otro grupo.
pub fn validate_periodo(dto: &PeriodoLaboralDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if dto.empleado_id <= 0 {
        errors.add("empleadoId", "Seleccioná un empleado");
    }

    match dto.tipo {
        TipoPeriodo::Horario => {
            match dto.dia_semana {
                Some(dia) if (0..=6).contains(&dia) => {}
                _ => errors.add("diaSemana", "Seleccioná el día de la semana"),
            }
            require_text(
                &mut errors,
                "horaInicio",
                &dto.hora_inicio,
                "La hora de inicio es obligatoria",
            );
            require_text(
                &mut errors,
                "horaFin",
                &dto.hora_fin,
                "La hora de fin es obligatoria",
            );
            // "HH:MM" ordena bien como texto
            if !dto.hora_inicio.is_empty()
                && !dto.hora_fin.is_empty()
                && dto.hora_fin <= dto.hora_inicio
            {
                errors.add("horaFin", "La hora de fin debe ser posterior a la de inicio");
            }
        }
        TipoPeriodo::Licencia => {
            require_text(
                &mut errors,
                "fechaDesde",
                &dto.fecha_desde,
                "La fecha de inicio es obligatoria",
            );
            require_text(
                &mut errors,
                "fechaHasta",
                &dto.fecha_hasta,
                "La fecha de fin es obligatoria",
            );
            if !dto.fecha_desde.is_empty()
                && !dto.fecha_hasta.is_empty()
                && dto.fecha_hasta < dto.fecha_desde
            {
                errors.add("fechaHasta", "La fecha de fin no puede ser anterior al inicio");
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horario_valido() -> PeriodoLaboralDto {
        PeriodoLaboralDto {
            empleado_id: 1,
            tipo: TipoPeriodo::Horario,
            dia_semana: Some(0),
            hora_inicio: "09:00".to_string(),
            hora_fin: "17:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn horario_completo_es_valido() {
        assert!(validate_periodo(&horario_valido()).is_empty());
    }

    #[test]
    fn horario_exige_sus_campos() {
        let dto = PeriodoLaboralDto {
            empleado_id: 1,
            tipo: TipoPeriodo::Horario,
            ..Default::default()
        };
        let errors = validate_periodo(&dto);
        assert!(errors.get("diaSemana").is_some());
        assert!(errors.get("horaInicio").is_some());
        // los campos de licencia no aparecen
        assert!(errors.get("fechaDesde").is_none());
    }

    #[test]
    fn hora_de_fin_posterior_a_la_de_inicio() {
        let dto = PeriodoLaboralDto {
            hora_fin: "08:00".to_string(),
            ..horario_valido()
        };
        assert_eq!(
            validate_periodo(&dto).get("horaFin"),
            Some("La hora de fin debe ser posterior a la de inicio")
        );
    }

    #[test]
    fn licencia_exige_rango_de_fechas_coherente() {
        let mut dto = PeriodoLaboralDto {
            empleado_id: 1,
            tipo: TipoPeriodo::Licencia,
            fecha_desde: "2026-02-10".to_string(),
            fecha_hasta: "2026-02-01".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_periodo(&dto).get("fechaHasta"),
            Some("La fecha de fin no puede ser anterior al inicio")
        );

        dto.fecha_hasta = "2026-02-20".to_string();
        assert!(validate_periodo(&dto).is_empty());
    }

    #[test]
    fn cambiar_de_tipo_no_arrastra_errores_del_otro_grupo() {
        // un horario incompleto que pasa a licencia completa queda válido
        let mut dto = PeriodoLaboralDto {
            empleado_id: 1,
            tipo: TipoPeriodo::Horario,
            ..Default::default()
        };
        assert!(!validate_periodo(&dto).is_empty());

        dto.set_field("tipo", FieldValue::Text("licencia".to_string()));
        dto.set_field("fechaDesde", FieldValue::Text("2026-03-01".to_string()));
        dto.set_field("fechaHasta", FieldValue::Text("2026-03-10".to_string()));
        assert!(validate_periodo(&dto).is_empty());
    }
}
