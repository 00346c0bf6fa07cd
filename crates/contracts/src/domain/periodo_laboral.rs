use serde::{Deserialize, Serialize};

use super::common::EntityId;

/// Tipo de período laboral. Son mutuamente excluyentes: un período es un
/// horario recurrente semanal o una licencia con rango de fechas, nunca
/// ambas cosas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipoPeriodo {
    #[default]
    Horario,
    Licencia,
}

impl TipoPeriodo {
    pub fn nombre(&self) -> &'static str {
        match self {
            TipoPeriodo::Horario => "Horario recurrente",
            TipoPeriodo::Licencia => "Licencia",
        }
    }
}

pub const DIAS_SEMANA: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// Nombre del día para `dia_semana` (0 = lunes).
pub fn nombre_dia(dia: i64) -> &'static str {
    DIAS_SEMANA
        .get(usize::try_from(dia).unwrap_or(usize::MAX))
        .copied()
        .unwrap_or("-")
}

/// Período laboral de un empleado.
///
/// Los campos opcionales dependen del `tipo`: `dia_semana`/`hora_inicio`/
/// `hora_fin` solo aplican a `Horario`; `fecha_desde`/`fecha_hasta`/`motivo`
/// solo a `Licencia`. El validador del formulario garantiza la exclusión.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodoLaboral {
    pub id: EntityId,

    #[serde(rename = "empleadoId")]
    pub empleado_id: EntityId,

    pub tipo: TipoPeriodo,

    /// 0 = lunes .. 6 = domingo.
    #[serde(rename = "diaSemana")]
    pub dia_semana: Option<i64>,

    /// "HH:MM"
    #[serde(rename = "horaInicio")]
    pub hora_inicio: Option<String>,

    #[serde(rename = "horaFin")]
    pub hora_fin: Option<String>,

    /// "YYYY-MM-DD"
    #[serde(rename = "fechaDesde")]
    pub fecha_desde: Option<String>,

    #[serde(rename = "fechaHasta")]
    pub fecha_hasta: Option<String>,

    pub motivo: Option<String>,
}

impl PeriodoLaboral {
    pub fn to_dto(&self) -> PeriodoLaboralDto {
        PeriodoLaboralDto {
            id: Some(self.id),
            empleado_id: self.empleado_id,
            tipo: self.tipo,
            dia_semana: self.dia_semana,
            hora_inicio: self.hora_inicio.clone().unwrap_or_default(),
            hora_fin: self.hora_fin.clone().unwrap_or_default(),
            fecha_desde: self.fecha_desde.clone().unwrap_or_default(),
            fecha_hasta: self.fecha_hasta.clone().unwrap_or_default(),
            motivo: self.motivo.clone().unwrap_or_default(),
        }
    }

    /// Resumen de una línea para la tabla.
    pub fn resumen(&self) -> String {
        match self.tipo {
            TipoPeriodo::Horario => format!(
                "{} {} - {}",
                self.dia_semana.map(nombre_dia).unwrap_or("-"),
                self.hora_inicio.as_deref().unwrap_or("-"),
                self.hora_fin.as_deref().unwrap_or("-"),
            ),
            TipoPeriodo::Licencia => format!(
                "{} al {}",
                self.fecha_desde.as_deref().unwrap_or("-"),
                self.fecha_hasta.as_deref().unwrap_or("-"),
            ),
        }
    }
}

/// DTO del formulario de períodos. A diferencia del agregado usa `String`
/// vacía en lugar de `None` porque los inputs de hora/fecha siempre
/// entregan texto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PeriodoLaboralDto {
    pub id: Option<EntityId>,

    #[serde(rename = "empleadoId")]
    pub empleado_id: EntityId,

    pub tipo: TipoPeriodo,

    #[serde(rename = "diaSemana")]
    pub dia_semana: Option<i64>,

    #[serde(rename = "horaInicio")]
    pub hora_inicio: String,

    #[serde(rename = "horaFin")]
    pub hora_fin: String,

    #[serde(rename = "fechaDesde")]
    pub fecha_desde: String,

    #[serde(rename = "fechaHasta")]
    pub fecha_hasta: String,

    pub motivo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombre_dia_fuera_de_rango() {
        assert_eq!(nombre_dia(0), "Lunes");
        assert_eq!(nombre_dia(6), "Domingo");
        assert_eq!(nombre_dia(7), "-");
        assert_eq!(nombre_dia(-1), "-");
    }

    #[test]
    fn resumen_de_licencia() {
        let periodo = PeriodoLaboral {
            id: 1,
            empleado_id: 2,
            tipo: TipoPeriodo::Licencia,
            dia_semana: None,
            hora_inicio: None,
            hora_fin: None,
            fecha_desde: Some("2026-01-10".to_string()),
            fecha_hasta: Some("2026-01-20".to_string()),
            motivo: Some("Vacaciones".to_string()),
        };
        assert_eq!(periodo.resumen(), "2026-01-10 al 2026-01-20");
    }
}
