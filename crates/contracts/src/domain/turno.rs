use serde::{Deserialize, Serialize};

use super::common::EntityId;

/// Turno reservado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turno {
    pub id: EntityId,

    #[serde(rename = "sucursalId")]
    pub sucursal_id: EntityId,

    #[serde(rename = "empleadoId")]
    pub empleado_id: EntityId,

    #[serde(rename = "servicioId")]
    pub servicio_id: EntityId,

    /// "YYYY-MM-DD"
    pub fecha: String,

    #[serde(rename = "horaInicio")]
    pub hora_inicio: String,

    #[serde(rename = "horaFin")]
    pub hora_fin: String,

    #[serde(rename = "clienteNombre")]
    pub cliente_nombre: String,

    #[serde(rename = "clienteTelefono")]
    pub cliente_telefono: Option<String>,

    /// Adicionales sumados a la reserva.
    #[serde(default)]
    pub extras: Vec<EntityId>,
}

/// DTO de reserva de turno.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TurnoDto {
    pub id: Option<EntityId>,

    #[serde(rename = "sucursalId")]
    pub sucursal_id: EntityId,

    #[serde(rename = "empleadoId")]
    pub empleado_id: EntityId,

    #[serde(rename = "servicioId")]
    pub servicio_id: EntityId,

    pub fecha: String,

    #[serde(rename = "horaInicio")]
    pub hora_inicio: String,

    #[serde(rename = "horaFin")]
    pub hora_fin: String,

    #[serde(rename = "clienteNombre")]
    pub cliente_nombre: String,

    #[serde(rename = "clienteTelefono")]
    pub cliente_telefono: String,

    pub extras: Vec<EntityId>,
}

/// Franja horaria libre calculada por el backend. El frontend solo la
/// renderiza: la disponibilidad nunca se computa del lado del cliente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranjaDisponible {
    #[serde(rename = "empleadoId")]
    pub empleado_id: EntityId,

    #[serde(rename = "horaInicio")]
    pub hora_inicio: String,

    #[serde(rename = "horaFin")]
    pub hora_fin: String,
}

/// Parámetros de la consulta de disponibilidad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultaDisponibilidad {
    #[serde(rename = "sucursalId")]
    pub sucursal_id: EntityId,

    #[serde(rename = "servicioId")]
    pub servicio_id: EntityId,

    /// `None` = cualquier empleado con la habilidad necesaria.
    #[serde(rename = "empleadoId")]
    pub empleado_id: Option<EntityId>,

    pub fecha: String,
}
