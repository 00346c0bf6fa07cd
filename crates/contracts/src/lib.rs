//! Tipos compartidos entre el frontend y el backend del sistema de salones.
//!
//! Todo lo que viaja por el API (agregados, DTOs, sesión) vive acá para que
//! ambos lados hablen exactamente el mismo JSON.

pub mod domain;
pub mod system;
