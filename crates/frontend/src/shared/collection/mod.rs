//! Motor de listas y formularios.
//!
//! Cuatro controladores sin IO que sostienen todas las pantallas de
//! catálogo: paginación, búsqueda/filtro, selección y estado de formulario
//! (con sus contratos de validación). El flujo de una lista es siempre
//! colección cruda → [`filter::ListFilter`] → [`pagination::Pagination`] →
//! página renderizada; formulario y selección son máquinas de estado
//! independientes por registro.

pub mod filter;
pub mod form;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod validate;

pub use filter::{contains_ci, CategoryFilter, Filtered, ListFilter, NoCategory, Searchable};
pub use form::{FormPhase, FormState, GENERIC_SUBMIT_ERROR};
pub use pagination::{Pagination, ITEMS_PER_PAGE_DEFAULT};
pub use record::{FieldKind, FieldSchema, FieldValue, FormModel, Record};
pub use selection::Selection;
pub use validate::{require_positive, require_some, require_text, FieldErrors};
