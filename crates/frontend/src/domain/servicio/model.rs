use contracts::domain::servicio::{CategoriaServicio, Servicio, ServicioDto};

use crate::shared::collection::{
    contains_ci, require_positive, require_text, CategoryFilter, FieldErrors, FieldKind,
    FieldSchema, FieldValue, FormModel, Searchable,
};

impl Searchable for Servicio {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.nombre, term)
    }
}

/// Filtro por categoría: "todas" o una categoría puntual (igualdad).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FiltroServicio {
    #[default]
    Todas,
    Categoria(CategoriaServicio),
}

impl FiltroServicio {
    pub fn clave(&self) -> &'static str {
        match self {
            FiltroServicio::Todas => "todas",
            FiltroServicio::Categoria(c) => c.clave(),
        }
    }

    pub fn from_clave(clave: &str) -> Self {
        CategoriaServicio::from_clave(clave)
            .map(FiltroServicio::Categoria)
            .unwrap_or_default()
    }
}

impl CategoryFilter<Servicio> for FiltroServicio {
    fn matches(&self, item: &Servicio) -> bool {
        match self {
            FiltroServicio::Todas => true,
            FiltroServicio::Categoria(c) => item.categoria == *c,
        }
    }
}

impl FormModel for ServicioDto {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("nombre", FieldValue::Text(v)) => self.nombre = v,
            ("precio", FieldValue::Decimal(v)) => self.precio = v,
            ("duracionMinutos", FieldValue::Integer(v)) => self.duracion_minutos = v,
            ("categoria", FieldValue::Text(v)) => {
                if let Some(categoria) = CategoriaServicio::from_clave(&v) {
                    self.categoria = categoria;
                }
            }
            _ => {}
        }
    }
}

pub fn servicio_schema() -> FieldSchema {
    FieldSchema::new()
        .field("precio", FieldKind::Decimal)
        .field("duracionMinutos", FieldKind::Integer)
}

pub fn validate_servicio(dto: &ServicioDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "nombre", &dto.nombre, "El nombre es obligatorio");
    require_positive(
        &mut errors,
        "precio",
        dto.precio,
        "El precio debe ser mayor a cero",
    );
    if dto.duracion_minutos <= 0 {
        errors.add("duracionMinutos", "La duración debe ser mayor a cero");
    }
    errors
}

pub fn format_precio(precio: f64) -> String {
    format!("$ {:.2}", precio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::{FormState, ListFilter};

    fn catalogo() -> Vec<Servicio> {
        vec![
            Servicio {
                id: 1,
                nombre: "Corte de pelo".to_string(),
                precio: 25.0,
                duracion_minutos: 30,
                categoria: CategoriaServicio::Corte,
            },
            Servicio {
                id: 2,
                nombre: "Peinado".to_string(),
                precio: 40.0,
                duracion_minutos: 45,
                categoria: CategoriaServicio::Peinado,
            },
        ]
    }

    #[test]
    fn busqueda_sobre_el_nombre() {
        let mut filtro: ListFilter<FiltroServicio> = ListFilter::new();
        filtro.set_search_term("cort");
        let resultado = filtro.apply(&catalogo());
        assert_eq!(resultado.shown(), 1);
        assert_eq!(resultado.items[0].nombre, "Corte de pelo");
    }

    #[test]
    fn filtro_por_categoria() {
        let mut filtro: ListFilter<FiltroServicio> = ListFilter::new();
        filtro.set_category(FiltroServicio::Categoria(CategoriaServicio::Peinado));
        let resultado = filtro.apply(&catalogo());
        assert_eq!(resultado.shown(), 1);
        assert_eq!(resultado.items[0].nombre, "Peinado");
    }

    #[test]
    fn el_precio_coerce_por_esquema() {
        let initial = ServicioDto {
            nombre: String::new(),
            precio: 0.0,
            ..Default::default()
        };
        let mut form = FormState::new(initial, servicio_schema());

        form.handle_change("precio", "25");
        assert_eq!(form.draft().precio, 25.0);

        form.handle_change("duracionMinutos", "45");
        assert_eq!(form.draft().duracion_minutos, 45);

        // el nombre es texto plano
        form.handle_change("nombre", "Corte de pelo");
        assert_eq!(form.draft().nombre, "Corte de pelo");
    }

    #[test]
    fn validacion_de_servicio() {
        let dto = ServicioDto::default();
        let errors = validate_servicio(&dto);
        assert_eq!(
            errors.first_message().as_deref(),
            Some("El nombre es obligatorio")
        );
        assert_eq!(errors.get("precio"), Some("El precio debe ser mayor a cero"));

        let valido = ServicioDto {
            nombre: "Corte".to_string(),
            precio: 25.0,
            duracion_minutos: 30,
            ..Default::default()
        };
        assert!(validate_servicio(&valido).is_empty());
    }
}
