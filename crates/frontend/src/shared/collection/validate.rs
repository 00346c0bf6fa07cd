/// Errores de validación con clave de campo, en el orden en que se
/// detectaron. El primero es el que se muestra como error del formulario.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.push((field.into(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Primer mensaje para un campo puntual.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, message)| message.as_str())
    }

    /// Primer mensaje del conjunto: el error a nivel de formulario.
    pub fn first_message(&self) -> Option<String> {
        self.entries.first().map(|(_, message)| message.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

/// Agrega un error si el texto queda vacío después de recortar espacios.
pub fn require_text(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Agrega un error si el valor no es estrictamente positivo.
pub fn require_positive(errors: &mut FieldErrors, field: &str, value: f64, message: &str) {
    if !(value > 0.0) {
        errors.add(field, message);
    }
}

/// Agrega un error si la opción no está elegida.
pub fn require_some<T>(errors: &mut FieldErrors, field: &str, value: &Option<T>, message: &str) {
    if value.is_none() {
        errors.add(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_primer_mensaje_gana() {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "nombre", "  ", "El nombre es obligatorio");
        require_positive(&mut errors, "precio", 0.0, "El precio debe ser mayor a cero");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.first_message().as_deref(),
            Some("El nombre es obligatorio")
        );
        assert_eq!(errors.get("precio"), Some("El precio debe ser mayor a cero"));
    }

    #[test]
    fn sin_errores() {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "nombre", "Corte", "no debería aparecer");
        require_positive(&mut errors, "precio", 10.0, "no debería aparecer");
        require_some(&mut errors, "sucursalId", &Some(1), "no debería aparecer");
        assert!(errors.is_empty());
        assert_eq!(errors.first_message(), None);
    }

    #[test]
    fn precio_nan_tambien_falla() {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "precio", f64::NAN, "inválido");
        assert_eq!(errors.get("precio"), Some("inválido"));
    }
}
