use std::collections::{BTreeMap, HashMap};

/// Tipo declarado de un campo del formulario. El esquema es explícito por
/// campo: ningún campo se convierte a número por cómo se llama.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Flag,
}

/// Valor primitivo de un campo.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            FieldValue::Decimal(value) => Some(*value),
            FieldValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(value) => Some(*value),
            _ => None,
        }
    }
}

/// Mapa nombre de campo → tipo. Los campos no declarados son texto.
#[derive(Clone, Debug, Default)]
pub struct FieldSchema {
    kinds: HashMap<&'static str, FieldKind>,
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.kinds.insert(name, kind);
        self
    }

    pub fn kind_of(&self, field: &str) -> FieldKind {
        self.kinds.get(field).copied().unwrap_or(FieldKind::Text)
    }

    /// Convierte el texto crudo del input al valor tipado del campo.
    /// `None` = entrada no interpretable; el campo queda como estaba.
    pub fn coerce(&self, field: &str, raw: &str) -> Option<FieldValue> {
        match self.kind_of(field) {
            FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => raw.trim().parse::<i64>().ok().map(FieldValue::Integer),
            FieldKind::Decimal => raw.trim().parse::<f64>().ok().map(FieldValue::Decimal),
            FieldKind::Flag => match raw.trim() {
                // semántica de checkbox: "on" es lo que manda el DOM
                "true" | "on" => Some(FieldValue::Flag(true)),
                "false" | "" => Some(FieldValue::Flag(false)),
                _ => None,
            },
        }
    }
}

/// Borrador editable campo a campo. Los DTOs lo implementan despachando
/// por el nombre de campo del wire; los campos desconocidos se ignoran.
pub trait FormModel: Clone {
    fn set_field(&mut self, field: &str, value: FieldValue);
}

/// Registro dinámico: mapa ordenado de campos a valores primitivos. Es la
/// implementación de referencia de `FormModel` y lo que usan los tests del
/// motor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: FieldValue) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }
}

impl FormModel for Record {
    fn set_field(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_por_esquema_no_por_nombre() {
        let schema = FieldSchema::new()
            .field("precio", FieldKind::Decimal)
            .field("sucursalId", FieldKind::Integer);

        assert_eq!(schema.coerce("precio", "25"), Some(FieldValue::Decimal(25.0)));
        assert_eq!(schema.coerce("sucursalId", "7"), Some(FieldValue::Integer(7)));
        // campo no declarado: texto, aunque el nombre "parezca" un id
        assert_eq!(
            schema.coerce("otroId", "7"),
            Some(FieldValue::Text("7".to_string()))
        );
    }

    #[test]
    fn numero_invalido_no_coerce() {
        let schema = FieldSchema::new().field("precio", FieldKind::Decimal);
        assert_eq!(schema.coerce("precio", "abc"), None);
        assert_eq!(schema.coerce("precio", ""), None);
    }

    #[test]
    fn flags_con_semantica_de_checkbox() {
        let schema = FieldSchema::new().field("activo", FieldKind::Flag);
        assert_eq!(schema.coerce("activo", "on"), Some(FieldValue::Flag(true)));
        assert_eq!(schema.coerce("activo", "true"), Some(FieldValue::Flag(true)));
        assert_eq!(schema.coerce("activo", ""), Some(FieldValue::Flag(false)));
        assert_eq!(schema.coerce("activo", "si"), None);
    }

    #[test]
    fn record_como_form_model() {
        let mut record = Record::new().with("nombre", FieldValue::Text(String::new()));
        record.set_field("nombre", FieldValue::Text("Corte".to_string()));
        assert_eq!(
            record.get("nombre"),
            Some(&FieldValue::Text("Corte".to_string()))
        );
    }
}
