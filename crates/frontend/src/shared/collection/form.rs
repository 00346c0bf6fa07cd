use super::record::{FieldSchema, FormModel};

/// Mensaje genérico cuando el guardado falla sin detalle.
pub const GENERIC_SUBMIT_ERROR: &str = "No se pudo completar la operación";

/// Fase del formulario. Un solo valor etiquetado en lugar de banderas
/// sueltas de loading/error: no existe el estado "cargando y con error".
#[derive(Clone, Debug, PartialEq)]
pub enum FormPhase {
    Idle,
    Editing,
    Validating,
    Submitting,
    Error(String),
}

/// Estado de un formulario sobre un borrador `T`.
///
/// El controlador es síncrono y sin IO. El guardado se parte en dos:
/// `begin_submit` valida y entrega una copia del borrador para la operación
/// async del caller; `finish_submit` cierra el ciclo con el resultado. Entre
/// ambas el formulario está en `Submitting` y rechaza reingresos.
#[derive(Clone, Debug)]
pub struct FormState<T: FormModel> {
    initial: T,
    draft: T,
    schema: FieldSchema,
    phase: FormPhase,
}

impl<T: FormModel> FormState<T> {
    pub fn new(initial: T, schema: FieldSchema) -> Self {
        Self {
            draft: initial.clone(),
            initial,
            schema,
            phase: FormPhase::Idle,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    /// Escribe el valor crudo de un input en el borrador, convertido según
    /// el esquema. Cualquier cambio limpia el error vigente (el usuario ya
    /// está corrigiendo); la entrada numérica no interpretable deja el
    /// campo como estaba. Mientras hay un guardado en vuelo los cambios se
    /// ignoran.
    pub fn handle_change(&mut self, field: &str, raw: &str) {
        if self.is_submitting() {
            return;
        }
        if let Some(value) = self.schema.coerce(field, raw) {
            self.draft.set_field(field, value);
        }
        self.phase = FormPhase::Editing;
    }

    /// Edición tipada del borrador (checkboxes, multi-selects). Mismo
    /// efecto sobre la fase que `handle_change`.
    pub fn update_draft(&mut self, update: impl FnOnce(&mut T)) {
        if self.is_submitting() {
            return;
        }
        update(&mut self.draft);
        self.phase = FormPhase::Editing;
    }

    /// Mitad síncrona del guardado.
    ///
    /// Devuelve `None` si ya hay un guardado en vuelo (reingreso rechazado)
    /// o si el validador devolvió un mensaje — en ese caso el mensaje queda
    /// como error del formulario y no hay ningún otro efecto. Si la
    /// validación pasa, entra en `Submitting` y devuelve la copia del
    /// borrador que hay que mandar al backend.
    pub fn begin_submit(
        &mut self,
        validate: impl FnOnce(&T) -> Option<String>,
    ) -> Option<T> {
        if self.is_submitting() {
            return None;
        }
        self.phase = FormPhase::Validating;
        match validate(&self.draft) {
            // solo un mensaje con contenido bloquea el guardado
            Some(message) if !message.trim().is_empty() => {
                self.phase = FormPhase::Error(message);
                None
            }
            _ => {
                self.phase = FormPhase::Submitting;
                Some(self.draft.clone())
            }
        }
    }

    /// Cierre garantizado del guardado: siempre sale de `Submitting`.
    /// El error vacío cae al mensaje genérico. Si el formulario ya no está
    /// en `Submitting` (lo resetearon mientras el guardado volaba), el
    /// resultado se descarta.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => self.phase = FormPhase::Idle,
            Err(message) => {
                let message = if message.trim().is_empty() {
                    GENERIC_SUBMIT_ERROR.to_string()
                } else {
                    message
                };
                self.phase = FormPhase::Error(message);
            }
        }
    }

    /// Vuelve al valor inicial (copia profunda independiente), sin error y
    /// sin guardado en curso.
    pub fn reset_form(&mut self) {
        self.draft = self.initial.clone();
        self.phase = FormPhase::Idle;
    }

    /// Reemplaza borrador e inicial (modo edición: el registro llegó del
    /// backend después de construir el formulario).
    pub fn load(&mut self, value: T) {
        self.initial = value.clone();
        self.draft = value;
        self.phase = FormPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::record::{FieldKind, FieldValue, Record};

    fn schema() -> FieldSchema {
        FieldSchema::new()
            .field("precio", FieldKind::Decimal)
            .field("sucursalId", FieldKind::Integer)
    }

    fn inicial() -> Record {
        Record::new()
            .with("nombre", FieldValue::Text(String::new()))
            .with("precio", FieldValue::Decimal(0.0))
    }

    #[test]
    fn cambio_con_coercion_del_esquema() {
        let mut form = FormState::new(inicial(), schema());

        form.handle_change("precio", "25");
        assert_eq!(
            form.draft().get("precio"),
            Some(&FieldValue::Decimal(25.0))
        );

        form.handle_change("sucursalId", "7");
        assert_eq!(
            form.draft().get("sucursalId"),
            Some(&FieldValue::Integer(7))
        );

        // campo sin esquema: queda como texto
        form.handle_change("nombre", "Corte de pelo");
        assert_eq!(
            form.draft().get("nombre"),
            Some(&FieldValue::Text("Corte de pelo".to_string()))
        );
    }

    #[test]
    fn numero_invalido_deja_el_campo_como_estaba() {
        let mut form = FormState::new(inicial(), schema());
        form.handle_change("precio", "25");
        form.handle_change("precio", "abc");
        assert_eq!(
            form.draft().get("precio"),
            Some(&FieldValue::Decimal(25.0))
        );
        // el cambio igual cuenta como edición
        assert_eq!(*form.phase(), FormPhase::Editing);
    }

    #[test]
    fn validacion_fallida_bloquea_el_guardado() {
        let mut form = FormState::new(inicial(), schema());

        let snapshot = form.begin_submit(|draft| {
            let vacio = draft
                .get("nombre")
                .and_then(FieldValue::as_text)
                .map(str::is_empty)
                .unwrap_or(true);
            vacio.then(|| "El nombre es obligatorio".to_string())
        });

        assert!(snapshot.is_none());
        assert_eq!(form.error(), Some("El nombre es obligatorio"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn fallo_del_guardado_deja_el_mensaje_y_corta_el_loading() {
        let mut form = FormState::new(inicial(), schema());

        let snapshot = form.begin_submit(|_| None);
        assert!(snapshot.is_some());
        assert!(form.is_submitting());

        form.finish_submit(Err("boom".to_string()));
        assert_eq!(form.error(), Some("boom"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn guardado_exitoso_vuelve_a_idle() {
        let mut form = FormState::new(inicial(), schema());
        form.handle_change("precio", "10");

        form.begin_submit(|_| None).unwrap();
        form.finish_submit(Ok(()));
        assert_eq!(*form.phase(), FormPhase::Idle);
        assert!(form.error().is_none());
    }

    #[test]
    fn error_vacio_cae_al_mensaje_generico() {
        let mut form = FormState::new(inicial(), schema());
        form.begin_submit(|_| None).unwrap();
        form.finish_submit(Err("  ".to_string()));
        assert_eq!(form.error(), Some(GENERIC_SUBMIT_ERROR));
    }

    #[test]
    fn reingreso_rechazado_mientras_hay_guardado_en_vuelo() {
        let mut form = FormState::new(inicial(), schema());
        assert!(form.begin_submit(|_| None).is_some());

        // segundo submit antes de finish: rechazado, sin efectos
        assert!(form.begin_submit(|_| None).is_none());
        assert!(form.is_submitting());

        // los cambios tampoco entran con el guardado en vuelo
        form.handle_change("precio", "99");
        assert_eq!(form.draft().get("precio"), Some(&FieldValue::Decimal(0.0)));

        form.finish_submit(Ok(()));
        assert!(form.begin_submit(|_| None).is_some());
    }

    #[test]
    fn cualquier_cambio_limpia_el_error() {
        let mut form = FormState::new(inicial(), schema());
        form.begin_submit(|_| Some("El nombre es obligatorio".to_string()));
        assert!(form.error().is_some());

        form.handle_change("nombre", "Ana");
        assert!(form.error().is_none());
        assert_eq!(*form.phase(), FormPhase::Editing);
    }

    #[test]
    fn reset_restaura_el_inicial_byte_a_byte() {
        let original = inicial();
        let mut form = FormState::new(original.clone(), schema());

        form.handle_change("precio", "99");
        form.handle_change("nombre", "x");
        form.begin_submit(|_| Some("error".to_string()));

        form.reset_form();
        assert_eq!(*form.draft(), original);
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
        assert_eq!(*form.phase(), FormPhase::Idle);
    }

    #[test]
    fn resultado_tardio_tras_un_reset_se_descarta() {
        let mut form = FormState::new(inicial(), schema());
        form.begin_submit(|_| None).unwrap();
        form.reset_form();

        form.finish_submit(Err("boom".to_string()));
        assert!(form.error().is_none());
        assert_eq!(*form.phase(), FormPhase::Idle);
    }

    #[test]
    fn load_reemplaza_el_inicial_para_el_reset() {
        let mut form = FormState::new(inicial(), schema());
        let cargado = inicial().with("nombre", FieldValue::Text("Corte".to_string()));

        form.load(cargado.clone());
        form.handle_change("nombre", "otro");
        form.reset_form();
        assert_eq!(*form.draft(), cargado);
    }
}
