/// Contención case-insensitive. Es el único criterio de matching del
/// buscador libre en todas las listas.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Trait para tipos de datos que soportan búsqueda por texto libre.
/// El impl decide sobre qué campos se busca.
pub trait Searchable {
    fn matches_search(&self, term: &str) -> bool;
}

/// Filtro categórico de enumeración cerrada. `Default` es la categoría
/// "todas"; el predicado puede ser igualdad o pertenencia derivada
/// (p. ej. "asignados" = clave foránea no nula).
pub trait CategoryFilter<T>: Clone + Default + PartialEq {
    fn matches(&self, item: &T) -> bool;
}

/// Para listas sin filtro categórico.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoCategory;

impl<T> CategoryFilter<T> for NoCategory {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Resultado del filtrado: los elementos visibles más el total de
/// candidatos, para los contadores "mostrando N de M".
#[derive(Clone, Debug)]
pub struct Filtered<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Filtered<T> {
    pub fn shown(&self) -> usize {
        self.items.len()
    }
}

/// Término de búsqueda + filtro categórico de una lista.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFilter<C> {
    search_term: String,
    category: C,
}

impl<C: Default + PartialEq> ListFilter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn category(&self) -> &C {
        &self.category
    }

    pub fn set_category(&mut self, category: C) {
        self.category = category;
    }

    /// Limpia término y categoría en una sola actualización atómica.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Cantidad de filtros activos (para el badge del panel).
    pub fn active_count(&self) -> usize {
        usize::from(!self.search_term.trim().is_empty()) + usize::from(self.category != C::default())
    }

    pub fn apply<T>(&self, items: &[T]) -> Filtered<T>
    where
        T: Searchable + Clone,
        C: CategoryFilter<T>,
    {
        let total = items.len();
        let term = self.search_term.trim();
        let items = items
            .iter()
            .filter(|item| term.is_empty() || item.matches_search(term))
            .filter(|item| self.category.matches(item))
            .cloned()
            .collect();
        Filtered { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        nombre: String,
        sucursal_id: Option<i64>,
    }

    impl Item {
        fn new(nombre: &str, sucursal_id: Option<i64>) -> Self {
            Self {
                nombre: nombre.to_string(),
                sucursal_id,
            }
        }
    }

    impl Searchable for Item {
        fn matches_search(&self, term: &str) -> bool {
            contains_ci(&self.nombre, term)
        }
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    enum Asignacion {
        #[default]
        Todos,
        Asignados,
        SinAsignar,
    }

    impl CategoryFilter<Item> for Asignacion {
        fn matches(&self, item: &Item) -> bool {
            match self {
                Asignacion::Todos => true,
                Asignacion::Asignados => item.sucursal_id.is_some(),
                Asignacion::SinAsignar => item.sucursal_id.is_none(),
            }
        }
    }

    fn catalogo() -> Vec<Item> {
        vec![
            Item::new("Corte de pelo", Some(1)),
            Item::new("Peinado", None),
        ]
    }

    #[test]
    fn busqueda_case_insensitive() {
        let items = catalogo();
        let mut filtro: ListFilter<Asignacion> = ListFilter::new();

        filtro.set_search_term("cort");
        let resultado = filtro.apply(&items);
        assert_eq!(resultado.items, vec![items[0].clone()]);

        filtro.set_search_term("CORT");
        let resultado = filtro.apply(&items);
        assert_eq!(resultado.items, vec![items[0].clone()]);
    }

    #[test]
    fn reset_restablece_termino_y_categoria() {
        let items = catalogo();
        let mut filtro: ListFilter<Asignacion> = ListFilter::new();
        filtro.set_search_term("cort");
        filtro.set_category(Asignacion::Asignados);
        assert_eq!(filtro.active_count(), 2);

        filtro.reset();
        assert_eq!(filtro.active_count(), 0);
        assert_eq!(*filtro.category(), Asignacion::Todos);
        let resultado = filtro.apply(&items);
        assert_eq!(resultado.items.len(), 2);
    }

    #[test]
    fn categoria_de_pertenencia_derivada() {
        let items = catalogo();
        let mut filtro: ListFilter<Asignacion> = ListFilter::new();

        filtro.set_category(Asignacion::Asignados);
        assert_eq!(filtro.apply(&items).items, vec![items[0].clone()]);

        filtro.set_category(Asignacion::SinAsignar);
        assert_eq!(filtro.apply(&items).items, vec![items[1].clone()]);
    }

    #[test]
    fn contadores_mostrando_n_de_m() {
        let items = catalogo();
        let mut filtro: ListFilter<Asignacion> = ListFilter::new();
        filtro.set_search_term("peina");

        let resultado = filtro.apply(&items);
        assert_eq!(resultado.shown(), 1);
        assert_eq!(resultado.total, 2);
    }

    #[test]
    fn termino_en_blanco_no_filtra() {
        let items = catalogo();
        let mut filtro: ListFilter<NoCategory> = ListFilter::new();
        filtro.set_search_term("   ");
        assert_eq!(filtro.apply(&items).shown(), 2);
    }
}
