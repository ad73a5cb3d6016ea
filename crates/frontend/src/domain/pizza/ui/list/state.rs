use contracts::domain::pizza::{CatalogQuery, PriceOrdering};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct CatalogListState {
    // критерии фильтрации
    pub search: String,
    pub ordering: Option<PriceOrdering>,
    pub vegetarian: Option<bool>,
}

impl CatalogListState {
    /// Запрос каталога из текущих критериев. Все активные критерии
    /// объединяются: смена сортировки не теряет поиск и наоборот.
    pub fn to_query(&self) -> CatalogQuery {
        let search = self.search.trim();
        CatalogQuery {
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
            ordering: self.ordering,
            is_vegetarian: self.vegetarian,
        }
    }

    /// Активен ли структурный фильтр (сортировка или вегетарианство)
    pub fn has_structured(&self) -> bool {
        self.ordering.is_some() || self.vegetarian.is_some()
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}
