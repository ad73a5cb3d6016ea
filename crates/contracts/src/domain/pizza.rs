use serde::{Deserialize, Serialize};

// ============================================================================
// Wire types
// ============================================================================

/// Пицца в каталоге. Поля соответствуют сериализатору бэкенда;
/// неизвестные поля ответа (например `deleted`) игнорируются.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Имя пользователя ответственного повара
    pub cook: String,
    /// URL изображения
    pub image: String,
    #[serde(default)]
    pub is_vegetarian: Option<bool>,
}

/// Ответ каталога: список пицц и id заявки-черновика текущего пользователя.
/// Для анонимной сессии бэкенд присылает `draft_order_id: null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub pizzas: Vec<Pizza>,
    #[serde(default)]
    pub draft_order_id: Option<i64>,
}

// ============================================================================
// Query types
// ============================================================================

/// Серверная сортировка по цене (значения параметра `ordering`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceOrdering {
    #[serde(rename = "price")]
    PriceAsc,
    #[serde(rename = "-price")]
    PriceDesc,
}

impl PriceOrdering {
    pub fn as_param(&self) -> &'static str {
        match self {
            PriceOrdering::PriceAsc => "price",
            PriceOrdering::PriceDesc => "-price",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "price" => Some(PriceOrdering::PriceAsc),
            "-price" => Some(PriceOrdering::PriceDesc),
            _ => None,
        }
    }
}

/// Параметры запроса каталога. Каждый запрос несёт объединение всех
/// активных критериев: смена одного критерия не теряет остальные.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<PriceOrdering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
}

impl CatalogQuery {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.ordering.is_none() && self.is_vegetarian.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pizza_without_vegetarian_field() {
        let json = r#"{
            "id": 3,
            "name": "Маргарита",
            "price": 599,
            "description": "Томатный соус, моцарелла",
            "cook": "ivan",
            "image": "http://localhost:8000/media/margherita.png"
        }"#;
        let pizza: Pizza = serde_json::from_str(json).unwrap();
        assert_eq!(pizza.id, 3);
        assert_eq!(pizza.price, 599.0);
        assert_eq!(pizza.is_vegetarian, None);
    }

    #[test]
    fn test_parse_pizza_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "Пепперони",
            "price": 750,
            "description": "Пепперони, сыр",
            "cook": "anna",
            "deleted": false,
            "image": "/media/pepperoni.png",
            "is_vegetarian": false
        }"#;
        let pizza: Pizza = serde_json::from_str(json).unwrap();
        assert_eq!(pizza.is_vegetarian, Some(false));
    }

    #[test]
    fn test_parse_catalog_response_with_null_draft_order() {
        let json = r#"{"pizzas": [], "draft_order_id": null}"#;
        let response: CatalogResponse = serde_json::from_str(json).unwrap();
        assert!(response.pizzas.is_empty());
        assert_eq!(response.draft_order_id, None);
    }

    #[test]
    fn test_parse_catalog_response_without_draft_order() {
        let json = r#"{"pizzas": [{
            "id": 2,
            "name": "Четыре сыра",
            "price": 820,
            "description": "Моцарелла, горгонзола, пармезан, чеддер",
            "cook": "ivan",
            "image": "/media/four_cheese.png",
            "is_vegetarian": true
        }]}"#;
        let response: CatalogResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.pizzas.len(), 1);
        assert_eq!(response.pizzas[0].is_vegetarian, Some(true));
        assert_eq!(response.draft_order_id, None);
    }

    #[test]
    fn test_price_ordering_params() {
        assert_eq!(PriceOrdering::PriceAsc.as_param(), "price");
        assert_eq!(PriceOrdering::PriceDesc.as_param(), "-price");
        assert_eq!(
            PriceOrdering::from_param("price"),
            Some(PriceOrdering::PriceAsc)
        );
        assert_eq!(
            PriceOrdering::from_param("-price"),
            Some(PriceOrdering::PriceDesc)
        );
        assert_eq!(PriceOrdering::from_param(""), None);
        assert_eq!(PriceOrdering::from_param("name"), None);
    }

    #[test]
    fn test_catalog_query_is_empty() {
        assert!(CatalogQuery::default().is_empty());
        let query = CatalogQuery {
            ordering: Some(PriceOrdering::PriceDesc),
            ..Default::default()
        };
        assert!(!query.is_empty());
    }
}
