use contracts::domain::pizza::{CatalogQuery, CatalogResponse, Pizza};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Путь каталога. Все активные критерии сериализуются в одну строку
/// запроса; пустой набор критериев даёт путь без параметров.
pub fn catalog_path(query: &CatalogQuery) -> String {
    if query.is_empty() {
        return "/api/pizzas/".to_string();
    }
    let qs = serde_qs::to_string(query).unwrap_or_default();
    format!("/api/pizzas/?{}", qs)
}

/// Fetch the catalog with the merged filter criteria.
/// Cookies are included: the backend scopes the list by session role.
pub async fn fetch_catalog(query: &CatalogQuery) -> Result<CatalogResponse, String> {
    let response = Request::get(&format!("{}{}", api_base(), catalog_path(query)))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch pizzas: {}", response.status()));
    }

    response
        .json::<CatalogResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Get pizza by id
pub async fn fetch_pizza(id: i64) -> Result<Pizza, String> {
    let response = Request::get(&format!("{}/api/pizzas/{}/", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("Failed to fetch pizza: {}", response.status()));
    }

    response
        .json::<Pizza>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
