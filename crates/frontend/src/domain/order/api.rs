use contracts::domain::order::{AddToDraftRequest, AddToDraftResponse};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Добавить пиццу в заявку-черновик текущего пользователя.
/// Бэкенд создаёт черновик, если его ещё нет, и возвращает его id.
pub async fn add_to_draft(product_id: i64, quantity: u32) -> Result<AddToDraftResponse, String> {
    let request = AddToDraftRequest {
        product_id,
        quantity,
    };

    let response = Request::post(&format!("{}/api/orders/add_to_draft/", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to add to draft order: {}", response.status()));
    }

    response
        .json::<AddToDraftResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
