use serde::{Deserialize, Serialize};

/// Тело запроса добавления пиццы в заявку-черновик
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToDraftRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// Ответ `add_to_draft`: бэкенд возвращает id заявки-черновика,
/// в которую добавлен товар (создаёт её при необходимости)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToDraftResponse {
    pub message: String,
    pub order_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_to_draft_response() {
        let json = r#"{"message": "Product added to draft order.", "order_id": 17}"#;
        let response: AddToDraftResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.order_id, 17);
    }

    #[test]
    fn test_serialize_add_to_draft_request() {
        let request = AddToDraftRequest {
            product_id: 5,
            quantity: 1,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"product_id":5,"quantity":1}"#);
    }
}
