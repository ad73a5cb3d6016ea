use serde::{Deserialize, Serialize};

/// Сессия пользователя. Набор полей повторяет ответ логина бэкенда;
/// каталог использует только флаг `is_cook`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_cook: bool,
    #[serde(default)]
    pub draft_order_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response_shape() {
        // Лишние поля ответа логина (message, csrf_token) игнорируются
        let json = r#"{
            "message": "Login successful",
            "username": "maria",
            "is_staff": false,
            "is_superuser": false,
            "is_cook": true,
            "csrf_token": "abc",
            "draft_order_id": 12
        }"#;
        let session: UserSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.username, "maria");
        assert!(session.is_cook);
        assert_eq!(session.draft_order_id, Some(12));
    }

    #[test]
    fn test_parse_minimal_session() {
        let session: UserSession = serde_json::from_str(r#"{"username": "guest"}"#).unwrap();
        assert!(!session.is_cook);
        assert!(!session.is_staff);
        assert_eq!(session.draft_order_id, None);
    }
}
