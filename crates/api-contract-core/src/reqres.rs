//! Models for the reqres user-authentication API

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `GET /api/users/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub data: User,
}

/// A reqres user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_body() {
        let body = LoginRequest::new("eve.holt@reqres.in", "cityslicka");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "email": "eve.holt@reqres.in", "password": "cityslicka" })
        );
    }

    #[test]
    fn test_user_envelope_decodes_snake_case_fields() {
        let body = json!({
            "data": {
                "id": 2,
                "email": "janet.weaver@reqres.in",
                "first_name": "Janet",
                "last_name": "Weaver",
                "avatar": "https://reqres.in/img/faces/2-image.jpg"
            },
            "support": { "url": "https://reqres.in/#support-heading" }
        });

        let envelope: UserEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data.id, 2);
        assert_eq!(envelope.data.first_name, "Janet");
    }
}
