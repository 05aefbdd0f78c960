//! Registration, login and the current user

use super::ApiClient;
use avitolog_common::ApiFailure;
use avitolog_ui::display_types::Member;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Tokens {
    pub access: String,
    /// Absent when the server does not rotate refresh tokens
    #[serde(default)]
    pub refresh: Option<String>,
}

impl ApiClient {
    pub async fn register(&self, registration: &Registration) -> Result<Member, ApiFailure> {
        self.post("/auth/register/", to_body(registration)).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Tokens, ApiFailure> {
        self.post("/auth/login/", to_body(credentials)).await
    }

    pub async fn me(&self) -> Result<Member, ApiFailure> {
        self.get("/me/").await
    }

}

fn to_body<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registration_body() {
        let registration = Registration {
            username: "ivan".to_string(),
            email: "ivan@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert_eq!(
            to_body(&registration),
            json!({"username": "ivan", "email": "ivan@example.com", "password": "secret1"})
        );
    }

    #[test]
    fn test_tokens_without_refresh() {
        let tokens: Tokens = serde_json::from_str(r#"{"access": "a.b.c"}"#).unwrap();
        assert_eq!(tokens.access, "a.b.c");
        assert_eq!(tokens.refresh, None);
    }
}
