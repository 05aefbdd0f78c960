//! REST client for the Avitolog backend
//!
//! Every call returns `Result<T, ApiFailure>`. Pages turn failures into text
//! with `avitolog_common::error_message`.

mod ads;
mod auth;
mod comments;
mod history;
mod imports;

pub use auth::{Credentials, Registration, Tokens};
pub use comments::COMMENTS_PAGE_SIZE;

use crate::session::Session;
use crate::storage;
use avitolog_common::ApiFailure;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::rc::Rc;
use tracing::{debug, warn};

/// Shared client, provided through context.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Rc<str>,
    session: Session,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: Rc::from(base.into()),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response, ApiFailure> {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = storage::access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
            .send()
            .await
            .map_err(|e| ApiFailure::transport(format!("Network error: {e}")))
    }

    /// Send a request, refreshing the access token once on 401.
    ///
    /// When the refresh fails the session is cleared and the original 401 is
    /// returned.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ApiFailure> {
        let mut response = self.send(method.clone(), path, body.as_ref()).await?;

        if response.status() == StatusCode::UNAUTHORIZED && !is_auth_path(path) {
            match self.refresh_tokens().await {
                Ok(()) => response = self.send(method, path, body.as_ref()).await?,
                Err(failure) => {
                    warn!("Token refresh failed: {}", failure);
                    self.session.sign_out();
                }
            }
        }

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(failure_from_response(response).await)
        }
    }

    async fn refresh_tokens(&self) -> Result<(), ApiFailure> {
        let refresh = storage::refresh_token()
            .ok_or_else(|| ApiFailure::transport("No refresh token stored"))?;

        let response = self
            .http
            .post(self.url("/auth/refresh/"))
            .json(&json!({ "refresh": refresh }))
            .send()
            .await
            .map_err(|e| ApiFailure::transport(format!("Network error: {e}")))?;
        if !response.status().is_success() {
            return Err(failure_from_response(response).await);
        }

        let tokens: Tokens = parse(response).await?;
        storage::store_tokens(&tokens.access, tokens.refresh.as_deref());
        debug!("Access token refreshed");
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiFailure> {
        parse(self.request(Method::GET, path, None).await?).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiFailure> {
        parse(self.request(Method::POST, path, Some(body)).await?).await
    }

    /// POST without a body (toggles, view counters)
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiFailure> {
        parse(self.request(Method::POST, path, None).await?).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiFailure> {
        self.request(Method::DELETE, path, None).await.map(|_| ())
    }

    /// GET a list that may come bare or wrapped in `{items}`.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiFailure> {
        self.get::<ListBody<T>>(path).await.map(ListBody::into_items)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Paged { items: Vec<T> },
}

impl<T> ListBody<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) | ListBody::Paged { items } => items,
        }
    }
}

/// A 401 here means bad credentials, not an expired token.
fn is_auth_path(path: &str) -> bool {
    path.starts_with("/auth/")
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiFailure::transport(format!("Parse error: {e}")))
}

async fn failure_from_response(response: Response) -> ApiFailure {
    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let text = response.text().await.unwrap_or_default();
    http_failure(status, retry_after, &text)
}

fn http_failure(status: u16, retry_after: Option<String>, text: &str) -> ApiFailure {
    ApiFailure::response(status, parse_body(text)).with_retry_after(retry_after)
}

/// JSON bodies are kept parsed; anything else is kept as a string.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
