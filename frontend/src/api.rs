use gloo_net::http::Request;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::booking::form::{ConfirmationRequest, FieldRecord};
use crate::config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Encode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Remote booking endpoints.
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    async fn create_consultation(&self, payload: &FieldRecord)
        -> Result<serde_json::Value, ApiError>;
    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), ApiError>;
}

/// Value of cookie `name` in a `document.cookie` style header, URL-decoded.
pub fn csrf_token(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| {
            let (key, value) = cookie.split_once('=')?;
            (key == name).then(|| value)
        })
        .map(|value| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

fn document_cookies() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Headers for a JSON POST. The CSRF header is only sent when the cookie
/// exists.
fn request_headers(cookie_header: &str) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_string())];
    if let Some(token) = csrf_token(cookie_header, config::CSRF_COOKIE_NAME) {
        headers.push((config::CSRF_HEADER_NAME, token));
    }
    headers
}

pub struct HttpBookingApi {
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_backend_url())
    }

    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let mut request = Request::post(&format!("{}{}", self.base_url, path));
        for (key, value) in request_headers(&document_cookies()) {
            request = request.header(key, &value);
        }
        let response = request.json(body)?.send().await?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }
}

impl BookingApi for HttpBookingApi {
    async fn create_consultation(
        &self,
        payload: &FieldRecord,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self.post_json("/consultations/", payload).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), ApiError> {
        self.post_json("/send-confirmation/", request).await?;
        Ok(())
    }
}

/// One newsletter sign-up as stored in the document database. `subscribedAt`
/// is filled in by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberRecord {
    pub email: String,
    pub source: String,
}

#[allow(async_fn_in_trait)]
pub trait SubscriberStore {
    async fn add_subscriber(&self, record: &SubscriberRecord) -> Result<(), ApiError>;
}

/// Writes subscribers through the Firestore REST API.
pub struct FirestoreStore {
    project_id: String,
    api_key: String,
    collection: String,
}

impl FirestoreStore {
    pub fn new(
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: api_key.into(),
            collection: collection.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::firebase_project_id(),
            config::firebase_api_key(),
            config::NEWSLETTER_COLLECTION,
        )
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)", self.project_id)
    }

    /// Commit body creating one document with a server-side timestamp.
    pub fn commit_body(&self, record: &SubscriberRecord, document_id: &str) -> serde_json::Value {
        json!({
            "writes": [{
                "update": {
                    "name": format!(
                        "{}/documents/{}/{}",
                        self.database_path(),
                        self.collection,
                        document_id
                    ),
                    "fields": {
                        "email": { "stringValue": record.email },
                        "source": { "stringValue": record.source },
                    }
                },
                "updateTransforms": [{
                    "fieldPath": "subscribedAt",
                    "setToServerValue": "REQUEST_TIME"
                }],
                "currentDocument": { "exists": false }
            }]
        })
    }
}

impl SubscriberStore for FirestoreStore {
    async fn add_subscriber(&self, record: &SubscriberRecord) -> Result<(), ApiError> {
        let document_id = uuid::Uuid::new_v4().simple().to_string();
        let url = format!(
            "https://firestore.googleapis.com/v1/{}/documents:commit?key={}",
            self.database_path(),
            urlencoding::encode(&self.api_key)
        );
        let response = Request::post(&url)
            .json(&self.commit_body(record, &document_id))?
            .send()
            .await?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_csrf_cookie_among_others() {
        let cookies = "sessionid=abc; csrftoken=tok%2Ben; theme=dark";
        assert_eq!(csrf_token(cookies, "csrftoken"), Some("tok+en".to_string()));
    }

    #[test]
    fn ignores_cookies_with_matching_prefix() {
        assert_eq!(csrf_token("csrftokenx=1; other=2", "csrftoken"), None);
        assert_eq!(csrf_token("", "csrftoken"), None);
    }

    #[test]
    fn csrf_header_only_sent_when_cookie_present() {
        let headers = request_headers("sessionid=abc; csrftoken=tok");
        assert!(headers.contains(&("X-CSRFToken", "tok".to_string())));

        let headers = request_headers("sessionid=abc");
        assert_eq!(headers, vec![("Content-Type", "application/json".to_string())]);
    }

    #[test]
    fn commit_body_targets_collection_with_server_timestamp() {
        let store = FirestoreStore::new("agency", "key", "newsletter_subscribers");
        let body = store.commit_body(
            &SubscriberRecord {
                email: "a@b.co".to_string(),
                source: "footer_form".to_string(),
            },
            "doc1",
        );
        let write = &body["writes"][0];
        assert_eq!(
            write["update"]["name"],
            "projects/agency/databases/(default)/documents/newsletter_subscribers/doc1"
        );
        assert_eq!(write["update"]["fields"]["email"]["stringValue"], "a@b.co");
        assert_eq!(write["update"]["fields"]["source"]["stringValue"], "footer_form");
        assert_eq!(write["updateTransforms"][0]["fieldPath"], "subscribedAt");
        assert_eq!(write["updateTransforms"][0]["setToServerValue"], "REQUEST_TIME");
    }
}
