//! HTTP client for the AutoReal backend — the single point of entry for
//! every request this crate issues.
//!
//! ARCHITECTURAL RULE: service implementations never build their own
//! `reqwest` client. All requests go through `ApiClient` so the timeout,
//! the session token and the status-code mapping live in one place.
//!
//! Nothing here retries: review submission, reaction toggling and
//! favorite toggling are not idempotent at the transport level, so a
//! resent request can double-post. A failed call is surfaced and
//! abandoned.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{Error, Result};
use crate::session::Session;

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

/// Error body shape the backend uses for non-2xx answers. Fields are
/// optional so an unexpected shape degrades to the raw body text.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        ApiClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        self.decode(path, response).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        self.decode(path, response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        self.decode(path, response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        self.decode(path, response).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::PATCH, path).send().await?;
        self.decode(path, response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.decode(path, response).await
    }

    /// Multipart upload for user images; `field` is the form field name
    /// the backend expects.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &'static str,
        file_name: String,
        data: Vec<u8>,
    ) -> Result<T> {
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name);
        let form = reqwest::multipart::Form::new().part(field, part);
        let response = self
            .request(Method::POST, path)
            .multipart(form)
            .send()
            .await?;
        self.decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(&self, path: &str, response: Response) -> Result<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            // Expired token and logged-out are indistinguishable to the
            // caller; both route to login.
            warn!("request to {path} rejected with {status}");
            return Err(Error::AuthenticationRequired);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.message.or(e.error))
                .unwrap_or(body);
            warn!("request to {path} failed with {status}: {message}");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("request to {path} succeeded ({status})");

        // Some mutation endpoints answer with an empty body; let unit-ish
        // callers decode `null` instead of choking on "".
        let body = response.text().await?;
        if body.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Decode target for endpoints whose response body carries nothing the
/// caller needs.
#[derive(Debug, Deserialize)]
pub struct Ignored(pub serde_json::Value);
