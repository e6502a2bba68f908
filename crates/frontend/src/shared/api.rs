//! REST client for the backend API
//!
//! Generic verbs over any [`Resource`]: the whole dashboard talks to
//! `GET/POST /api/<collection>` and `PUT/DELETE /api/<collection>/<id>`.
//! The bearer token from the auth session is attached to every request.

use std::fmt;

use contracts::domain::common::Resource;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    Network(String),
    /// The backend answered with a non-success status.
    Http(u16),
    /// The response body was not the JSON we expected.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http(status) => write!(f, "HTTP {status}"),
            ApiError::Decode(msg) => write!(f, "bad response body: {msg}"),
        }
    }
}

/// API base URL derived from the current window location; the backend always
/// listens on port 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn collection_url<T: Resource>() -> String {
    api_url(&format!("/api/{}", T::collection_name()))
}

fn record_url<T: Resource>(id: i64) -> String {
    api_url(&format!("/api/{}/{}", T::collection_name(), id))
}

/// Attach the session's bearer token, if any.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn expect_ok(
    response: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    Ok(response)
}

/// `GET /api/<collection>` — the full record set.
pub async fn fetch_all<T: Resource + DeserializeOwned>() -> Result<Vec<T>, ApiError> {
    let response = expect_ok(
        authorize(Request::get(&collection_url::<T>()))
            .header("Accept", "application/json")
            .send()
            .await,
    )
    .await?;
    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /api/<collection>` — create, returns the stored record.
pub async fn create<T: Resource + Serialize + DeserializeOwned>(record: &T) -> Result<T, ApiError> {
    let request = authorize(Request::post(&collection_url::<T>()))
        .json(record)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = expect_ok(request.send().await).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `PUT /api/<collection>/<id>` — update, returns the stored record.
pub async fn update<T: Resource + Serialize + DeserializeOwned>(
    id: i64,
    record: &T,
) -> Result<T, ApiError> {
    let request = authorize(Request::put(&record_url::<T>(id)))
        .json(record)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = expect_ok(request.send().await).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `DELETE /api/<collection>/<id>` — no content on success.
pub async fn delete_one<T: Resource>(id: i64) -> Result<(), ApiError> {
    expect_ok(authorize(Request::delete(&record_url::<T>(id))).send().await).await?;
    Ok(())
}
