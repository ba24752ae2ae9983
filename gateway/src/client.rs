//! HTTP client seam between the resolvers and the todoservice.
//!
//! # Design
//! Resolvers depend on the `RestClient` trait, not on a concrete HTTP stack.
//! A call is described by method, service-relative path, and an optional JSON
//! body; the result is the raw response bytes or a `GatewayError`. Keeping
//! the seam this narrow makes resolvers deterministic under test — a mock
//! client queues byte responses per (method, path) pair and the resolver
//! logic never notices.

use async_trait::async_trait;

use crate::error::GatewayError;

/// HTTP method for a todoservice call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Executes one HTTP round-trip against the todoservice.
///
/// `path` is service-relative (e.g. `/todos/1`). `body` is `None` for GET and
/// DELETE, a JSON payload for POST and PUT. Any transport failure or non-2xx
/// status is an error; callers never see partial bytes. Implementations must
/// be safe for concurrent use.
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, GatewayError>;
}

/// `RestClient` backed by reqwest.
///
/// Holds only the service base URL and a connection-pooling `reqwest::Client`;
/// no mutable state between calls.
#[derive(Debug, Clone)]
pub struct HttpRestClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, GatewayError> {
        let url = self.url(path);
        tracing::debug!(method = method.as_str(), %url, "todoservice request");

        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };
        if let Some(body) = body {
            request = request
                .header("content-type", "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        tracing::warn!(method = method.as_str(), %url, status = status.as_u16(), "todoservice error response");
        if status.as_u16() == 404 {
            return Err(GatewayError::NotFound);
        }
        Err(GatewayError::Http {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = HttpRestClient::new("http://localhost:3000/");
        assert_eq!(client.url("/todos/user/all"), "http://localhost:3000/todos/user/all");
    }

    #[test]
    fn method_strings() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
