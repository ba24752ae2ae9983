//! Error types for the gateway.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the service returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. The enum is `Clone` so test doubles can queue
//! errors and replay them.

use thiserror::Error;

/// Errors surfaced by the client, converters, and resolvers.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The service returned 404 — the requested entity does not exist.
    #[error("resource not found")]
    NotFound,

    /// The service returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (connect, DNS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected model.
    #[error("deserialization failed: {0}")]
    Deserialize(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// A REST model or GraphQL input failed domain conversion.
    #[error("conversion failed: {0}")]
    Convert(String),
}
