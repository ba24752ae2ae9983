//! Resolver layer: translates GraphQL operations into todoservice calls.
//!
//! # Design
//! One resolver per entity, each holding the shared `RestClient` and the
//! entity's converter behind `Arc<dyn ...>` seams. Every operation is a
//! strictly linear call sequence with fail-fast short-circuit: reads are
//! GET → decode → convert, create is POST-then-GET, update is PUT-then-GET,
//! and delete fetches a pre-deletion snapshot before issuing the DELETE.
//! There is no retry and no rollback; a partial failure in a multi-call
//! sequence surfaces as a plain error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::GatewayError;

mod list;
mod todo;
mod user;

pub use list::ListResolver;
pub use todo::TodoResolver;
pub use user::UserResolver;

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(bytes).map_err(|e| GatewayError::Deserialize(e.to_string()))
}

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, GatewayError> {
    serde_json::to_vec(value).map_err(|e| GatewayError::Serialize(e.to_string()))
}
