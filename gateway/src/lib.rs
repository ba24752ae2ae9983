//! GraphQL-to-REST gateway for the todoservice.
//!
//! # Overview
//! Exposes users, lists, and todos as a GraphQL schema whose resolvers
//! translate each operation into HTTP calls against the todoservice REST
//! API, deserialize the JSON documents, and convert them into GraphQL types.
//!
//! # Design
//! - `client::RestClient` is the only I/O seam; resolvers hold it as a trait
//!   object, so unit tests run against a queued-response mock.
//! - Converters (`convert`) are pure per-entity mappings between the REST
//!   wire models (`models`) and the GraphQL types (`graphql`).
//! - Multi-call sequences (create = POST-then-GET, update = PUT-then-GET,
//!   delete = snapshot-GET-then-DELETE) are strictly linear and fail fast;
//!   there is no retry and no compensation, and consistency between the two
//!   legs is best-effort.

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod graphql;
pub mod models;
pub mod resolvers;
pub mod schema;
pub mod server;

pub use client::{HttpRestClient, Method, RestClient};
pub use error::GatewayError;
pub use schema::{build_schema, GatewaySchema};
