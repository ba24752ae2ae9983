//! REST wire models for the todoservice.
//!
//! # Design
//! These types mirror the todoservice JSON schema but are defined
//! independently from the mock-server crate; integration tests catch any
//! drift between the two. Wire field names are PascalCase (`ID`, `Title`,
//! `Email`, ...), mapped with `serde(rename)`. Update payloads carry only
//! `Option` fields with `skip_serializing_if`, so "absent" and "empty
//! string" stay distinguishable on the wire.

use serde::{Deserialize, Serialize};

/// A user document as the todoservice returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Email")]
    pub email: String,
}

/// Request payload for `POST /users/create`. The service assigns the ID and
/// returns it as a bare JSON string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    #[serde(rename = "Email")]
    pub email: String,
}

/// Request payload for `PUT /users/{id}`. Omitted fields remain unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A list document. The wire name for the display name is `Title`; the
/// GraphQL side exposes it as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
}

/// Request payload for `POST /lists/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateList {
    #[serde(rename = "Title")]
    pub title: String,
}

/// Request payload for `PUT /lists/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateList {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A todo document. `ListID` and `AssigneeID` are optional foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ListID", default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(rename = "AssigneeID", default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Request payload for `POST /todos/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ListID", default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(rename = "AssigneeID", default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Request payload for `PUT /todos/{id}`. Omitted fields remain unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "ListID", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(rename = "AssigneeID", skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}
