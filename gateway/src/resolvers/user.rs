//! User resolver: queries and mutations against `/users/...`.

use std::sync::Arc;

use crate::client::{Method, RestClient};
use crate::convert::UserConverter;
use crate::error::GatewayError;
use crate::graphql::{CreateUserInput, UpdateUserInput, User};
use crate::models;
use crate::resolvers::{decode, encode};

pub struct UserResolver {
    client: Arc<dyn RestClient>,
    converter: Arc<dyn UserConverter>,
}

impl UserResolver {
    pub fn new(client: Arc<dyn RestClient>, converter: Arc<dyn UserConverter>) -> Self {
        Self { client, converter }
    }

    pub async fn users(&self) -> Result<Vec<User>, GatewayError> {
        let bytes = self.client.call(Method::Get, "/users/all", None).await?;
        let users: Vec<models::User> = decode(&bytes)?;
        self.converter.many_to_graphql(users)
    }

    pub async fn user(&self, id: &str) -> Result<User, GatewayError> {
        let bytes = self
            .client
            .call(Method::Get, &format!("/users/{id}"), None)
            .await?;
        let user: models::User = decode(&bytes)?;
        self.converter.to_graphql(user)
    }

    /// Creates the user, then re-fetches it so the response carries the full
    /// server-side document. The create endpoint replies with the new ID as a
    /// bare JSON string.
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, GatewayError> {
        let payload = self.converter.from_create_input(input)?;
        let body = encode(&payload)?;
        let response = self
            .client
            .call(Method::Post, "/users/create", Some(body))
            .await?;
        let id: String = decode(&response)?;
        self.user(&id).await
    }

    /// PUT-then-GET. If the PUT fails no GET is attempted; if the GET fails
    /// after a successful PUT the caller gets an error even though the write
    /// landed server-side.
    pub async fn update_user(
        &self,
        id: &str,
        input: UpdateUserInput,
    ) -> Result<User, GatewayError> {
        let patch = self.converter.from_update_input(input)?;
        let body = encode(&patch)?;
        self.client
            .call(Method::Put, &format!("/users/{id}"), Some(body))
            .await?;
        self.user(id).await
    }

    /// Fetches and converts the user first so the response can reflect the
    /// pre-deletion state, then issues the DELETE. If the DELETE fails the
    /// snapshot is discarded and the error is returned instead.
    pub async fn delete_user(&self, id: &str) -> Result<User, GatewayError> {
        let path = format!("/users/{id}");
        let bytes = self.client.call(Method::Get, &path, None).await?;
        let user: models::User = decode(&bytes)?;
        let snapshot = self.converter.to_graphql(user)?;
        self.client.call(Method::Delete, &path, None).await?;
        Ok(snapshot)
    }
}
