//! List resolver: queries and mutations against `/lists/...`.
//!
//! The collection endpoint is `/lists/user/all` — the service scopes the
//! listing to the authenticated user.

use std::sync::Arc;

use crate::client::{Method, RestClient};
use crate::convert::ListConverter;
use crate::error::GatewayError;
use crate::graphql::{CreateListInput, List, UpdateListInput};
use crate::models;
use crate::resolvers::{decode, encode};

pub struct ListResolver {
    client: Arc<dyn RestClient>,
    converter: Arc<dyn ListConverter>,
}

impl ListResolver {
    pub fn new(client: Arc<dyn RestClient>, converter: Arc<dyn ListConverter>) -> Self {
        Self { client, converter }
    }

    pub async fn lists(&self) -> Result<Vec<List>, GatewayError> {
        let bytes = self.client.call(Method::Get, "/lists/user/all", None).await?;
        let lists: Vec<models::List> = decode(&bytes)?;
        self.converter.many_to_graphql(lists)
    }

    pub async fn list(&self, id: &str) -> Result<List, GatewayError> {
        let bytes = self
            .client
            .call(Method::Get, &format!("/lists/{id}"), None)
            .await?;
        let list: models::List = decode(&bytes)?;
        self.converter.to_graphql(list)
    }

    pub async fn create_list(&self, input: CreateListInput) -> Result<List, GatewayError> {
        let payload = self.converter.from_create_input(input)?;
        let body = encode(&payload)?;
        let response = self
            .client
            .call(Method::Post, "/lists/create", Some(body))
            .await?;
        let id: String = decode(&response)?;
        self.list(&id).await
    }

    pub async fn update_list(
        &self,
        id: &str,
        input: UpdateListInput,
    ) -> Result<List, GatewayError> {
        let patch = self.converter.from_update_input(input)?;
        let body = encode(&patch)?;
        self.client
            .call(Method::Put, &format!("/lists/{id}"), Some(body))
            .await?;
        self.list(id).await
    }

    /// GET-then-DELETE; see `UserResolver::delete_user` for the snapshot
    /// semantics.
    pub async fn delete_list(&self, id: &str) -> Result<List, GatewayError> {
        let path = format!("/lists/{id}");
        let bytes = self.client.call(Method::Get, &path, None).await?;
        let list: models::List = decode(&bytes)?;
        let snapshot = self.converter.to_graphql(list)?;
        self.client.call(Method::Delete, &path, None).await?;
        Ok(snapshot)
    }
}
