//! Todo resolver: queries and mutations against `/todos/...`, plus the
//! single-entity lookups backing the `Todo.list` / `Todo.assignee` fields.

use std::sync::Arc;

use crate::client::{Method, RestClient};
use crate::convert::{ListConverter, TodoConverter, UserConverter};
use crate::error::GatewayError;
use crate::graphql::{CreateTodoInput, List, Todo, UpdateTodoInput, User};
use crate::models;
use crate::resolvers::{decode, encode};

pub struct TodoResolver {
    client: Arc<dyn RestClient>,
    converter: Arc<dyn TodoConverter>,
    list_converter: Arc<dyn ListConverter>,
    user_converter: Arc<dyn UserConverter>,
}

impl TodoResolver {
    pub fn new(
        client: Arc<dyn RestClient>,
        converter: Arc<dyn TodoConverter>,
        list_converter: Arc<dyn ListConverter>,
        user_converter: Arc<dyn UserConverter>,
    ) -> Self {
        Self {
            client,
            converter,
            list_converter,
            user_converter,
        }
    }

    pub async fn todos(&self) -> Result<Vec<Todo>, GatewayError> {
        let bytes = self.client.call(Method::Get, "/todos/user/all", None).await?;
        let todos: Vec<models::Todo> = decode(&bytes)?;
        self.converter.many_to_graphql(todos)
    }

    pub async fn todo(&self, id: &str) -> Result<Todo, GatewayError> {
        let bytes = self
            .client
            .call(Method::Get, &format!("/todos/{id}"), None)
            .await?;
        let todo: models::Todo = decode(&bytes)?;
        self.converter.to_graphql(todo)
    }

    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, GatewayError> {
        let payload = self.converter.from_create_input(input)?;
        let body = encode(&payload)?;
        let response = self
            .client
            .call(Method::Post, "/todos/create", Some(body))
            .await?;
        let id: String = decode(&response)?;
        self.todo(&id).await
    }

    pub async fn update_todo(
        &self,
        id: &str,
        input: UpdateTodoInput,
    ) -> Result<Todo, GatewayError> {
        let patch = self.converter.from_update_input(input)?;
        let body = encode(&patch)?;
        self.client
            .call(Method::Put, &format!("/todos/{id}"), Some(body))
            .await?;
        self.todo(id).await
    }

    /// GET-then-DELETE; see `UserResolver::delete_user` for the snapshot
    /// semantics.
    pub async fn delete_todo(&self, id: &str) -> Result<Todo, GatewayError> {
        let path = format!("/todos/{id}");
        let bytes = self.client.call(Method::Get, &path, None).await?;
        let todo: models::Todo = decode(&bytes)?;
        let snapshot = self.converter.to_graphql(todo)?;
        self.client.call(Method::Delete, &path, None).await?;
        Ok(snapshot)
    }

    /// Single-list lookup used by `Todo.list` field resolution.
    pub async fn get_list(&self, id: &str) -> Result<List, GatewayError> {
        let bytes = self
            .client
            .call(Method::Get, &format!("/lists/{id}"), None)
            .await?;
        let list: models::List = decode(&bytes)?;
        self.list_converter.to_graphql(list)
    }

    /// Single-user lookup used by `Todo.assignee` field resolution.
    pub async fn get_user(&self, id: &str) -> Result<User, GatewayError> {
        let bytes = self
            .client
            .call(Method::Get, &format!("/users/{id}"), None)
            .await?;
        let user: models::User = decode(&bytes)?;
        self.user_converter.to_graphql(user)
    }
}
