//! GraphQL schema assembly.
//!
//! Per-entity query/mutation objects are merged into the root `Query` and
//! `Mutation` types; resolvers are wired through schema data so the generated
//! fields stay one-line delegations.

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, MergedObject, Object, Result, Schema, ID};

use crate::client::RestClient;
use crate::convert::{DefaultListConverter, DefaultTodoConverter, DefaultUserConverter};
use crate::graphql::{
    CreateListInput, CreateTodoInput, CreateUserInput, List, Todo, UpdateListInput,
    UpdateTodoInput, UpdateUserInput, User,
};
use crate::resolvers::{ListResolver, TodoResolver, UserResolver};

pub type GatewaySchema = Schema<Query, Mutation, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct Query(UserQuery, ListQuery, TodoQuery);

#[derive(MergedObject, Default)]
pub struct Mutation(UserMutation, ListMutation, TodoMutation);

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        Ok(ctx.data_unchecked::<Arc<UserResolver>>().users().await?)
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        Ok(ctx.data_unchecked::<Arc<UserResolver>>().user(&id).await?)
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<User> {
        Ok(ctx
            .data_unchecked::<Arc<UserResolver>>()
            .create_user(input)
            .await?)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateUserInput,
    ) -> Result<User> {
        Ok(ctx
            .data_unchecked::<Arc<UserResolver>>()
            .update_user(&id, input)
            .await?)
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        Ok(ctx
            .data_unchecked::<Arc<UserResolver>>()
            .delete_user(&id)
            .await?)
    }
}

#[derive(Default)]
pub struct ListQuery;

#[Object]
impl ListQuery {
    async fn lists(&self, ctx: &Context<'_>) -> Result<Vec<List>> {
        Ok(ctx.data_unchecked::<Arc<ListResolver>>().lists().await?)
    }

    async fn list(&self, ctx: &Context<'_>, id: ID) -> Result<List> {
        Ok(ctx.data_unchecked::<Arc<ListResolver>>().list(&id).await?)
    }
}

#[derive(Default)]
pub struct ListMutation;

#[Object]
impl ListMutation {
    async fn create_list(&self, ctx: &Context<'_>, input: CreateListInput) -> Result<List> {
        Ok(ctx
            .data_unchecked::<Arc<ListResolver>>()
            .create_list(input)
            .await?)
    }

    async fn update_list(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateListInput,
    ) -> Result<List> {
        Ok(ctx
            .data_unchecked::<Arc<ListResolver>>()
            .update_list(&id, input)
            .await?)
    }

    async fn delete_list(&self, ctx: &Context<'_>, id: ID) -> Result<List> {
        Ok(ctx
            .data_unchecked::<Arc<ListResolver>>()
            .delete_list(&id)
            .await?)
    }
}

#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<Todo>> {
        Ok(ctx.data_unchecked::<Arc<TodoResolver>>().todos().await?)
    }

    async fn todo(&self, ctx: &Context<'_>, id: ID) -> Result<Todo> {
        Ok(ctx.data_unchecked::<Arc<TodoResolver>>().todo(&id).await?)
    }
}

#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    async fn create_todo(&self, ctx: &Context<'_>, input: CreateTodoInput) -> Result<Todo> {
        Ok(ctx
            .data_unchecked::<Arc<TodoResolver>>()
            .create_todo(input)
            .await?)
    }

    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateTodoInput,
    ) -> Result<Todo> {
        Ok(ctx
            .data_unchecked::<Arc<TodoResolver>>()
            .update_todo(&id, input)
            .await?)
    }

    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> Result<Todo> {
        Ok(ctx
            .data_unchecked::<Arc<TodoResolver>>()
            .delete_todo(&id)
            .await?)
    }
}

/// Builds the schema with the default converters wired into one resolver per
/// entity, all sharing `client`.
pub fn build_schema(client: Arc<dyn RestClient>) -> GatewaySchema {
    let user = Arc::new(UserResolver::new(
        client.clone(),
        Arc::new(DefaultUserConverter),
    ));
    let list = Arc::new(ListResolver::new(
        client.clone(),
        Arc::new(DefaultListConverter),
    ));
    let todo = Arc::new(TodoResolver::new(
        client,
        Arc::new(DefaultTodoConverter),
        Arc::new(DefaultListConverter),
        Arc::new(DefaultUserConverter),
    ));

    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(Tracing)
        .data(user)
        .data(list)
        .data(todo)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::client::HttpRestClient;

    #[test]
    fn schema_exposes_expected_operations() {
        let schema = build_schema(Arc::new(HttpRestClient::new("http://localhost:3000")));
        let sdl = schema.sdl();
        for field in [
            "users", "user", "lists", "list", "todos", "todo",
            "createUser", "updateUser", "deleteUser",
            "createList", "updateList", "deleteList",
            "createTodo", "updateTodo", "deleteTodo",
        ] {
            assert!(sdl.contains(field), "SDL missing {field}");
        }
    }
}
