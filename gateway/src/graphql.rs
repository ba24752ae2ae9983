//! GraphQL object and input types exposed by the gateway.
//!
//! `Todo` carries its foreign keys as skipped fields; the `list` and
//! `assignee` fields resolve lazily through the todo resolver with a
//! follow-up GET only when the corresponding ID is present.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};

use crate::resolvers::TodoResolver;

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct User {
    pub id: ID,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct List {
    pub id: ID,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct Todo {
    pub id: ID,
    pub title: String,
    #[graphql(skip)]
    pub list_id: Option<String>,
    #[graphql(skip)]
    pub assignee_id: Option<String>,
}

#[ComplexObject]
impl Todo {
    /// The list this todo belongs to, if any.
    async fn list(&self, ctx: &Context<'_>) -> Result<Option<List>> {
        match &self.list_id {
            Some(id) => {
                let resolver = ctx.data_unchecked::<Arc<TodoResolver>>();
                Ok(Some(resolver.get_list(id).await?))
            }
            None => Ok(None),
        }
    }

    /// The user this todo is assigned to, if any.
    async fn assignee(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        match &self.assignee_id {
            Some(id) => {
                let resolver = ctx.data_unchecked::<Arc<TodoResolver>>();
                Ok(Some(resolver.get_user(id).await?))
            }
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    pub email: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateUserInput {
    pub email: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct CreateListInput {
    pub name: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateListInput {
    pub name: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct CreateTodoInput {
    pub title: String,
    pub list_id: Option<ID>,
    pub assignee_id: Option<ID>,
}

#[derive(Debug, Clone, InputObject)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub list_id: Option<ID>,
    pub assignee_id: Option<ID>,
}
