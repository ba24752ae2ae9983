//! Converters between REST wire models and GraphQL types.
//!
//! # Design
//! One capability trait per entity, with convert-one, convert-many, and the
//! two input directions. Converters are pure and stateless; resolvers hold
//! them behind `Arc<dyn ...>` so tests can substitute failing or panicking
//! doubles and pin down exactly when the conversion boundary is crossed.
//!
//! The defaults validate lightly: a document without an ID is malformed, a
//! user needs a plausible email, create inputs need a non-empty title, and an
//! update input with every field absent has nothing to send.

use async_graphql::ID;

use crate::error::GatewayError;
use crate::graphql;
use crate::models;

pub trait UserConverter: Send + Sync {
    fn to_graphql(&self, user: models::User) -> Result<graphql::User, GatewayError>;
    fn many_to_graphql(&self, users: Vec<models::User>) -> Result<Vec<graphql::User>, GatewayError>;
    fn from_create_input(
        &self,
        input: graphql::CreateUserInput,
    ) -> Result<models::CreateUser, GatewayError>;
    fn from_update_input(
        &self,
        input: graphql::UpdateUserInput,
    ) -> Result<models::UpdateUser, GatewayError>;
}

pub trait ListConverter: Send + Sync {
    fn to_graphql(&self, list: models::List) -> Result<graphql::List, GatewayError>;
    fn many_to_graphql(&self, lists: Vec<models::List>) -> Result<Vec<graphql::List>, GatewayError>;
    fn from_create_input(
        &self,
        input: graphql::CreateListInput,
    ) -> Result<models::CreateList, GatewayError>;
    fn from_update_input(
        &self,
        input: graphql::UpdateListInput,
    ) -> Result<models::UpdateList, GatewayError>;
}

pub trait TodoConverter: Send + Sync {
    fn to_graphql(&self, todo: models::Todo) -> Result<graphql::Todo, GatewayError>;
    fn many_to_graphql(&self, todos: Vec<models::Todo>) -> Result<Vec<graphql::Todo>, GatewayError>;
    fn from_create_input(
        &self,
        input: graphql::CreateTodoInput,
    ) -> Result<models::CreateTodo, GatewayError>;
    fn from_update_input(
        &self,
        input: graphql::UpdateTodoInput,
    ) -> Result<models::UpdateTodo, GatewayError>;
}

fn require_id(id: &str, entity: &str) -> Result<(), GatewayError> {
    if id.is_empty() {
        return Err(GatewayError::Convert(format!("{entity} document has no ID")));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct DefaultUserConverter;

impl UserConverter for DefaultUserConverter {
    fn to_graphql(&self, user: models::User) -> Result<graphql::User, GatewayError> {
        require_id(&user.id, "user")?;
        Ok(graphql::User {
            id: ID(user.id),
            email: user.email,
        })
    }

    fn many_to_graphql(&self, users: Vec<models::User>) -> Result<Vec<graphql::User>, GatewayError> {
        users.into_iter().map(|u| self.to_graphql(u)).collect()
    }

    fn from_create_input(
        &self,
        input: graphql::CreateUserInput,
    ) -> Result<models::CreateUser, GatewayError> {
        if input.email.is_empty() || !input.email.contains('@') {
            return Err(GatewayError::Convert(format!(
                "invalid email: {:?}",
                input.email
            )));
        }
        Ok(models::CreateUser { email: input.email })
    }

    fn from_update_input(
        &self,
        input: graphql::UpdateUserInput,
    ) -> Result<models::UpdateUser, GatewayError> {
        if input.email.is_none() {
            return Err(GatewayError::Convert("nothing to update".to_string()));
        }
        Ok(models::UpdateUser { email: input.email })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefaultListConverter;

impl ListConverter for DefaultListConverter {
    fn to_graphql(&self, list: models::List) -> Result<graphql::List, GatewayError> {
        require_id(&list.id, "list")?;
        // Wire name `Title` becomes the GraphQL `name` field.
        Ok(graphql::List {
            id: ID(list.id),
            name: list.title,
        })
    }

    fn many_to_graphql(&self, lists: Vec<models::List>) -> Result<Vec<graphql::List>, GatewayError> {
        lists.into_iter().map(|l| self.to_graphql(l)).collect()
    }

    fn from_create_input(
        &self,
        input: graphql::CreateListInput,
    ) -> Result<models::CreateList, GatewayError> {
        if input.name.is_empty() {
            return Err(GatewayError::Convert("list name must not be empty".to_string()));
        }
        Ok(models::CreateList { title: input.name })
    }

    fn from_update_input(
        &self,
        input: graphql::UpdateListInput,
    ) -> Result<models::UpdateList, GatewayError> {
        if input.name.is_none() {
            return Err(GatewayError::Convert("nothing to update".to_string()));
        }
        Ok(models::UpdateList { title: input.name })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefaultTodoConverter;

impl TodoConverter for DefaultTodoConverter {
    fn to_graphql(&self, todo: models::Todo) -> Result<graphql::Todo, GatewayError> {
        require_id(&todo.id, "todo")?;
        Ok(graphql::Todo {
            id: ID(todo.id),
            title: todo.title,
            list_id: todo.list_id,
            assignee_id: todo.assignee_id,
        })
    }

    fn many_to_graphql(&self, todos: Vec<models::Todo>) -> Result<Vec<graphql::Todo>, GatewayError> {
        todos.into_iter().map(|t| self.to_graphql(t)).collect()
    }

    fn from_create_input(
        &self,
        input: graphql::CreateTodoInput,
    ) -> Result<models::CreateTodo, GatewayError> {
        if input.title.is_empty() {
            return Err(GatewayError::Convert("todo title must not be empty".to_string()));
        }
        Ok(models::CreateTodo {
            title: input.title,
            list_id: input.list_id.map(|id| id.0),
            assignee_id: input.assignee_id.map(|id| id.0),
        })
    }

    fn from_update_input(
        &self,
        input: graphql::UpdateTodoInput,
    ) -> Result<models::UpdateTodo, GatewayError> {
        if input.title.is_none() && input.list_id.is_none() && input.assignee_id.is_none() {
            return Err(GatewayError::Convert("nothing to update".to_string()));
        }
        Ok(models::UpdateTodo {
            title: input.title,
            list_id: input.list_id.map(|id| id.0),
            assignee_id: input.assignee_id.map(|id| id.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_title_maps_to_name() {
        let list = DefaultListConverter
            .to_graphql(models::List {
                id: "1".to_string(),
                title: "Test List".to_string(),
            })
            .unwrap();
        assert_eq!(list.id, ID("1".to_string()));
        assert_eq!(list.name, "Test List");
    }

    #[test]
    fn many_lists_map_in_order() {
        let lists = DefaultListConverter
            .many_to_graphql(vec![
                models::List { id: "1".to_string(), title: "a".to_string() },
                models::List { id: "2".to_string(), title: "b".to_string() },
            ])
            .unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[1].name, "b");
    }

    #[test]
    fn document_without_id_is_rejected() {
        let err = DefaultUserConverter
            .to_graphql(models::User {
                id: String::new(),
                email: "victor@example.com".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, GatewayError::Convert(_)));
    }

    #[test]
    fn bad_id_in_collection_fails_whole_conversion() {
        let err = DefaultTodoConverter
            .many_to_graphql(vec![
                models::Todo {
                    id: "1".to_string(),
                    title: "ok".to_string(),
                    list_id: None,
                    assignee_id: None,
                },
                models::Todo {
                    id: String::new(),
                    title: "bad".to_string(),
                    list_id: None,
                    assignee_id: None,
                },
            ])
            .unwrap_err();
        assert!(matches!(err, GatewayError::Convert(_)));
    }

    #[test]
    fn create_user_requires_plausible_email() {
        let err = DefaultUserConverter
            .from_create_input(graphql::CreateUserInput {
                email: "not-an-email".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, GatewayError::Convert(_)));

        let payload = DefaultUserConverter
            .from_create_input(graphql::CreateUserInput {
                email: "victor@example.com".to_string(),
            })
            .unwrap();
        assert_eq!(payload.email, "victor@example.com");
    }

    #[test]
    fn empty_update_input_is_rejected() {
        let err = DefaultTodoConverter
            .from_update_input(graphql::UpdateTodoInput {
                title: None,
                list_id: None,
                assignee_id: None,
            })
            .unwrap_err();
        assert!(matches!(err, GatewayError::Convert(_)));
    }

    #[test]
    fn todo_input_ids_unwrap_to_strings() {
        let payload = DefaultTodoConverter
            .from_create_input(graphql::CreateTodoInput {
                title: "New Todo".to_string(),
                list_id: Some(ID("9".to_string())),
                assignee_id: None,
            })
            .unwrap();
        assert_eq!(payload.list_id.as_deref(), Some("9"));
        assert!(payload.assignee_id.is_none());
    }
}
