//! In-memory stand-in for the todoservice REST API.
//!
//! Implements the wire protocol the gateway consumes: PascalCase JSON
//! documents, collection endpoints at `/users/all` (user-scoped variants at
//! `/lists/user/all` and `/todos/user/all`), create endpoints that respond
//! `201` with the new ID as a bare JSON string, partial PUT where omitted
//! fields remain unchanged, `204` DELETE, and `404` for missing IDs.
//! Used by the gateway's integration tests and runnable standalone.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Email")]
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateUser {
    #[serde(rename = "Email")]
    pub email: String,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    #[serde(rename = "Email")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
}

#[derive(Deserialize)]
pub struct CreateList {
    #[serde(rename = "Title")]
    pub title: String,
}

#[derive(Deserialize)]
pub struct UpdateList {
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Deserialize)]
pub struct CreateTodo {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ListID", default)]
    pub list_id: Option<String>,
    #[serde(rename = "AssigneeID", default)]
    pub assignee_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "ListID")]
    pub list_id: Option<String>,
    #[serde(rename = "AssigneeID")]
    pub assignee_id: Option<String>,
}

pub type Db<T> = Arc<RwLock<HashMap<String, T>>>;

#[derive(Clone, Default)]
pub struct Stores {
    users: Db<User>,
    lists: Db<List>,
    todos: Db<Todo>,
}

pub fn app() -> Router {
    Router::new()
        .route("/users/all", get(list_users))
        .route("/users/create", post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/lists/user/all", get(list_lists))
        .route("/lists/create", post(create_list))
        .route("/lists/{id}", get(get_list).put(update_list).delete(delete_list))
        .route("/todos/user/all", get(list_todos))
        .route("/todos/create", post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(Stores::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// --- users ---

async fn list_users(State(stores): State<Stores>) -> Json<Vec<User>> {
    let users = stores.users.read().await;
    Json(users.values().cloned().collect())
}

async fn get_user(
    State(stores): State<Stores>,
    Path(id): Path<String>,
) -> Result<Json<User>, StatusCode> {
    let users = stores.users.read().await;
    users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_user(
    State(stores): State<Stores>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<String>) {
    let user = User {
        id: new_id(),
        email: input.email,
    };
    let id = user.id.clone();
    stores.users.write().await.insert(id.clone(), user);
    (StatusCode::CREATED, Json(id))
}

async fn update_user(
    State(stores): State<Stores>,
    Path(id): Path<String>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<User>, StatusCode> {
    let mut users = stores.users.write().await;
    let user = users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(email) = input.email {
        user.email = email;
    }
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(stores): State<Stores>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut users = stores.users.write().await;
    users.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

// --- lists ---

async fn list_lists(State(stores): State<Stores>) -> Json<Vec<List>> {
    let lists = stores.lists.read().await;
    Json(lists.values().cloned().collect())
}

async fn get_list(
    State(stores): State<Stores>,
    Path(id): Path<String>,
) -> Result<Json<List>, StatusCode> {
    let lists = stores.lists.read().await;
    lists.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_list(
    State(stores): State<Stores>,
    Json(input): Json<CreateList>,
) -> (StatusCode, Json<String>) {
    let list = List {
        id: new_id(),
        title: input.title,
    };
    let id = list.id.clone();
    stores.lists.write().await.insert(id.clone(), list);
    (StatusCode::CREATED, Json(id))
}

async fn update_list(
    State(stores): State<Stores>,
    Path(id): Path<String>,
    Json(input): Json<UpdateList>,
) -> Result<Json<List>, StatusCode> {
    let mut lists = stores.lists.write().await;
    let list = lists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        list.title = title;
    }
    Ok(Json(list.clone()))
}

async fn delete_list(
    State(stores): State<Stores>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut lists = stores.lists.write().await;
    lists.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

// --- todos ---

async fn list_todos(State(stores): State<Stores>) -> Json<Vec<Todo>> {
    let todos = stores.todos.read().await;
    Json(todos.values().cloned().collect())
}

async fn get_todo(
    State(stores): State<Stores>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = stores.todos.read().await;
    todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_todo(
    State(stores): State<Stores>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<String>) {
    let todo = Todo {
        id: new_id(),
        title: input.title,
        list_id: input.list_id,
        assignee_id: input.assignee_id,
    };
    let id = todo.id.clone();
    stores.todos.write().await.insert(id.clone(), todo);
    (StatusCode::CREATED, Json(id))
}

async fn update_todo(
    State(stores): State<Stores>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = stores.todos.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(list_id) = input.list_id {
        todo.list_id = Some(list_id);
    }
    if let Some(assignee_id) = input.assignee_id {
        todo.assignee_id = Some(assignee_id);
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(stores): State<Stores>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = stores.todos.write().await;
    todos.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
