use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, List, Todo, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- collections start empty ---

#[tokio::test]
async fn users_all_empty() {
    let resp = app().oneshot(get_request("/users/all")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn lists_user_all_empty() {
    let resp = app().oneshot(get_request("/lists/user/all")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let lists: Vec<List> = body_json(resp).await;
    assert!(lists.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_user_returns_bare_string_id() {
    let resp = app()
        .oneshot(json_request("POST", "/users/create", r#"{"Email":"victor@example.com"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let bytes = body_bytes(resp).await;
    // The body is a bare JSON string literal, not an object.
    let id: String = serde_json::from_slice(&bytes).unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn create_user_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/users/create", r#"{"not_email":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- missing ids ---

#[tokio::test]
async fn get_todo_not_found() {
    let resp = app().oneshot(get_request("/todos/does-not-exist")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_list_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/lists/does-not-exist", r#"{"Title":"Nope"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_user_not_found() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/does-not-exist")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle across entities ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create a user
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/users/create", r#"{"Email":"victor@example.com"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user_id: String = body_json(resp).await;

    // create a list
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/lists/create", r#"{"Title":"Groceries"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let list_id: String = body_json(resp).await;

    // create a todo linked to both
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/todos/create",
            &format!(r#"{{"Title":"Buy milk","ListID":"{list_id}","AssigneeID":"{user_id}"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo_id: String = body_json(resp).await;

    // get the todo — foreign keys survive
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/todos/{todo_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.list_id.as_deref(), Some(list_id.as_str()));
    assert_eq!(todo.assignee_id.as_deref(), Some(user_id.as_str()));

    // partial update — only the title changes
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/todos/{todo_id}"),
            r#"{"Title":"Buy oat milk"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Buy oat milk");
    assert_eq!(updated.list_id.as_deref(), Some(list_id.as_str()));

    // collection has the one todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos/user/all"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 1);

    // delete the todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/todos/{todo_id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/todos/{todo_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // user and list survive todo deletion
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/users/{user_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.email, "victor@example.com");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/lists/{list_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list: List = body_json(resp).await;
    assert_eq!(list.title, "Groceries");
}
