use super::*;

/// Walks an item through create, list, complete and fetch over HTTP.
///
/// Expected: completed item reports `isCompleted: true` and a `completedDate`
#[tokio::test]
async fn create_list_complete_fetch() {
    let (_db, app) = test_app(true).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/todo/",
            r#"{"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/v1/todo/all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<TodoItemDto> = body_json(response).await;
    let item = items.iter().find(|i| i.title == "Buy milk").unwrap();
    assert_eq!(item.is_completed, Some(false));
    assert_eq!(item.completed_date, None);

    let body = format!(
        r#"{{"id":{},"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}}"#,
        item.id
    );
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/v1/todo/", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request("GET", &format!("/v1/todo/{}", item.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: TodoItemDto = body_json(response).await;
    assert_eq!(fetched.is_completed, Some(true));
    assert!(fetched.completed_date.is_some());
    assert_eq!(fetched.created_date, item.created_date);
}
