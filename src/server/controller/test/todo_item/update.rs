use super::*;

/// Tests updating an existing item.
///
/// Expected: 200 OK with fields persisted
#[tokio::test]
async fn updates_item() {
    let (db, app) = test_app(true).await;
    let item = factory::create_todo_item(&db).await.unwrap();

    let body = format!(
        r#"{{"id":{},"title":"Buy oat milk","dueDate":"2025-03-01T10:00:00Z","isCompleted":false}}"#,
        item.id
    );
    let response = app
        .oneshot(json_request("PUT", "/v1/todo", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let stored = entity::prelude::TodoItem::find_by_id(item.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "Buy oat milk");
    assert_eq!(
        stored.due_date,
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    );
    assert_eq!(stored.completed_date, None);
}

/// Tests updating an ID with no matching row.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found() {
    let (_db, app) = test_app(true).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/v1/todo/",
            r#"{"id":5,"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests request bodies that fail parsing or validation.
///
/// The table does not exist, so any body reaching the store would produce a 500.
///
/// Expected: 400 Bad Request for each
#[tokio::test]
async fn rejects_invalid_bodies() {
    let (_db, app) = test_app(false).await;

    let bodies = [
        r#"{"id":0,"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}"#,
        r#"{"id":-2,"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}"#,
        r#"{"id":1,"title":"no","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}"#,
        r#"{"id":1,"title":"    ","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}"#,
        r#"{"id":1,"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z"}"#,
        r#"{"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}"#,
    ];

    for body in bodies {
        let response = app
            .clone()
            .oneshot(json_request("PUT", "/v1/todo", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }
}

/// Tests a due date sent without a UTC offset.
///
/// Expected: 200 OK with the due date stored as the same wall-clock time in UTC
#[tokio::test]
async fn accepts_due_date_without_offset() {
    let (db, app) = test_app(true).await;
    let item = factory::create_todo_item(&db).await.unwrap();

    let body = format!(
        r#"{{"id":{},"title":"Buy milk","dueDate":"2025-03-01T10:00:00","isCompleted":false}}"#,
        item.id
    );
    let response = app
        .oneshot(json_request("PUT", "/v1/todo", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let stored = entity::prelude::TodoItem::find_by_id(item.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.due_date,
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    );
}

/// Tests that store failures on update are reported as 500.
///
/// Expected: 500 Internal Server Error with a generic `ErrorDto` body
#[tokio::test]
async fn returns_internal_error_on_store_failure() {
    let (_db, app) = test_app(false).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/v1/todo",
            r#"{"id":1,"title":"Buy milk","dueDate":"2025-01-01T00:00:00Z","isCompleted":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorDto = body_json(response).await;
    assert_eq!(error.error, "Internal server error");
}
