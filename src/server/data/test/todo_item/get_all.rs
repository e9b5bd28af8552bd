use super::*;

/// Tests retrieving items from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_vec_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_todo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let span = Span::none();
    let repo = TodoItemRepository::new(db, &span);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Tests retrieving every stored item.
///
/// Expected: Ok with all three items
#[tokio::test]
async fn returns_all_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_todo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::helpers::create_todo_items(db, 3).await?;

    let span = Span::none();
    let repo = TodoItemRepository::new(db, &span);
    let items = repo.get_all().await.unwrap();

    assert_eq!(items.len(), 3);
    for item in &created {
        assert!(items.iter().any(|i| i.id == item.id && i.title == item.title));
    }

    Ok(())
}

/// Tests that a store failure is propagated as a database error.
///
/// The table is never created so the select fails.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn propagates_store_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let span = Span::none();
    let repo = TodoItemRepository::new(db, &span);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
