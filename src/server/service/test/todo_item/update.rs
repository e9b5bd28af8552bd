use super::*;

/// Tests completing an item stamps the completion date.
///
/// Expected: Ok(true) with completion date set to the update time
#[tokio::test]
async fn completing_sets_completed_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_todo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_todo_item(db).await?;

    let span = Span::none();
    let service = TodoItemService::new(db, &span);
    let before = Utc::now() - Duration::seconds(1);
    let result = service.update(update_params(item.id, true)).await;
    let after = Utc::now() + Duration::seconds(1);

    assert!(matches!(result, Ok(true)));

    let updated = service.get_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(updated.title, "Buy milk");
    assert_eq!(updated.due_date, due_date());
    assert_eq!(updated.is_completed, Some(true));
    let completed_date = updated.completed_date.unwrap();
    assert!(completed_date >= before && completed_date <= after);

    Ok(())
}

/// Tests marking an item incomplete keeps its previous completion date.
///
/// Expected: Ok(true) with completion date unchanged
#[tokio::test]
async fn uncompleting_keeps_completed_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_todo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let completed_at = Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap();
    let item = factory::todo_item::TodoItemFactory::new(db)
        .completed_at(completed_at)
        .build()
        .await?;

    let span = Span::none();
    let service = TodoItemService::new(db, &span);
    let result = service.update(update_params(item.id, false)).await;

    assert!(matches!(result, Ok(true)));

    let updated = service.get_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(updated.is_completed, Some(false));
    assert_eq!(updated.completed_date, Some(completed_at));

    Ok(())
}

/// Tests updating an incomplete item without completing it leaves the date unset.
///
/// Expected: Ok(true) with no completion date
#[tokio::test]
async fn incomplete_update_leaves_completed_date_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_todo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_todo_item(db).await?;

    let span = Span::none();
    let service = TodoItemService::new(db, &span);
    service.update(update_params(item.id, false)).await.unwrap();

    let updated = service.get_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(updated.completed_date, None);
    assert_eq!(updated.created_date, item.created_date);

    Ok(())
}

/// Tests updating an ID with no matching row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_todo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let span = Span::none();
    let service = TodoItemService::new(db, &span);

    assert!(matches!(
        service.update(update_params(404, true)).await,
        Ok(false)
    ));

    Ok(())
}

/// Tests invalid IDs and blank titles are rejected without touching the store.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn rejects_invalid_params() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let span = Span::none();
    let service = TodoItemService::new(db, &span);

    assert!(matches!(
        service.update(update_params(0, true)).await,
        Err(AppError::InvalidArgument(_))
    ));

    let mut blank = update_params(1, true);
    blank.title = " ".to_string();
    assert!(matches!(
        service.update(blank).await,
        Err(AppError::InvalidArgument(_))
    ));

    Ok(())
}
