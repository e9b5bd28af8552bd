//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` to-do items with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of items to insert
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created entities in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_todo_items(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::todo_item::Model>, DbErr> {
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(crate::factory::todo_item::create_todo_item(db).await?);
    }
    Ok(items)
}
