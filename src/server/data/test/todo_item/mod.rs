use crate::server::{data::todo_item::TodoItemRepository, error::AppError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveValue, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use tracing::Span;

mod get_all;

/// Fixed due date used where tests compare stored timestamps.
fn due_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}
