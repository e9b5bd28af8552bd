use crate::server::{
    error::AppError,
    model::todo_item::{CreateTodoItemParams, UpdateTodoItemParams},
    service::todo_item::TodoItemService,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use tracing::Span;

mod update;

fn due_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn update_params(id: i32, is_completed: bool) -> UpdateTodoItemParams {
    UpdateTodoItemParams {
        id,
        title: "Buy milk".to_string(),
        due_date: due_date(),
        is_completed,
    }
}
