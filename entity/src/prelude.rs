pub use super::todo_item::Entity as TodoItem;
