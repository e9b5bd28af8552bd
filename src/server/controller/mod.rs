//! HTTP request handlers.
//!
//! Controllers validate transport input, convert DTOs into parameter models, call the
//! service layer and map its outcomes onto HTTP status codes.

pub mod todo_item;
