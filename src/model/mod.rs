//! Transport models shared by the HTTP API.
//!
//! These DTOs define the JSON wire format of the API. The server converts them into
//! parameter models at the controller boundary and never hands them to the data layer.

pub mod api;
pub mod date;
pub mod todo_item;
