//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models in the service layer and transformed
//! to DTOs at the controller boundary. Parameter types carry validated request data from
//! controllers into services.

pub mod todo_item;
