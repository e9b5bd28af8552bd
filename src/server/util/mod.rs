//! Request extraction and input validation helpers shared by the server layers.

pub mod json;
pub mod path;
pub mod validate;
