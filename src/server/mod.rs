//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the to-do API,
//! including API endpoints, business logic and data access. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, defaulting and entity-to-domain mapping
//! - **Data Layer** (`data/`) - Entity-shaped database operations
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Logging and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Request extractors and input validation helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request inside a `TraceLayer` request span
//! 2. **Controller** validates the request, converts DTOs to params, calls the service
//!    with the current span
//! 3. **Service** applies business rules and calls the repository
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
