//! # Carlot Store
//!
//! SQLite persistence layer for the car inventory service.
//!
//! ## Features
//!
//! - Idempotent schema creation on open
//! - Single-statement list/insert/clear operations
//! - In-memory databases for tests

pub mod car;
pub mod error;
pub mod schema;
pub mod store;

pub use car::{Car, NewCar};
pub use error::StoreError;
pub use store::CarStore;
