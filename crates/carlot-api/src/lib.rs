//! # Carlot API
//!
//! HTTP interface layer for the car inventory service.
//!
//! Control flow is a straight line: HTTP request → route handler → single
//! parameterized SQL statement via [`carlot_store::CarStore`] → JSON
//! response. Each request is stateless and independent; the only shared
//! in-process state is the storage handle inside [`AppState`], constructed
//! once at startup and injected into the router.

pub mod error;
pub mod extract;
pub mod http;
pub mod server;
pub mod state;

// Re-export core types
pub use error::ApiError;
pub use extract::JsonOrForm;
pub use http::{
    handlers::{CarsResponse, ClearResponse, CreateCarRequest},
    routes::create_router,
};
pub use server::{CarServer, ServerConfig};
pub use state::AppState;
