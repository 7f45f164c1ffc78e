//! HTTP front-end subsystem.
//!
//! # Data Flow
//! ```text
//! GET /test-url?url=...&threads=...&concurrent=...
//!     → server.rs (Axum setup, trace layer)
//!     → handlers.rs (parse & validate query parameters)
//!     → dispatch pool runs the batch
//!     → plain-text tally sent to the client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
