//! HTTP Load-Testing Service
//!
//! A small load-testing utility built with Tokio and Axum: one endpoint that
//! fires a batch of GET requests at a target URL through a bounded worker
//! pool and reports the success/error split.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌───────────────────────────────────────────────┐
//!                   │                 LOAD TESTER                    │
//!                   │                                                │
//!   GET /test-url   │  ┌─────────┐     ┌───────────┐                │
//!   ────────────────┼─▶│  http   │────▶│ dispatch  │───┐            │
//!                   │  │ server  │     │   pool    │   │  N x GET   │
//!                   │  └─────────┘     └─────┬─────┘   ├────────────┼───▶ Target
//!                   │                        │         │            │     URL
//!   "Success: N,    │                  ┌─────▼─────┐   │            │
//!   Errors: M"      │                  │   tally   │◀──┘            │
//!   ◀───────────────┼──────────────────│ (fan-in)  │                │
//!                   │                  └───────────┘                │
//!                   │                                                │
//!                   │  ┌──────────────────────────────────────────┐ │
//!                   │  │        Cross-Cutting Concerns             │ │
//!                   │  │  ┌────────┐ ┌───────────┐ ┌───────────┐  │ │
//!                   │  │  │ config │ │ lifecycle │ │  tracing  │  │ │
//!                   │  │  └────────┘ └───────────┘ └───────────┘  │ │
//!                   │  └──────────────────────────────────────────┘ │
//!                   └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod dispatch;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::AppConfig;
pub use dispatch::{Dispatcher, Tally};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
