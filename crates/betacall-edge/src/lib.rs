//! Edge gateway for the BetaCall web client.
//!
//! This crate fronts every inbound request. It hosts the route gate — the
//! only component with routing/authorization policy — and the thin JSON
//! endpoints the sign-up, sign-in, and password-recovery flows call.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Browsers                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       betacall-edge                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │  Route gate │ │   Router    │ │   Auth / password   │   │
//! │  │ (middleware)│ │ + app shell │ │   handlers          │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌──────────────┐
//!                       │   BetaCall   │
//!                       │   user API   │
//!                       └──────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use betacall_auth::{AuthConfig, BetacallClient};
//! use betacall_edge::{create_router, EdgeConfig, EdgeState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = Arc::new(BetacallClient::new(AuthConfig::default()));
//! let state = EdgeState::new(backend, EdgeConfig::default());
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::EdgeConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::EdgeState;
