//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, JSON body extraction)
//!     → handlers.rs (validate, dispatch to scoring backend)
//!     → response.rs (serialize result, set content type)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{Payload, X_REQUEST_ID};
pub use server::{AppState, HttpServer, X_SCORING_BACKEND};
