//! Validation layer.
//!
//! # Data Flow
//! ```text
//! raw JSON payload (serde_json::Value)
//!     → schema.rs (one Schema impl per input record)
//!     → fields.rs (presence, type and range checks)
//!     → typed input, or ValidationFailure listing every bad field
//! ```
//!
//! # Design Decisions
//! - Walks the untyped payload instead of deriving `Deserialize`, so every
//!   offending field is reported, not just the first
//! - Pure: no logging or side effects, the HTTP layer reports failures
//! - `metadata` and `environment` are only checked for being objects

pub mod error;
mod fields;
pub mod schema;

pub use error::{FieldError, ValidationFailure};
pub use schema::{validate, Schema};
