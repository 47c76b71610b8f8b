//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (endpoint table)
//!     → handler: validation → scoring backend → serialization
//!     → or fallback: JSON 404 / 405
//! ```
//!
//! # Design Decisions
//! - Routes fixed at startup, immutable at runtime
//! - Deterministic: same input always matches same endpoint

pub mod router;

pub use router::{routes, Endpoint};
