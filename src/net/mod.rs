//! Network layer subsystem.
//!
//! Plain TCP listeners come straight from tokio; this module only covers
//! the optional TLS setup handed to `axum-server`.

pub mod tls;
