//! # lumen-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose the control surface as a small JSON API
//!   (`/api/roster/query`, `/api/devices`, `/api/devices/{name}/commands`)
//! - Enforce the slider bounds on incoming values before they reach the
//!   dispatcher
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `lumen-app` (for port traits and the control surface) and
//! `lumen-domain` (for request/response types). Never leaks axum types into
//! the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
