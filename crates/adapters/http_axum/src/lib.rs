//! # serbisyo-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON discovery API** the mobile clients call
//!   (`/api/services`, `/api/categories`, `/api/providers`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `serbisyo-app` (for the directory port and services) and
//! `serbisyo-domain` (for the types that cross the wire). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
