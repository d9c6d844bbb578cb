//! # serbisyo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProviderDirectory` — read access to the provider directory
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatalogService` — list, search, category and id lookups over the
//!     built-in service catalog
//!   - `ProviderService` — list, get, and nearest-first discovery of
//!     providers
//! - Orchestrate domain objects without knowing *how* IO works
//!
//! ## Dependency rule
//! Depends on `serbisyo-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
