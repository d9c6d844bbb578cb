//! # serbisyo-domain
//!
//! Pure domain model for the serbisyo home-services platform.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **service catalog** — the fixed table of bookable services
//!   compiled into the binary — and its pure query functions (free-text
//!   search, category lookups)
//! - Define **geo primitives**: coordinates, Haversine great-circle
//!   distance, coordinate parsing, and human-readable distance rendering
//! - Define **providers** (directory entries) and the distance-based
//!   ordering used to present them nearest-first
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod catalog;
pub mod geo;
pub mod provider;
