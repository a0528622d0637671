//! Pure domain logic for the luxdam asset catalog.
//!
//! This crate is synchronous and I/O-free so it can be used by the API
//! layer, the in-memory store, and any future CLI tooling without pulling
//! in a runtime.

pub mod asset;
pub mod error;
pub mod filter;
pub mod saved_search;
pub mod types;
