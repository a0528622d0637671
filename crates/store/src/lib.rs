//! In-memory stores for the luxdam service.
//!
//! The original admin panel owns all of its state in client memory; this
//! crate keeps that ownership model on the server side. Each store wraps
//! its table in a `tokio::sync::RwLock` so handlers take read locks for
//! queries and write locks for mutations. Nothing survives a restart.

pub mod assets;
pub mod models;
pub mod saved_searches;
pub mod seed;

pub use assets::AssetStore;
pub use saved_searches::SavedSearchStore;
