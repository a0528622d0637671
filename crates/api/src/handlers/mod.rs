pub mod assets;
pub mod saved_searches;
