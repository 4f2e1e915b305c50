// Public API - what other modules can use
pub use handlers::{create_game, get_game};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
