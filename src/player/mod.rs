// Public API - what other modules can use
pub use handlers::{create_player, get_player};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
