pub mod dto;
pub mod loader;

pub use dto::{AppConfig, GeminiConfig};
pub use loader::load_config;
