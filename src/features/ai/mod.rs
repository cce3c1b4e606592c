pub mod client;
pub mod dto;
pub mod handler;
mod helpers;

pub use client::{GeminiClient, OneWordAnswerer};
pub use handler::handle_ai;
