pub mod dto;
pub mod handler;
pub mod service;

pub use dto::Operation;
pub use handler::{
    handle_bfhl, handle_healthcheck, handle_method_not_allowed, handle_not_found,
};
pub use service::BfhlService;
