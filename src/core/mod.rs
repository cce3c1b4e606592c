pub mod envelope;
pub mod error;
pub mod http_client;
