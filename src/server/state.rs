use std::sync::Arc;

use crate::features::bfhl::BfhlService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BfhlService>,
}

impl AppState {
    pub fn new(service: Arc<BfhlService>) -> Self {
        Self { service }
    }
}
