use std::sync::Arc;

use serde_json::Value;
use tokio::task;

use crate::core::error::AppError;
use crate::features::ai::{OneWordAnswerer, handle_ai};
use crate::features::bfhl::dto::{Operation, OperationRequest};
use crate::features::math::{handle_fibonacci, handle_hcf, handle_lcm, handle_prime};

pub struct BfhlService {
    answerer: Arc<dyn OneWordAnswerer>,
}

impl BfhlService {
    pub fn new(answerer: Arc<dyn OneWordAnswerer>) -> Self {
        Self { answerer }
    }

    pub async fn dispatch(&self, payload: Value) -> Result<Value, AppError> {
        let OperationRequest { operation, value } = OperationRequest::try_from(payload)?;
        tracing::info!(%operation, "dispatching operation");

        let compute: fn(&Value) -> Result<Value, AppError> = match operation {
            Operation::Fibonacci => handle_fibonacci,
            Operation::Prime => handle_prime,
            Operation::Lcm => handle_lcm,
            Operation::Hcf => handle_hcf,
            Operation::Ai => return handle_ai(self.answerer.as_ref(), &value).await,
        };

        // Arithmetic is CPU-bound; keep it off the async workers.
        task::spawn_blocking(move || compute(&value))
            .await
            .map_err(|err| AppError::internal(format!("{operation} task failed: {err}")))?
    }
}
