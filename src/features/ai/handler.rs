use serde_json::Value;

use crate::core::error::AppError;
use crate::features::ai::client::OneWordAnswerer;

pub async fn handle_ai(answerer: &dyn OneWordAnswerer, value: &Value) -> Result<Value, AppError> {
    let question = value
        .as_str()
        .ok_or_else(|| AppError::invalid_shape("AI expects a question string"))?
        .trim();

    // Reported as a server error, the same way a missing API key is.
    if question.is_empty() {
        return Err(AppError::internal("question must not be empty"));
    }

    let answer = answerer.answer(question).await?;
    Ok(Value::String(answer))
}
