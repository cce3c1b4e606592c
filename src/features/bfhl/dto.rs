use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Prime => "prime",
            Self::Lcm => "lcm",
            Self::Hcf => "hcf",
            Self::Ai => "AI",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "fibonacci" => Ok(Self::Fibonacci),
            "prime" => Ok(Self::Prime),
            "lcm" => Ok(Self::Lcm),
            "hcf" => Ok(Self::Hcf),
            "AI" => Ok(Self::Ai),
            other => Err(AppError::unknown_operation(other)),
        }
    }
}

/// A request body narrowed to its single operation key and value.
#[derive(Debug)]
pub struct OperationRequest {
    pub operation: Operation,
    pub value: Value,
}

impl TryFrom<Value> for OperationRequest {
    type Error = AppError;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = payload else {
            return Err(AppError::invalid_shape("request body must be a JSON object"));
        };

        if map.len() != 1 {
            return Err(AppError::invalid_shape(format!(
                "request body must contain exactly one key, found {}",
                map.len()
            )));
        }

        let Some((key, value)) = map.into_iter().next() else {
            return Err(AppError::invalid_shape("request body must contain exactly one key"));
        };

        Ok(Self {
            operation: key.parse()?,
            value,
        })
    }
}
