use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::math::helpers::{
    integer_to_json, narrow_to_i64, parse_count, parse_integer_list,
};
use crate::features::math::service::{fibonacci, hcf, lcm, primes};

pub fn handle_fibonacci(value: &Value) -> Result<Value, AppError> {
    let count = parse_count("fibonacci", value)?;
    let sequence = fibonacci(count)
        .iter()
        .map(integer_to_json)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Array(sequence))
}

pub fn handle_prime(value: &Value) -> Result<Value, AppError> {
    let values = parse_integer_list("prime", value)?;
    let values = narrow_to_i64("prime", &values)?;
    Ok(json!(primes(&values)))
}

pub fn handle_lcm(value: &Value) -> Result<Value, AppError> {
    let values = parse_integer_list("lcm", value)?;
    integer_to_json(&lcm(&values))
}

pub fn handle_hcf(value: &Value) -> Result<Value, AppError> {
    let values = parse_integer_list("hcf", value)?;
    let result = hcf(&values)
        .ok_or_else(|| AppError::out_of_range("hcf expects at least one integer"))?;
    integer_to_json(&result)
}
