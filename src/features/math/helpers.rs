use num_bigint::BigInt;
use num_traits::Zero;
use serde_json::{Number, Value};

use crate::core::error::AppError;

pub const MAX_FIBONACCI_COUNT: i64 = 1000;
pub const MAX_LIST_LENGTH: usize = 10_000;

/// Largest power of ten a JSON number may be scaled by before it is refused.
const MAX_DECIMAL_EXPONENT: i64 = 4096;

#[derive(Debug, PartialEq, Eq)]
enum IntegerError {
    NotInteger,
    TooLarge,
}

/// Reads a JSON number's exact decimal text as an integer.
///
/// Floats with no fractional part (`3.0`, `1.2e3`) are accepted without going
/// through `f64`, so no precision is lost.
fn as_integer(value: &Value) -> Result<BigInt, IntegerError> {
    let Value::Number(number) = value else {
        return Err(IntegerError::NotInteger);
    };
    parse_exact_integer(&number.to_string())
}

fn parse_exact_integer(text: &str) -> Result<BigInt, IntegerError> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => {
            let mantissa = &text[..index];
            match text[index + 1..].parse::<i64>() {
                Ok(exponent) => (mantissa, exponent),
                Err(_) if !mantissa.bytes().any(|byte| (b'1'..=b'9').contains(&byte)) => {
                    return Ok(BigInt::zero());
                }
                Err(_) if text[index + 1..].starts_with('-') => {
                    return Err(IntegerError::NotInteger);
                }
                Err(_) => return Err(IntegerError::TooLarge),
            }
        }
        None => (text, 0),
    };

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = format!("{whole}{fraction}");
    let scale = i64::try_from(fraction.len())
        .ok()
        .and_then(|len| exponent.checked_sub(len))
        .ok_or(IntegerError::TooLarge)?;

    if scale < 0 {
        let drop = usize::try_from(scale.unsigned_abs()).map_err(|_| IntegerError::TooLarge)?;
        let keep = digits.len().saturating_sub(drop);
        if digits[keep..].bytes().any(|byte| byte != b'0') {
            return Err(IntegerError::NotInteger);
        }
        digits.truncate(keep);
    } else if digits.bytes().any(|byte| byte != b'0') {
        if scale > MAX_DECIMAL_EXPONENT {
            return Err(IntegerError::TooLarge);
        }
        digits.extend(std::iter::repeat_n('0', scale as usize));
    }

    if digits.is_empty() {
        return Ok(BigInt::zero());
    }

    let magnitude = digits
        .parse::<BigInt>()
        .map_err(|_| IntegerError::NotInteger)?;
    Ok(if negative { -magnitude } else { magnitude })
}

pub fn parse_count(operation: &str, value: &Value) -> Result<usize, AppError> {
    let count = match as_integer(value) {
        Ok(count) => count,
        Err(IntegerError::NotInteger) => {
            return Err(AppError::invalid_shape(format!(
                "{operation} expects a single integer"
            )));
        }
        Err(IntegerError::TooLarge) => BigInt::from(MAX_FIBONACCI_COUNT + 1),
    };

    if count < BigInt::zero() || count > BigInt::from(MAX_FIBONACCI_COUNT) {
        return Err(AppError::out_of_range(format!(
            "{operation} must be between 0 and {MAX_FIBONACCI_COUNT}, got {value}"
        )));
    }

    usize::try_from(&count)
        .map_err(|err| AppError::internal(format!("failed to convert count: {err}")))
}

pub fn parse_integer_list(operation: &str, value: &Value) -> Result<Vec<BigInt>, AppError> {
    let items = value.as_array().ok_or_else(|| {
        AppError::invalid_shape(format!("{operation} expects an array of integers"))
    })?;

    if items.is_empty() || items.len() > MAX_LIST_LENGTH {
        return Err(AppError::out_of_range(format!(
            "{operation} expects between 1 and {MAX_LIST_LENGTH} integers, got {}",
            items.len()
        )));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            as_integer(item).map_err(|err| match err {
                IntegerError::NotInteger => AppError::invalid_element(format!(
                    "{operation} element at index {index} is not an integer: {item}"
                )),
                IntegerError::TooLarge => AppError::out_of_range(format!(
                    "{operation} element at index {index} is too large: {item}"
                )),
            })
        })
        .collect()
}

/// Narrows exact integers to `i64` for trial-division primality.
pub fn narrow_to_i64(operation: &str, values: &[BigInt]) -> Result<Vec<i64>, AppError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            i64::try_from(value).map_err(|_| {
                AppError::out_of_range(format!(
                    "{operation} element at index {index} exceeds the 64-bit integer range: {value}"
                ))
            })
        })
        .collect()
}

/// Renders an arbitrary-precision integer as an exact JSON number.
pub fn integer_to_json<T: ToString>(value: &T) -> Result<Value, AppError> {
    value
        .to_string()
        .parse::<Number>()
        .map(Value::Number)
        .map_err(|err| AppError::internal(format!("failed to encode integer: {err}")))
}
