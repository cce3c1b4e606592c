use std::env;

use crate::config::dto::{AppConfig, GeminiConfig};
use crate::core::error::AppError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = match env::var("PORT") {
        Ok(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid PORT '{value}': {err}")))?,
        Err(_) => DEFAULT_PORT,
    };

    let disable_proxy = parse_bool_env("DISABLE_PROXY", false);

    // The key is optional at startup; the AI operation reports its absence per request.
    let api_key = env::var("GEMINI_API_KEY")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    let model = parse_string_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let api_base = parse_string_env("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE);

    Ok(AppConfig {
        port,
        disable_proxy,
        gemini: GeminiConfig {
            api_key,
            model,
            api_base,
        },
    })
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

fn parse_string_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
