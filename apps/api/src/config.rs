use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything is defaulted, so a bare `folio-api` starts with no .env.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on uploaded document size.
    pub max_upload_bytes: usize,
    /// Upper bound on raw text accepted by the direct extract endpoint.
    /// Bounding the input is the external safeguard against pathological
    /// regex input; the heuristic core itself has no limits.
    pub max_text_bytes: usize,
    pub extract_email: bool,
    pub extract_phone: bool,
    pub extract_socials: bool,
    pub extract_address: bool,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_TEXT_BYTES: usize = 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_parse("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            max_text_bytes: env_parse("MAX_TEXT_BYTES", DEFAULT_MAX_TEXT_BYTES)?,
            extract_email: env_parse("EXTRACT_EMAIL", true)?,
            extract_phone: env_parse("EXTRACT_PHONE", true)?,
            extract_socials: env_parse("EXTRACT_SOCIALS", true)?,
            extract_address: env_parse("EXTRACT_ADDRESS", true)?,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}
