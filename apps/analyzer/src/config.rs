use anyhow::{ensure, Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;
/// One week.
const MAX_SESSION_TTL_MINUTES: i64 = 7 * 24 * 60;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for a multipart submission (resume PDF + job description).
    pub max_upload_bytes: usize,
    /// Sessions idle longer than this are dropped the next time one is created.
    /// Validated to lie in `1..=MAX_SESSION_TTL_MINUTES`.
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            session_ttl_minutes: validate_session_ttl(optional_env(
                "SESSION_TTL_MINUTES",
                DEFAULT_SESSION_TTL_MINUTES,
            )?)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn validate_session_ttl(minutes: i64) -> Result<i64> {
    ensure!(
        (1..=MAX_SESSION_TTL_MINUTES).contains(&minutes),
        "SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}, got {minutes}"
    );
    Ok(minutes)
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_accepts_default_and_bounds() {
        assert_eq!(validate_session_ttl(DEFAULT_SESSION_TTL_MINUTES).unwrap(), 60);
        assert_eq!(validate_session_ttl(1).unwrap(), 1);
        assert_eq!(
            validate_session_ttl(MAX_SESSION_TTL_MINUTES).unwrap(),
            MAX_SESSION_TTL_MINUTES
        );
    }

    #[test]
    fn test_session_ttl_rejects_non_positive() {
        assert!(validate_session_ttl(0).is_err());
        assert!(validate_session_ttl(-5).is_err());
    }

    #[test]
    fn test_session_ttl_rejects_out_of_range() {
        let err = validate_session_ttl(i64::MAX).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_MINUTES"));
        assert!(validate_session_ttl(MAX_SESSION_TTL_MINUTES + 1).is_err());
    }

    #[test]
    fn test_max_session_ttl_is_a_valid_duration() {
        let ttl = chrono::Duration::try_minutes(MAX_SESSION_TTL_MINUTES).unwrap();
        assert!(chrono::Utc::now().checked_sub_signed(ttl).is_some());
    }
}
