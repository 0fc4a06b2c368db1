use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the content-lake project id is strictly required at boot; the mail
/// credential is optional here because its absence is a per-request 500 on
/// the contact endpoint, not a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_use_cdn: bool,
    pub resend_api_key: Option<String>,
    /// `From:` identity on both outbound emails.
    pub contact_from: String,
    /// Studio inbox receiving the best-effort notification email.
    pub contact_notify: String,
    /// Canonical origin for metadata, JSON-LD ids and the sitemap.
    pub base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            sanity_project_id: require_env("SANITY_PROJECT_ID")?,
            sanity_dataset: env_or("SANITY_DATASET", "production"),
            sanity_api_version: env_or("SANITY_API_VERSION", "2024-01-01"),
            sanity_use_cdn: env_or("SANITY_USE_CDN", "true")
                .parse::<bool>()
                .context("SANITY_USE_CDN must be `true` or `false`")?,
            resend_api_key: std::env::var("RESEND_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            contact_from: env_or(
                "CONTACT_FROM_EMAIL",
                "Laurel & Pine Events <hello@laurelandpineevents.com>",
            ),
            contact_notify: env_or("CONTACT_NOTIFY_EMAIL", "inquiries@laurelandpineevents.com"),
            base_url: env_or("SITE_BASE_URL", "https://www.laurelandpineevents.com")
                .trim_end_matches('/')
                .to_string(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            sanity_project_id: "p1abc".to_string(),
            sanity_dataset: "production".to_string(),
            sanity_api_version: "2024-01-01".to_string(),
            sanity_use_cdn: true,
            resend_api_key: Some("re_test".to_string()),
            contact_from: "Laurel & Pine Events <hello@laurelandpineevents.com>".to_string(),
            contact_notify: "inquiries@laurelandpineevents.com".to_string(),
            base_url: "https://www.laurelandpineevents.com".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
