//! Content client — the single point of entry for all content-lake reads.
//!
//! No other module may call the CMS HTTP API directly; every read goes
//! through [`ContentClient::run`] with a catalog entry from
//! [`queries`]. The client performs no retry and no caching: a failed
//! query surfaces to the caller, which decides whether the path is
//! critical (page identity) or degradable (lists, decoration).

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod fetch;
pub mod image;
pub mod models;
pub mod portable_text;
pub mod queries;

use self::queries::QuerySpec;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("query `{query}` does not take a parameter `{name}`")]
    UnknownParam { query: &'static str, name: String },

    #[error("query `{query}` requires parameter `{name}`")]
    MissingParam {
        query: &'static str,
        name: &'static str,
    },
}

/// Response envelope of the query endpoint.
#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    description: String,
}

/// Configured handle to the content lake. Built once at startup and shared
/// read-only across requests.
#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    project_id: String,
    dataset: String,
    api_version: String,
    use_cdn: bool,
}

impl ContentClient {
    pub fn new(project_id: &str, dataset: &str, api_version: &str, use_cdn: bool) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
            api_version: api_version.to_string(),
            use_cdn,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }

    /// Runs a catalog query with the given `$name` bindings.
    ///
    /// Returns `Ok(None)` when the query result is `null` — the not-found
    /// sentinel for single-document queries. List queries always get a
    /// JSON array back, so `None` only means "no result" there too and
    /// callers flatten it to empty.
    pub async fn run<T: DeserializeOwned>(
        &self,
        spec: &QuerySpec,
        params: &[(&str, Value)],
    ) -> Result<Option<T>, ContentError> {
        validate_params(spec, params)?;

        let mut query: Vec<(String, String)> =
            vec![("query".to_string(), spec.groq.to_string())];
        for (name, value) in params {
            query.push((format!("${name}"), value.to_string()));
        }

        let response = self
            .client
            .get(self.query_url())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.description)
                .unwrap_or(body);
            return Err(ContentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: QueryEnvelope<T> = response.json().await?;
        debug!(
            "content query `{}` succeeded (empty: {})",
            spec.name,
            envelope.result.is_none()
        );
        Ok(envelope.result)
    }
}

/// Rejects bindings the spec does not declare and declared names left
/// unbound, before anything goes on the wire.
fn validate_params(spec: &QuerySpec, params: &[(&str, Value)]) -> Result<(), ContentError> {
    for (name, _) in params {
        if !spec.params.contains(name) {
            return Err(ContentError::UnknownParam {
                query: spec.name,
                name: name.to_string(),
            });
        }
    }
    for required in spec.params {
        if !params.iter().any(|(name, _)| name == required) {
            return Err(ContentError::MissingParam {
                query: spec.name,
                name: required,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_params_accepts_exact_bindings() {
        assert!(validate_params(&queries::POST_BY_SLUG, &[("slug", json!("a"))]).is_ok());
        assert!(validate_params(&queries::ALL_POSTS, &[]).is_ok());
    }

    #[test]
    fn test_validate_params_rejects_unknown_name() {
        let err = validate_params(&queries::ALL_POSTS, &[("slug", json!("a"))]).unwrap_err();
        assert!(matches!(err, ContentError::UnknownParam { .. }));
    }

    #[test]
    fn test_validate_params_rejects_unbound_name() {
        let err = validate_params(&queries::POST_BY_SLUG, &[]).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingParam { name: "slug", .. }
        ));
    }

    #[test]
    fn test_query_url_switches_host_on_cdn_toggle() {
        let cdn = ContentClient::new("p1abc", "production", "2024-01-01", true);
        assert_eq!(
            cdn.query_url(),
            "https://p1abc.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
        let live = ContentClient::new("p1abc", "production", "2024-01-01", false);
        assert_eq!(
            live.query_url(),
            "https://p1abc.api.sanity.io/v2024-01-01/data/query/production"
        );
    }
}
