use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::routes::RouteDescriptor;

/// Shareable HTTP client for the upstream book-catalog API
///
/// Wraps a single `reqwest::Client` so connection reuse across requests comes
/// from its internal pool. The base URL is fixed at construction time from
/// configuration.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Forward one request to the upstream API
    ///
    /// Issues exactly one outbound call, mirroring the descriptor's HTTP
    /// method. The inbound JSON body rides along only for routes registered
    /// as body-forwarding. Path parameters are substituted into the
    /// descriptor's upstream template as opaque strings.
    ///
    /// Any received response counts as success regardless of its status
    /// code; the decoded JSON payload is returned as-is. Only transport
    /// failures and undecodable payloads surface as errors. No retries.
    pub async fn forward(
        &self,
        route: &RouteDescriptor,
        params: &[(&str, &str)],
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let url = format!(
            "{}{}",
            self.base_url,
            render_path(route.upstream_path, params)
        );

        tracing::debug!("Forwarding {} {}", route.method, url);

        let request = self.http.request(route.method.clone(), &url);
        let request = match body {
            Some(payload) if route.forwards_body => request.json(payload),
            _ => request,
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("Upstream request to {url} failed"))?;

        let payload = response
            .json::<JsonValue>()
            .await
            .with_context(|| format!("Failed to decode upstream response from {url}"))?;

        Ok(payload)
    }
}

/// Substitute `{name}` segments of a path template with parameter values.
///
/// Parameters are interpolated verbatim; URL encoding is left to request
/// construction. Segments without a matching parameter are kept as-is.
fn render_path(template: &str, params: &[(&str, &str)]) -> String {
    template
        .split('/')
        .map(|segment| {
            segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .and_then(|name| {
                    params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                })
                .unwrap_or(segment)
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path_substitutes_named_parameter() {
        let path = render_path("/books/{isbn}", &[("isbn", "0136091814")]);
        assert_eq!(path, "/books/0136091814");
    }

    #[test]
    fn test_render_path_keeps_literal_segments() {
        let path = render_path("/books/author/{author}", &[("author", "Chinua Achebe")]);
        assert_eq!(path, "/books/author/Chinua Achebe");
    }

    #[test]
    fn test_render_path_without_parameters() {
        let path = render_path("/books", &[]);
        assert_eq!(path, "/books");
    }

    #[test]
    fn test_render_path_multiple_parameters() {
        let path = render_path(
            "/books/{isbn}/review/{id}",
            &[("isbn", "0136091814"), ("id", "7")],
        );
        assert_eq!(path, "/books/0136091814/review/7");
    }

    #[test]
    fn test_render_path_unmatched_placeholder_is_preserved() {
        let path = render_path("/books/{isbn}", &[]);
        assert_eq!(path, "/books/{isbn}");
    }
}
