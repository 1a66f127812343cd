use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode};
use serde::Serialize;
use url::{form_urlencoded, Url};

use super::errors::{ApiError, ApiResult};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Everything needed to issue one request and judge its outcome.
#[derive(Debug, Clone)]
pub struct RestArgs {
    pub url: String,
    /// The only status code treated as success.
    pub status_code: StatusCode,
    /// Sent as `Content-Type` only when set.
    pub content_type: Option<&'static str>,
    /// Pre-serialized JSON. `None` sends an empty body.
    pub body: Option<Vec<u8>>,
    /// Overrides the client-wide timeout for this call.
    pub timeout: Option<Duration>,
}

impl RestArgs {
    /// JSON request expecting `200 OK`, the shape every collector route uses.
    pub fn json(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: StatusCode::OK,
            content_type: Some(CONTENT_TYPE_JSON),
            body: None,
            timeout: None,
        }
    }

    pub fn expect(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Executes single requests against the collector API and enforces the
/// status-code contract. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
}

impl RestClient {
    pub fn new(timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            "newsbot-portal/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub async fn get(&self, args: RestArgs) -> ApiResult<Vec<u8>> {
        self.execute(Method::GET, args).await
    }

    pub async fn post(&self, args: RestArgs) -> ApiResult<Vec<u8>> {
        self.execute(Method::POST, args).await
    }

    pub async fn delete(&self, args: RestArgs) -> ApiResult<Vec<u8>> {
        self.execute(Method::DELETE, args).await
    }

    /// One round trip. Returns the raw response body when the status matches
    /// `args.status_code`; otherwise the body text travels inside the error.
    pub async fn execute(&self, method: Method, args: RestArgs) -> ApiResult<Vec<u8>> {
        let url = parse_url(&args.url)?;
        tracing::debug!(method = %method, url = %url, "sending api request");

        let mut request = self.client.request(method, url);
        if let Some(content_type) = args.content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if let Some(timeout) = args.timeout {
            request = request.timeout(timeout);
        }
        request = request.body(args.body.unwrap_or_default());

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "api response received");

        if status != args.status_code {
            return Err(ApiError::UnexpectedStatus {
                expected: args.status_code,
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}

/// Parses an absolute URL, percent-encoding stray spaces first.
pub fn parse_url(raw: &str) -> ApiResult<Url> {
    let fixed = raw.replace(' ', "%20");
    let url = Url::parse(&fixed)?;
    if url.cannot_be_a_base() {
        return Err(ApiError::validation(format!("not an absolute http url: {raw}")));
    }
    Ok(url)
}

/// Appends form-encoded query parameters to `uri`.
pub fn with_query(uri: String, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return uri;
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{uri}?{query}")
}

/// Joins the configured endpoint and a route, tolerating a trailing slash on the endpoint.
pub fn join(endpoint: &str, route: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), route.trim_start_matches('/'))
}

/// `{endpoint}/{route_root}[/{tail}]`; an empty tail addresses the collection itself.
pub fn resource_uri(endpoint: &str, route_root: &str, tail: &str) -> String {
    let base = join(endpoint, route_root);
    if tail.is_empty() {
        base
    } else {
        join(&base, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_encodes_spaces() {
        let url = parse_url("http://localhost:8081/api/sources/by/source?source=final fantasy").unwrap();
        assert_eq!(url.query(), Some("source=final%20fantasy"));
    }

    #[test]
    fn parse_url_rejects_relative() {
        let err = parse_url("api/articles").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn parse_url_rejects_non_base() {
        assert!(parse_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn with_query_escapes_values() {
        let uri = with_query(
            "http://api/new/reddit".to_string(),
            &[("name", "rust"), ("url", "https://reddit.com/r/rust")],
        );
        assert_eq!(
            uri,
            "http://api/new/reddit?name=rust&url=https%3A%2F%2Freddit.com%2Fr%2Frust"
        );
    }

    #[test]
    fn with_query_without_params_is_untouched() {
        assert_eq!(with_query("http://api/x".to_string(), &[]), "http://api/x");
    }

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join("http://api:8081/", "api/sources"), "http://api:8081/api/sources");
        assert_eq!(join("http://api:8081", "/api/sources"), "http://api:8081/api/sources");
    }

    #[test]
    fn resource_uri_with_and_without_tail() {
        assert_eq!(resource_uri("http://api:8081/", "api/sources", ""), "http://api:8081/api/sources");
        assert_eq!(
            resource_uri("http://api:8081", "api/queue", "discord/webhooks"),
            "http://api:8081/api/queue/discord/webhooks"
        );
    }

    #[test]
    fn rest_args_body_is_json() {
        let args = RestArgs::json("http://api/x")
            .with_body(&serde_json::json!({"name": "rust"}))
            .unwrap();
        assert_eq!(args.body.as_deref(), Some(br#"{"name":"rust"}"#.as_slice()));
        assert_eq!(args.status_code, StatusCode::OK);
        assert_eq!(args.content_type, Some(CONTENT_TYPE_JSON));
    }
}
