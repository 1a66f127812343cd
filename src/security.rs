use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};

/// Headers stamped onto every portal response.
const PORTAL_HEADERS: &[(&str, &str)] = &[
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    // Pages are self-contained; article thumbnails and author images come from anywhere.
    (
        "content-security-policy",
        "default-src 'self'; style-src 'self'; img-src 'self' https: data:; frame-src https://www.youtube.com; form-action 'self'",
    ),
];

/// Security headers middleware
pub struct SecurityHeaders;

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        Box::pin(async move {
            let mut res = srv.call(req).await?;
            let headers = res.headers_mut();
            for &(name, value) in PORTAL_HEADERS {
                headers.insert(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                );
            }
            Ok(res)
        })
    }
}

/// Form input checks run before anything is sent to the collector API.
pub mod validation {
    use regex::Regex;
    use std::sync::OnceLock;

    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    static HANDLE_REGEX: OnceLock<Regex> = OnceLock::new();

    pub fn validate_required(value: &str) -> Result<&str, String> {
        let value = value.trim();
        if value.is_empty() {
            return Err("is required".to_string());
        }
        Ok(value)
    }

    /// Validate URL format and scheme
    pub fn validate_url(url: &str) -> Result<(), String> {
        if url.len() > 2048 {
            return Err("URL too long (max 2048 characters)".to_string());
        }

        let url_regex = URL_REGEX.get_or_init(|| {
            Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("static regex")
        });

        if !url_regex.is_match(url) {
            return Err("must be an http or https URL".to_string());
        }
        Ok(())
    }

    /// Display names for sources, servers and channels.
    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.chars().count() > 100 {
            return Err("too long (max 100 characters)".to_string());
        }
        if name.contains(['<', '>', '"', '\'']) {
            return Err("contains invalid characters".to_string());
        }
        Ok(())
    }

    /// Subreddit and Twitch channel names end up in URLs, so keep them to a safe alphabet.
    pub fn validate_handle(handle: &str) -> Result<(), String> {
        validate_name(handle)?;
        let handle_regex = HANDLE_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_\-]*$").expect("static regex"));
        if !handle_regex.is_match(handle) {
            return Err("may only contain letters, digits, '_' and '-'".to_string());
        }
        Ok(())
    }

}
