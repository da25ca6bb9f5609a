//! Simulated request building.

use std::collections::HashMap;

use bytes::Bytes;
use http::{header, HeaderMap, HeaderName, HeaderValue, Method, Uri};
use serde::Serialize;

use crate::error::{Error, Result};

/// A fully built request context for handler tests.
pub struct SimulatedContext {
    /// The HTTP request itself.
    pub request: http::Request<Bytes>,
    /// Query-string pairs parsed from the URI.
    pub query: Vec<(String, String)>,
    /// Form pairs carried in the body.
    pub form: Vec<(String, String)>,
    /// Simulated session state.
    pub session: HashMap<String, String>,
    /// Per-request item bag.
    pub items: HashMap<String, String>,
}

impl SimulatedContext {
    /// Look up the first query-string value with the given name.
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up the first form value with the given name.
    #[must_use]
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Builder for a [`SimulatedContext`].
#[must_use]
pub struct SimulatedRequest {
    method: Method,
    uri: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    form: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
    session: HashMap<String, String>,
    items: HashMap<String, String>,
}

impl SimulatedRequest {
    /// Start building a GET request.
    pub fn get(uri: impl AsRef<str>) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Start building a POST request.
    pub fn post(uri: impl AsRef<str>) -> Self {
        Self::new(Method::POST, uri)
    }

    /// Start building a request with an arbitrary method.
    pub fn new(method: Method, uri: impl AsRef<str>) -> Self {
        Self {
            method,
            uri: uri.as_ref().to_string(),
            headers: HeaderMap::new(),
            body: None,
            form: Vec::new(),
            cookies: Vec::new(),
            session: HashMap::new(),
            items: HashMap::new(),
        }
    }

    /// Set a header on the request.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let name = HeaderName::try_from(name.as_ref()).expect("valid header name");
        let value = HeaderValue::try_from(value.as_ref()).expect("valid header value");
        self.headers.insert(name, value);
        self
    }

    /// Set the Referer header.
    pub fn referer(self, referer: impl AsRef<str>) -> Self {
        self.header(header::REFERER.as_str(), referer)
    }

    /// Set the User-Agent header.
    pub fn user_agent(self, agent: impl AsRef<str>) -> Self {
        self.header(header::USER_AGENT.as_str(), agent)
    }

    /// Add a cookie to the request.
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    /// Add a form field, carried urlencoded in the body.
    pub fn form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((name.into(), value.into()));
        self
    }

    /// Seed a session value visible to the handler under test.
    pub fn session_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.session.insert(name.into(), value.into());
        self
    }

    /// Seed a per-request item.
    pub fn item(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(name.into(), value.into());
        self
    }

    /// Set the raw request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request body as JSON and the matching Content-Type.
    pub fn json<T: Serialize>(mut self, value: &T) -> Self {
        let bytes = serde_json::to_vec(value).expect("JSON serialization should succeed");
        self.body = Some(Bytes::from(bytes));
        self.header(header::CONTENT_TYPE.as_str(), "application/json")
    }

    /// Build the simulated context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when the URI does not parse.
    pub fn build(mut self) -> Result<SimulatedContext> {
        let uri: Uri = self
            .uri
            .parse()
            .map_err(|e| Error::invalid_request(format!("invalid URI: {e}")))?;

        let query = uri.query().map(parse_pairs).unwrap_or_default();

        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; ");
            self.headers.insert(
                header::COOKIE,
                HeaderValue::try_from(cookie)
                    .map_err(|e| Error::invalid_request(format!("invalid cookie: {e}")))?,
            );
        }

        let body = if self.form.is_empty() {
            self.body.unwrap_or_default()
        } else {
            self.headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
            let encoded = self
                .form
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            Bytes::from(encoded)
        };

        let mut builder = http::Request::builder().method(self.method).uri(uri);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))?;

        Ok(SimulatedContext {
            request,
            query,
            form: self.form,
            session: self.session,
            items: self.items,
        })
    }
}

fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_parses_query_pairs() {
        let ctx = SimulatedRequest::get("/search?q=rust&page=3").build().unwrap();
        assert_eq!(ctx.request.method(), Method::GET);
        assert_eq!(ctx.request.uri().path(), "/search");
        assert_eq!(ctx.query_value("q"), Some("rust"));
        assert_eq!(ctx.query_value("page"), Some("3"));
        assert_eq!(ctx.query_value("missing"), None);
    }

    #[test]
    fn form_fields_become_an_urlencoded_body() {
        let ctx = SimulatedRequest::post("/login")
            .form_field("user", "ada")
            .form_field("pass", "s3cret")
            .build()
            .unwrap();

        assert_eq!(
            ctx.request.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(ctx.request.body().as_ref(), b"user=ada&pass=s3cret");
        assert_eq!(ctx.form_value("user"), Some("ada"));
    }

    #[test]
    fn cookies_collapse_into_one_header() {
        let ctx = SimulatedRequest::get("/")
            .cookie("sid", "1")
            .cookie("theme", "dark")
            .build()
            .unwrap();

        assert_eq!(
            ctx.request.headers().get(header::COOKIE).unwrap(),
            "sid=1; theme=dark"
        );
    }

    #[test]
    fn referer_and_user_agent_are_plain_headers() {
        let ctx = SimulatedRequest::get("/")
            .referer("https://example.test/start")
            .user_agent("matchkit")
            .build()
            .unwrap();

        assert_eq!(
            ctx.request.headers().get(header::REFERER).unwrap(),
            "https://example.test/start"
        );
        assert_eq!(ctx.request.headers().get(header::USER_AGENT).unwrap(), "matchkit");
    }

    #[test]
    fn session_and_items_are_visible_on_the_context() {
        let ctx = SimulatedRequest::get("/")
            .session_value("user", "ada")
            .item("trace", "abc123")
            .build()
            .unwrap();

        assert_eq!(ctx.session.get("user").map(String::as_str), Some("ada"));
        assert_eq!(ctx.items.get("trace").map(String::as_str), Some("abc123"));
    }

    #[test]
    fn json_body_sets_content_type() {
        let ctx = SimulatedRequest::post("/orders")
            .json(&serde_json::json!({"sku": "x1"}))
            .build()
            .unwrap();

        assert_eq!(
            ctx.request.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(ctx.request.body().as_ref(), b"{\"sku\":\"x1\"}");
    }

    #[test]
    fn bad_uri_is_an_invalid_request_error() {
        let result = SimulatedRequest::get("http://[broken").build();
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }
}
