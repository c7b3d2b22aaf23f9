use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

// ============================================================================
// IntoHtml trait: bridges Maud Markup and String
// ============================================================================

pub trait IntoHtml {
    fn into_html(self) -> String;
}

impl IntoHtml for maud::Markup {
    fn into_html(self) -> String { self.into_string() }
}

impl IntoHtml for String {
    fn into_html(self) -> String { self }
}

// -- Shared helpers --

fn insert_header(headers: &mut HeaderMap, key: &str, value: &str) {
    match (
        HeaderName::from_bytes(key.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(val)) => {
            headers.insert(name, val);
        }
        _ => tracing::warn!(header = key, "dropping header with invalid name or value"),
    }
}

// ============================================================================
// OkResponse
// ============================================================================

/// HTMX-aware success response with client-redirect support.
///
/// ```ignore
/// OkResponse::new().html(maud::html! { div { "Hello" } }).no_cache()
/// ```
#[derive(Debug)]
pub struct OkResponse {
    content: Option<String>,
    headers: HeaderMap,
    status: StatusCode,
}

impl OkResponse {
    pub fn new() -> Self {
        Self {
            content: None,
            headers: HeaderMap::new(),
            status: StatusCode::OK,
        }
    }

    /// Set the response body. Accepts Maud Markup or String.
    pub fn html(mut self, content: impl IntoHtml) -> Self {
        self.content = Some(content.into_html());
        self
    }

    /// Ask htmx to navigate the browser to `location` once the swap is done.
    pub fn hx_redirect(mut self, location: impl AsRef<str>) -> Self {
        insert_header(&mut self.headers, "HX-Redirect", location.as_ref());
        self
    }

    /// Mark the response as not cacheable.
    pub fn no_cache(mut self) -> Self {
        self.headers
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        self
    }

    /// Set the HTTP status code.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl Default for OkResponse {
    fn default() -> Self { Self::new() }
}

impl IntoResponse for OkResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, Html(self.content.unwrap_or_default())).into_response()
    }
}

// ============================================================================
// ErrorResponse
// ============================================================================

/// HTMX-aware error response.
///
/// ```ignore
/// ErrorResponse::new().message("Invalid input").status(StatusCode::BAD_REQUEST)
/// ```
#[derive(Debug)]
pub struct ErrorResponse {
    content: Option<String>,
    headers: HeaderMap,
    message: Option<String>,
    status: StatusCode,
}

impl ErrorResponse {
    pub fn new() -> Self {
        Self {
            content: None,
            headers: HeaderMap::new(),
            message: None,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Set the response body. Accepts Maud Markup or String.
    pub fn html(mut self, content: impl IntoHtml) -> Self {
        self.content = Some(content.into_html());
        self
    }

    /// Set error message (rendered as `<div class="error">…</div>`).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the HTTP status code.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Add a custom response header.
    pub fn header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        insert_header(&mut self.headers, key.as_ref(), value.as_ref());
        self
    }
}

impl Default for ErrorResponse {
    fn default() -> Self { Self::new() }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let content = self.content
            .or_else(|| {
                self.message
                    .map(|msg| maud::html! { div.error { (msg) } }.into_string())
            })
            .unwrap_or_else(|| r#"<div class="error">An error occurred</div>"#.into());
        (self.status, self.headers, Html(content)).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
