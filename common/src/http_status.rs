//! HTTP status codes used inside the Broker ecosystem.
//!
//! The Broker backend speaks a fixed status vocabulary; anything outside
//! it still reaches the classifier, which falls back to a generic error
//! carrying the raw code.

/// HTTP status code for response classification.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    // Success family.
    pub const OK: HttpStatusCode = HttpStatusCode(200);
    pub const CREATED: HttpStatusCode = HttpStatusCode(201);
    pub const NO_CONTENT: HttpStatusCode = HttpStatusCode(204);
    pub const PARTIAL_CONTENT: HttpStatusCode = HttpStatusCode(206);

    // Error family.
    pub const MULTIPLE_CHOICES: HttpStatusCode = HttpStatusCode(300);
    pub const MOVED_PERMANENTLY: HttpStatusCode = HttpStatusCode(301);
    pub const BAD_REQUEST: HttpStatusCode = HttpStatusCode(400);
    pub const PAYMENT_REQUIRED: HttpStatusCode = HttpStatusCode(402);
    pub const FORBIDDEN: HttpStatusCode = HttpStatusCode(403);
    pub const NOT_FOUND: HttpStatusCode = HttpStatusCode(404);
    pub const CONFLICT: HttpStatusCode = HttpStatusCode(409);
    pub const GONE: HttpStatusCode = HttpStatusCode(410);
    pub const INTERNAL_SERVER_ERROR: HttpStatusCode = HttpStatusCode(500);
    pub const NOT_IMPLEMENTED: HttpStatusCode = HttpStatusCode(501);

    /// 2xx success responses (carry a `data` envelope).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
