use http::StatusCode;
use thiserror::Error;

/// No registered handler accepts any of the client's media types and no `default`
/// handler was registered.
///
/// The negotiation layer never turns this into a response; it is handed to the host's
/// error path, which decides how to present it (usually a `406 Not Acceptable`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} is not accepted", display_header(.header))]
pub struct NotAcceptable {
    header: Option<String>,
}

impl NotAcceptable {
    pub fn new<S: ToString>(header: S) -> Self {
        Self { header: Some(header.to_string()) }
    }

    /// The request carried no negotiation header at all.
    pub fn absent_header() -> Self {
        Self { header: None }
    }

    /// The negotiation header value that could not be satisfied.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    #[inline]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_ACCEPTABLE
    }
}

fn display_header(header: &Option<String>) -> &str {
    header.as_deref().unwrap_or("<absent>")
}
