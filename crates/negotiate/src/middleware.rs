//! Content negotiation as a request handler.
//!
//! [`Negotiate`] owns a [`HandlerMap`] and is itself a [`Handler`]: for every request it
//! reads the negotiation header, picks a handler with [`negotiate`] and forwards the
//! untouched request to it. When nothing is acceptable no response is produced; the
//! [`NotAcceptable`] error is converted into the handlers' error type and returned, so
//! the host's error handling decides how a `406` looks.
//!
//! The negotiation header is read from the first configured header name holding a
//! non-empty value, `Accept` then `Content-Type` by default. Repeated lines of that
//! header are joined with `", "`.

use crate::error::NotAcceptable;
use crate::handler::Handler;
use crate::negotiator::{negotiate, HandlerMap, HandlerMapBuilder, NegotiationOutcome};
use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, Request, Response};
use std::borrow::Cow;
use std::fmt;
use tracing::warn;

pub struct Negotiate<H> {
    handlers: HandlerMap<H>,
    negotiation_headers: Vec<HeaderName>,
}

pub struct NegotiateBuilder<H> {
    handlers: HandlerMapBuilder<H>,
    negotiation_headers: Vec<HeaderName>,
}

impl<H> Negotiate<H> {
    pub fn builder() -> NegotiateBuilder<H> {
        NegotiateBuilder::new()
    }

    pub fn new(handlers: HandlerMap<H>) -> Self {
        Self { handlers, negotiation_headers: default_negotiation_headers() }
    }

    pub fn handlers(&self) -> &HandlerMap<H> {
        &self.handlers
    }

    /// Header names consulted for the negotiation header, in order.
    pub fn negotiation_headers(&self) -> &[HeaderName] {
        &self.negotiation_headers
    }

    /// Selects the handler for a request carrying `headers`.
    pub fn select(&self, headers: &HeaderMap) -> NegotiationOutcome<'_, H> {
        negotiate(&self.handlers, self.negotiation_header(headers).as_deref())
    }

    fn negotiation_header<'h>(&self, headers: &'h HeaderMap) -> Option<Cow<'h, str>> {
        self.negotiation_headers.iter().find_map(|name| joined_header(headers, name))
    }
}

/// Repeated header lines form one comma separated list. Values that are empty or not
/// visible ascii are left out; `None` when nothing remains.
fn joined_header<'h>(headers: &'h HeaderMap, name: &HeaderName) -> Option<Cow<'h, str>> {
    let mut values = headers
        .get_all(name)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(header = %name, cause = %e, "negotiation header is not visible ascii, ignored");
                None
            }
        })
        .filter(|value| !value.is_empty());

    let first = values.next()?;
    let Some(second) = values.next() else {
        return Some(Cow::Borrowed(first));
    };

    let mut joined = format!("{first}, {second}");
    for value in values {
        joined.push_str(", ");
        joined.push_str(value);
    }
    Some(Cow::Owned(joined))
}

impl<H> From<HandlerMap<H>> for Negotiate<H> {
    fn from(handlers: HandlerMap<H>) -> Self {
        Self::new(handlers)
    }
}

impl<H> fmt::Debug for Negotiate<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Negotiate")
            .field("handlers", &self.handlers)
            .field("negotiation_headers", &self.negotiation_headers)
            .finish()
    }
}

#[async_trait]
impl<ReqBody, H> Handler<ReqBody> for Negotiate<H>
where
    ReqBody: Send + 'static,
    H: Handler<ReqBody>,
    H::Error: From<NotAcceptable>,
{
    type RespBody = H::RespBody;
    type Error = H::Error;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error> {
        let handler = self.select(req.headers())?;
        handler.call(req).await
    }
}

impl<H> NegotiateBuilder<H> {
    fn new() -> Self {
        Self { handlers: HandlerMap::builder(), negotiation_headers: default_negotiation_headers() }
    }

    /// See [`HandlerMapBuilder::handler`].
    pub fn handler(mut self, media_type: impl AsRef<str>, handler: H) -> Self {
        self.handlers = self.handlers.handler(media_type, handler);
        self
    }

    pub fn default_handler(mut self, handler: H) -> Self {
        self.handlers = self.handlers.default_handler(handler);
        self
    }

    /// Replaces the header names the negotiation header is read from.
    pub fn negotiation_headers<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = HeaderName>,
    {
        self.negotiation_headers = names.into_iter().collect();
        self
    }

    pub fn build(self) -> Negotiate<H> {
        Negotiate { handlers: self.handlers.build(), negotiation_headers: self.negotiation_headers }
    }
}

impl<H> fmt::Debug for NegotiateBuilder<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NegotiateBuilder")
            .field("handlers", &self.handlers)
            .field("negotiation_headers", &self.negotiation_headers)
            .finish()
    }
}

fn default_negotiation_headers() -> Vec<HeaderName> {
    vec![ACCEPT, CONTENT_TYPE]
}
