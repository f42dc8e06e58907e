//! Handler selection by media type.
//!
//! A [`HandlerMap`] maps media type tokens to handlers, with the reserved [`DEFAULT_KEY`]
//! acting as the fallback. [`negotiate`] walks the client's preferences, best first, and
//! picks the first registered media type; ties keep header order, so the walk order
//! rather than the bare quality decides the winner.
//!
//! Matching is exact string equality: `text/*` does not match a registered `text/html`,
//! and `application/vnd.example.v2+json` works without any special casing.
//!
//! # Example
//!
//! ```
//! use micro_negotiate::{negotiate, HandlerMap};
//!
//! let handlers = HandlerMap::builder()
//!     .handler(mime::APPLICATION_JSON, "json")
//!     .handler(mime::TEXT_HTML, "html")
//!     .build();
//!
//! assert_eq!(negotiate(&handlers, Some("text/html,application/json")), Ok(&"html"));
//! assert!(negotiate(&handlers, Some("application/xml")).is_err());
//! ```

use crate::accept::parse_accept;
use crate::error::NotAcceptable;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Reserved key of the fallback handler.
pub const DEFAULT_KEY: &str = "default";

/// Result of one negotiation: the selected handler or why nothing was acceptable.
pub type NegotiationOutcome<'a, H> = Result<&'a H, NotAcceptable>;

/// Read-only mapping from media type token to handler.
pub struct HandlerMap<H> {
    handlers: HashMap<String, H>,
}

impl<H> HandlerMap<H> {
    pub fn builder() -> HandlerMapBuilder<H> {
        HandlerMapBuilder::new()
    }

    /// Gets the handler registered under exactly `media_type`.
    #[inline]
    pub fn get(&self, media_type: &str) -> Option<&H> {
        self.handlers.get(media_type)
    }

    #[inline]
    pub fn contains(&self, media_type: &str) -> bool {
        self.handlers.contains_key(media_type)
    }

    /// The fallback handler registered under [`DEFAULT_KEY`].
    #[inline]
    pub fn default_handler(&self) -> Option<&H> {
        self.get(DEFAULT_KEY)
    }

    /// Registered keys, in no particular order.
    pub fn media_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// See [`negotiate`].
    pub fn negotiate(&self, negotiation_header: Option<&str>) -> NegotiationOutcome<'_, H> {
        negotiate(self, negotiation_header)
    }
}

impl<H> fmt::Debug for HandlerMap<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl<H> Default for HandlerMap<H> {
    fn default() -> Self {
        Self { handlers: HashMap::new() }
    }
}

impl<K: AsRef<str>, H> FromIterator<(K, H)> for HandlerMap<H> {
    fn from_iter<T: IntoIterator<Item = (K, H)>>(iter: T) -> Self {
        iter.into_iter().fold(HandlerMap::builder(), |builder, (key, handler)| builder.handler(key, handler)).build()
    }
}

pub struct HandlerMapBuilder<H> {
    handlers: HashMap<String, H>,
}

impl<H> HandlerMapBuilder<H> {
    fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Registers `handler` for `media_type`, replacing any handler already registered
    /// under the same key. Registering under [`DEFAULT_KEY`] sets the fallback.
    pub fn handler(mut self, media_type: impl AsRef<str>, handler: H) -> Self {
        let media_type = media_type.as_ref();
        if self.handlers.insert(media_type.to_owned(), handler).is_some() {
            warn!(media_type, "handler registered twice, the former one is replaced");
        }
        self
    }

    /// Registers the fallback used when nothing in the header matches.
    pub fn default_handler(self, handler: H) -> Self {
        self.handler(DEFAULT_KEY, handler)
    }

    pub fn build(self) -> HandlerMap<H> {
        HandlerMap { handlers: self.handlers }
    }
}

impl<H> fmt::Debug for HandlerMapBuilder<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

/// Selects the handler for a request.
///
/// An absent or empty header selects the `default` handler. Otherwise the header is
/// parsed with [`parse_accept`] and the first token registered in `handlers` wins; when
/// none is registered the `default` handler is used. Without a `default` handler the
/// outcome is [`NotAcceptable`] carrying the header.
pub fn negotiate<'a, H>(handlers: &'a HandlerMap<H>, negotiation_header: Option<&str>) -> NegotiationOutcome<'a, H> {
    let fallback = handlers.default_handler();

    let header = match negotiation_header {
        Some(header) if !header.is_empty() => header,
        _ => {
            debug!("no negotiation header, using default handler");
            return fallback.ok_or_else(NotAcceptable::absent_header);
        }
    };

    let selected = parse_accept(header)
        .into_iter()
        .find_map(|media_type| handlers.get(media_type).map(|handler| (media_type, handler)));

    match (selected, fallback) {
        (Some((media_type, handler)), _) => {
            debug!(header, media_type, "negotiated handler");
            Ok(handler)
        }
        (None, Some(handler)) => {
            debug!(header, "no media type matched, using default handler");
            Ok(handler)
        }
        (None, None) => {
            debug!(header, "no acceptable handler");
            Err(NotAcceptable::new(header))
        }
    }
}
