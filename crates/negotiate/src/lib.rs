//! Accept header based handler negotiation.
//!
//! This crate selects, for an incoming request, which one of several registered
//! handlers should produce the response, based on the client's `Accept` header
//! (or `Content-Type` when `Accept` is absent).
//!
//! # Example
//!
//! ```
//! use micro_negotiate::{negotiate, HandlerMap, NotAcceptable};
//!
//! let handlers = HandlerMap::builder()
//!     .handler("application/vnd.example.v2+json", "v2")
//!     .handler(mime::APPLICATION_JSON, "v1")
//!     .build();
//!
//! let accept = "application/json;q=0.5,application/vnd.example.v2+json";
//! assert_eq!(negotiate(&handlers, Some(accept)), Ok(&"v2"));
//!
//! let error = negotiate(&handlers, Some("text/html")).unwrap_err();
//! assert_eq!(error, NotAcceptable::new("text/html"));
//! assert_eq!(error.to_string(), "text/html is not accepted");
//! assert_eq!(error.status_code().as_u16(), 406);
//! ```
//!
//! # Architecture
//!
//! - [`accept`]: parses the header into media type tokens, best quality first. Parsing
//!   never fails, a malformed `q` parameter counts as `q=1`.
//! - [`negotiator`]: walks the tokens against a [`HandlerMap`] and returns the first
//!   registered handler, the `default` handler, or [`NotAcceptable`].
//! - [`handler`]: the async [`Handler`] capability negotiated handlers implement.
//! - [`middleware`]: [`Negotiate`], a [`Handler`] that negotiates per request and
//!   forwards the request to the selected handler. A [`NotAcceptable`] outcome is
//!   returned through the handler's error type, leaving presentation to the host.
//!
//! Matching is exact string equality; wildcard media ranges such as `text/*` are not
//! expanded against registered media types.

pub mod accept;
pub mod handler;
pub mod middleware;
pub mod negotiator;

mod error;

pub use accept::parse_accept;
pub use error::NotAcceptable;
pub use handler::{make_handler, BoxHandler, Handler, HandlerFn};
pub use middleware::{Negotiate, NegotiateBuilder};
pub use negotiator::{negotiate, HandlerMap, HandlerMapBuilder, NegotiationOutcome, DEFAULT_KEY};
