//! `Accept` header parsing.
//!
//! This module turns a raw `Accept`-style header value into the client's media type
//! preferences, best preference first. It knows nothing about registered handlers; see
//! [`crate::negotiator`] for the matching side.
//!
//! Parsing never fails: a malformed quality parameter is treated as "not specified" and
//! the entry keeps the default quality of `1`. A `q` parameter without a value (`q=`)
//! counts as `0`.
//!
//! # Example
//!
//! ```
//! use micro_negotiate::accept::parse_accept;
//!
//! let preferences = parse_accept("text/html,application/xhtml+xml,*/*;q=0.8,application/xml;q=0.9");
//! assert_eq!(preferences, ["text/html", "application/xhtml+xml", "application/xml", "*/*"]);
//! ```

use std::cmp::Ordering;
use tracing::trace;

/// Quality assigned to an entry without a usable `q` parameter.
pub const DEFAULT_QUALITY: f64 = 1.0;

/// Quality of an entry whose `q` parameter has no value (`text/html;q=`).
pub const EMPTY_QUALITY: f64 = 0.0;

const ENTRY_SEPARATOR: char = ',';
const PARAM_SEPARATOR: char = ';';
const QUALITY_PARAM: &str = "q";

/// A media type token together with the quality the client attached to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedPreference<'a> {
    media_type: &'a str,
    quality: f64,
}

impl<'a> ParsedPreference<'a> {
    #[inline]
    pub fn new(media_type: &'a str, quality: f64) -> Self {
        Self { media_type, quality }
    }

    /// The media type token, compared verbatim against registered keys.
    #[inline]
    pub fn media_type(&self) -> &'a str {
        self.media_type
    }

    #[inline]
    pub fn quality(&self) -> f64 {
        self.quality
    }
}

/// Parses the header into media type tokens ordered by descending quality.
///
/// Tokens sharing a quality keep the order they have in the header.
pub fn parse_accept(raw: &str) -> Vec<&str> {
    parse_preferences(raw).into_iter().map(|preference| preference.media_type).collect()
}

/// Parses the header into [`ParsedPreference`]s ordered by descending quality.
///
/// A header holding a single entry is returned verbatim with [`DEFAULT_QUALITY`]: no
/// trimming and no quality parsing happen, even when the entry carries a `;q=` suffix.
pub fn parse_preferences(raw: &str) -> Vec<ParsedPreference<'_>> {
    if !raw.contains(ENTRY_SEPARATOR) {
        return vec![ParsedPreference::new(raw, DEFAULT_QUALITY)];
    }

    let mut preferences = raw.split(ENTRY_SEPARATOR).map(parse_entry).collect::<Vec<_>>();

    // `sort_by` is stable, equal qualities keep their header order
    preferences.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));
    preferences
}

fn parse_entry(entry: &str) -> ParsedPreference<'_> {
    match entry.split_once(PARAM_SEPARATOR) {
        Some((value, params)) => ParsedPreference::new(value.trim(), parse_quality(entry, params)),
        None => ParsedPreference::new(entry.trim(), DEFAULT_QUALITY),
    }
}

fn parse_quality(entry: &str, params: &str) -> f64 {
    let Some(raw_quality) = params.split(PARAM_SEPARATOR).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim().eq_ignore_ascii_case(QUALITY_PARAM).then_some(value.trim())
    }) else {
        return DEFAULT_QUALITY;
    };

    if raw_quality.is_empty() {
        return EMPTY_QUALITY;
    }

    match raw_quality.parse::<f64>() {
        Ok(quality) if !quality.is_nan() => quality,
        _ => {
            trace!(entry, quality = raw_quality, "malformed quality parameter, using default quality");
            DEFAULT_QUALITY
        }
    }
}
