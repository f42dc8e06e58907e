use micro_negotiate::{negotiate, HandlerMap, NegotiationOutcome};

/// What a [`NegotiationCase`] has to end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Selected(&'static str),
    NotAcceptable,
}

/// A negotiation header against a set of registered media types.
///
/// Every registered media type is its own handler, so the selected handler names the
/// media type that won.
#[derive(Debug)]
pub struct NegotiationCase {
    name: &'static str,
    header: &'static str,
    handlers: HandlerMap<&'static str>,
    expected: Expected,
}

impl NegotiationCase {
    pub fn new(name: &'static str, header: &'static str, registered: &[&'static str], expected: Expected) -> Self {
        let handlers = registered.iter().map(|media_type| (media_type, *media_type)).collect();
        Self { name, header, handlers, expected }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn negotiate(&self) -> NegotiationOutcome<'_, &'static str> {
        negotiate(&self.handlers, Some(self.header))
    }

    /// Whether `outcome` is the one this case expects.
    pub fn is_expected(&self, outcome: &NegotiationOutcome<'_, &'static str>) -> bool {
        match (self.expected, outcome) {
            (Expected::Selected(expected), Ok(selected)) => **selected == expected,
            (Expected::NotAcceptable, Err(_)) => true,
            _ => false,
        }
    }
}

pub fn negotiation_cases() -> Vec<NegotiationCase> {
    vec![
        NegotiationCase::new(
            "single_accept",
            "application/json",
            &["application/json"],
            Expected::Selected("application/json"),
        ),
        NegotiationCase::new(
            "browser_accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            &["application/json", "application/xml"],
            Expected::Selected("application/xml"),
        ),
        NegotiationCase::new(
            "versioned_accept",
            "application/vnd.example.v1+json;q=0.2, application/vnd.example.v2+json;q=0.5, \
             application/vnd.example.v3+json;q=0.3, application/vnd.example.v4+json;q=0.1, \
             application/vnd.example.v5+json;q=0.4, application/vnd.example.v6+json;q=0.6, \
             text/vnd.example.v1+html;q=0.05, text/vnd.example.v2+html;q=0.15, text/plain;q=notanumber",
            &["application/vnd.example.v1+json", "text/vnd.example.v1+html", "default"],
            Expected::Selected("application/vnd.example.v1+json"),
        ),
        NegotiationCase::new(
            "not_acceptable",
            "image/avif,image/webp;q=0.9,image/png;q=0.8,image/*;q=0.5",
            &["application/json", "text/html"],
            Expected::NotAcceptable,
        ),
    ]
}
