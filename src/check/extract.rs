// src/check/extract.rs
use super::content::Content;

/// Failure raised by a caller-supplied extractor. The checker swallows it
/// and downgrades the check to the fail token; a check call never throws.
pub type ExtractorError = Box<dyn std::error::Error + Send + Sync>;

/// Derives a status literal from a successful probe payload.
///
/// The default behavior, when no extractor is supplied, reads the `status`
/// field of a JSON object payload and falls back to the pass token.
pub trait StatusExtractor: Send + Sync {
    fn classify(&self, content: &Content) -> Result<String, ExtractorError>;
}

impl<F> StatusExtractor for F
where
    F: Fn(&Content) -> Result<String, ExtractorError> + Send + Sync,
{
    fn classify(&self, content: &Content) -> Result<String, ExtractorError> {
        self(content)
    }
}

/// Derives a status literal from a failed probe: the parsed error payload
/// when the target answered with a rejection, `None` when the transport
/// itself failed.
pub trait ErrorStatusExtractor: Send + Sync {
    fn classify(&self, content: Option<&Content>) -> Result<String, ExtractorError>;
}

impl<F> ErrorStatusExtractor for F
where
    F: Fn(Option<&Content>) -> Result<String, ExtractorError> + Send + Sync,
{
    fn classify(&self, content: Option<&Content>) -> Result<String, ExtractorError> {
        self(content)
    }
}

/// Default extraction rule shared by the success and rejection branches:
/// the payload's own `status` field when present, `fallback` otherwise.
pub(crate) fn body_status_literal(content: &Content, fallback: &str) -> String {
    content
        .status_field()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
