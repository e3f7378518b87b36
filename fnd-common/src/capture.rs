//! Text capture contract
//!
//! Candidate text comes either from the page DOM (browser extension) or
//! from a manual paste (web widget). The scraping mechanism itself is a
//! collaborator; this module only fixes the bound and the trimming rule
//! so every capture path behaves identically.

/// Maximum number of characters passed on to the classifier.
pub const MAX_CAPTURE_CHARS: usize = 5000;

/// A source of candidate text for analysis.
pub trait TextSource {
    /// Visible text of the source, trimmed and clipped to
    /// `MAX_CAPTURE_CHARS`. Returns the empty string when the source has
    /// nothing to offer.
    fn capture(&self) -> String;
}

/// Clip text to the capture bound on a char boundary.
pub fn clip_capture(text: &str) -> &str {
    match text.char_indices().nth(MAX_CAPTURE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Manual-paste source: text supplied directly by the user.
pub struct PastedText(String);

impl PastedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl TextSource for PastedText {
    fn capture(&self) -> String {
        clip_capture(self.0.trim()).to_string()
    }
}
