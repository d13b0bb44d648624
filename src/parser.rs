//! Reply parser entry points

use crate::normalize::normalize_with;
use crate::patterns::PatternTables;
use crate::scanner::scan;
use crate::types::Email;
use crate::visibility::resolve;
use tracing::debug;

/// Splits email bodies into fragments using a fixed set of pattern tables.
#[derive(Debug, Clone, Copy)]
pub struct ReplyParser<'t> {
    tables: &'t PatternTables,
}

impl ReplyParser<'static> {
    /// A parser over the built-in pattern tables
    #[must_use]
    pub fn standard() -> Self {
        Self::new(PatternTables::standard())
    }
}

impl Default for ReplyParser<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> ReplyParser<'t> {
    #[must_use]
    pub const fn new(tables: &'t PatternTables) -> Self {
        Self { tables }
    }

    /// Split an email body into an [`Email`] of fragments.
    ///
    /// Never fails: any input, including an empty string, yields at least one
    /// fragment.
    #[must_use]
    pub fn read(&self, text: &str) -> Email {
        let body = normalize_with(text, self.tables);
        let mut fragments = scan(&body, self.tables);
        resolve(&mut fragments);

        let email = Email::from_fragments(fragments);
        debug!(
            "Read email body: {} fragments, {} hidden",
            email.len(),
            email.iter().filter(|f| f.hidden()).count()
        );
        email
    }

    /// Get the visible reply text of an email body.
    #[must_use]
    pub fn parse_reply(&self, text: &str, include_signatures: bool) -> String {
        self.read(text).visible_text(include_signatures)
    }
}

/// Split an email body into fragments with the built-in pattern tables
#[must_use]
pub fn read(text: &str) -> Email {
    ReplyParser::standard().read(text)
}

/// Get the visible reply text of an email body with the built-in pattern tables
#[must_use]
pub fn parse_reply(text: &str, include_signatures: bool) -> String {
    ReplyParser::standard().parse_reply(text, include_signatures)
}
