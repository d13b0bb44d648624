//! Parsed email body and its fragments

use serde::{Deserialize, Serialize};
use std::fmt;

/// An email body split into fragments, in top-to-bottom order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    fragments: Vec<Fragment>,
}

impl Email {
    pub(crate) const fn from_fragments(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// All fragments in document order
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when there are no fragments at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterate over the fragments in document order
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// Get the combined text of the visible fragments.
    ///
    /// With `include_signatures`, signature fragments are kept even when they
    /// are hidden.
    #[must_use]
    pub fn visible_text(&self, include_signatures: bool) -> String {
        let visible: Vec<&str> = self
            .fragments
            .iter()
            .filter(|f| !f.hidden || (include_signatures && f.signature))
            .map(Fragment::content)
            .collect();

        visible.join("\n").trim_end().to_string()
    }
}

impl<'a> IntoIterator for &'a Email {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// A run of lines sharing the same quoted status, or a signature block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fragment {
    quoted: bool,
    signature: bool,
    hidden: bool,
    content: String,
}

impl Fragment {
    pub(crate) const fn new(quoted: bool, signature: bool, content: String) -> Self {
        Self {
            quoted,
            signature,
            hidden: false,
            content,
        }
    }

    pub(crate) const fn hide(&mut self) {
        self.hidden = true;
    }

    /// Reproduced from an earlier message
    #[must_use]
    pub const fn quoted(&self) -> bool {
        self.quoted
    }

    /// Appended by the sender's mail client or signature settings
    #[must_use]
    pub const fn signature(&self) -> bool {
        self.signature
    }

    /// Excluded from the visible reply
    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn content(&self) -> &str {
        self.content.as_str()
    }

    /// True when the content is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}
