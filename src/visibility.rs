//! Hidden/visible policy for finished fragments

use crate::types::Fragment;

/// Hide the trailing boilerplate of a body.
///
/// Fragments are walked from the bottom of the body upward, the same order
/// they were scanned in. Until the first fragment of original content is
/// found, quoted, signature and blank fragments are hidden. Everything above
/// that fragment stays visible so quoted context for inline replies survives:
///
/// ```text
/// some original text             (visible)
///
/// > do you have any two's?       (quoted, visible)
///
/// Go fish!                       (visible)
///
/// > --
/// > Player 1                     (quoted, hidden)
///
/// --
/// Player 2                       (signature, hidden)
/// ```
pub fn resolve(fragments: &mut [Fragment]) {
    for fragment in fragments.iter_mut().rev() {
        if fragment.quoted() || fragment.signature() || fragment.is_blank() {
            fragment.hide();
        } else {
            break;
        }
    }
}
