//! Body normalization run before line scanning

use crate::patterns::PatternTables;
use fancy_regex::Regex as FancyRegex;
use tracing::warn;

/// Normalize an email body with the built-in pattern tables.
///
/// Line endings become `\n`, reply headers wrapped over several lines are
/// joined back into one line, and a transport header block is stripped.
#[must_use]
pub fn normalize(text: &str) -> String {
    normalize_with(text, PatternTables::standard())
}

pub fn normalize_with(text: &str, tables: &PatternTables) -> String {
    let mut body = normalize_line_endings(text);

    for pattern in tables.reply_headers() {
        if let Some(joined) = join_reply_header(&body, pattern) {
            body = joined;
        }
    }

    strip_transport_header(&body, tables).to_string()
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Join the first match of `pattern` onto a single line.
///
/// Returns `None` when nothing matched or the header already sits on one line.
fn join_reply_header(body: &str, pattern: &FancyRegex) -> Option<String> {
    let captures = match pattern.captures(body) {
        Ok(captures) => captures?,
        Err(e) => {
            warn!("Reply header pattern gave up: {e}");
            return None;
        }
    };
    let header = captures.get(1).or_else(|| captures.get(0))?;
    if !header.as_str().contains('\n') {
        return None;
    }

    let joined = header
        .as_str()
        .split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::with_capacity(body.len());
    out.push_str(&body[..header.start()]);
    out.push_str(&joined);
    out.push_str(&body[header.end()..]);
    Some(out)
}

/// Strip a transport header line such as `From: Bob <bob@example.com>`.
///
/// A header with only whitespace above it is a leading header block: it and
/// everything before it are dropped. A header below real content introduces
/// the forwarded or quoted original, so only the content above it is kept.
fn strip_transport_header<'a>(body: &'a str, tables: &PatternTables) -> &'a str {
    let Some(found) = tables.transport_header().find(body) else {
        return body;
    };

    let above = &body[..found.start()];
    if !above.trim().is_empty() {
        return above;
    }

    let rest = &body[found.start()..];
    rest.find('\n').map_or("", |offset| &rest[offset + 1..])
}
