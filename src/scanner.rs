//! Bottom-up line scanner and fragment classifier
//!
//! A quoted block is reliably introduced by a header line above it, but
//! nothing reliable follows it. Reading the body from the last line upward
//! means the classifier only ever has to ask whether the line it just read is
//! the header of the quote block it is already inside.

use crate::patterns::PatternTables;
use crate::types::Fragment;
use tracing::trace;

/// Lines of a body, last line first.
pub struct ReverseLines<'a> {
    lines: std::iter::Rev<std::str::Split<'a, char>>,
}

impl<'a> ReverseLines<'a> {
    /// The body is trimmed first so leading and trailing blank lines never
    /// become fragments of their own.
    pub fn new(body: &'a str) -> Self {
        Self {
            lines: body.trim().split('\n').rev(),
        }
    }
}

impl<'a> Iterator for ReverseLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

/// A fragment still being filled. Lines are stored bottom line first.
#[derive(Debug)]
struct OpenFragment<'a> {
    quoted: bool,
    signature: bool,
    lines: Vec<&'a str>,
}

impl<'a> OpenFragment<'a> {
    fn new(quoted: bool, first_line: &'a str) -> Self {
        Self {
            quoted,
            signature: false,
            lines: vec![first_line],
        }
    }

    /// The `n`th most recently added line, or `""` if there are fewer.
    fn last_n_line(&self, n: usize) -> &'a str {
        self.lines
            .len()
            .checked_sub(n)
            .map_or("", |index| self.lines[index])
    }

    /// True when the lines just below the line being read open a signature.
    fn ends_in_signature(&self, tables: &PatternTables) -> bool {
        let previous = self.last_n_line(2);
        tables.is_signature(self.last_n_line(1))
            || (tables.is_signature(previous) && !tables.is_quoted(previous))
    }

    fn finish(mut self) -> Fragment {
        self.lines.reverse();
        trace!(
            "Finished fragment: {} lines, quoted={}, signature={}",
            self.lines.len(),
            self.quoted,
            self.signature
        );
        Fragment::new(self.quoted, self.signature, self.lines.join("\n"))
    }
}

/// State machine assigning each line to a fragment.
pub struct FragmentClassifier<'a, 't> {
    tables: &'t PatternTables,
    open: Option<OpenFragment<'a>>,
    finished: Vec<Fragment>,
}

impl<'a, 't> FragmentClassifier<'a, 't> {
    pub const fn new(tables: &'t PatternTables) -> Self {
        Self {
            tables,
            open: None,
            finished: Vec::new(),
        }
    }

    /// Figure out which fragment `line` belongs to.
    pub fn scan_line(&mut self, line: &'a str) {
        let tables = self.tables;
        let line = if tables.is_signature(line) {
            line
        } else {
            line.trim_end()
        };

        // A signature opener directly below this line closes the fragment
        // it starts.
        if let Some(mut open) = self.open.take_if(|open| open.ends_in_signature(tables)) {
            open.signature = true;
            self.finished.push(open.finish());
        }

        let is_quoted = tables.is_quoted(line);
        let is_quote_header = tables.is_quote_header(line.trim_start());

        match self.open.as_mut() {
            // A reply header or blank line right above a quote block still
            // belongs to it, even without a `>` marker.
            Some(open)
                if open.quoted == is_quoted
                    || (open.quoted && (line.is_empty() || is_quote_header)) =>
            {
                open.lines.push(line);

                // Some clients drop the `>` markers but keep the header: the
                // unmarked block under it was quoted all along.
                if is_quote_header && !open.quoted {
                    open.quoted = true;
                    self.finish_open();
                }
            }
            _ => {
                self.finish_open();
                self.open = Some(OpenFragment::new(is_quoted, line));
            }
        }
    }

    fn finish_open(&mut self) {
        if let Some(open) = self.open.take() {
            self.finished.push(open.finish());
        }
    }

    /// Finish the last fragment and return all of them in document order.
    pub fn into_fragments(mut self) -> Vec<Fragment> {
        self.finish_open();
        self.finished.reverse();
        self.finished
    }
}

/// Split a normalized body into fragments, top to bottom.
pub fn scan(body: &str, tables: &PatternTables) -> Vec<Fragment> {
    let mut classifier = FragmentClassifier::new(tables);
    for line in ReverseLines::new(body) {
        classifier.scan_line(line);
    }
    classifier.into_fragments()
}
