// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Parser
//!
//! Splits a plain-text email body into fragments and tags each one as
//! quoted, signature and/or hidden, so the visible reply can be recovered
//! from a thread without relying on one client's conventions.
//!
//! # Features
//!
//! - Reply headers in many locales ("On DATE, NAME wrote:", "Le … a écrit :",
//!   "Am … schrieb …:", "在 … 写道：", …), including headers wrapped over
//!   several lines
//! - `>` quoting, and clients that keep the header but drop the markers
//! - Signature separators and mobile "Sent from my …" taglines
//! - Extensible pattern tables
//!
//! # Example
//!
//! ```rust
//! use email_reply_parser::{parse_reply, read};
//!
//! let body = "Sounds good!\n\nOn Fri, Mar 4, 2016 at 9:00 AM, Bob <bob@example.com> wrote:\n> Lunch tomorrow?";
//!
//! let email = read(body);
//! assert_eq!(email.len(), 2);
//! assert!(email.fragments()[1].quoted());
//! assert!(email.fragments()[1].hidden());
//!
//! assert_eq!(parse_reply(body, false), "Sounds good!");
//! ```

mod error;
mod normalize;
mod parser;
mod patterns;
mod scanner;
mod types;
mod visibility;

pub use error::{ReplyError, Result};
pub use normalize::normalize;
pub use parser::{ReplyParser, parse_reply, read};
pub use patterns::{DEFAULT_BACKTRACK_LIMIT, PatternConfig, PatternTables};
pub use types::*;
