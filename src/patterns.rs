//! Locale and client pattern tables
//!
//! All line-level patterns are written for normal reading orientation and
//! are matched one line at a time. The reply-header table runs over the whole
//! body and is the only place that needs lookaround, so it is compiled with
//! `fancy-regex` under an explicit backtrack limit.

use crate::error::{ReplyError, Result};
use fancy_regex::{Regex as FancyRegex, RegexBuilder as FancyRegexBuilder};
use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Default backtrack limit for the reply-header patterns
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// "On DATE, NAME wrote:" style headers that mail clients may wrap over
/// several physical lines. Capture group 1 is the header sentence.
const REPLY_HEADER_PATTERNS: &[&str] = &[
    // On DATE, NAME <EMAIL> wrote:
    r"(?m)^\s*(On(?:(?!^>*\s*On\b|\bwrote:)[\s\S]){0,1000}wrote:)$",
    // Le DATE, NAME <EMAIL> a écrit :
    r"(?m)^\s*(Le(?:(?!^>*\s*Le\b|\bécrit ?:)[\s\S]){0,1000}écrit ?:)$",
    // El DATE, NAME <EMAIL> escribió:
    r"(?m)^\s*(El(?:(?!^>*\s*El\b|\bescribió:)[\s\S]){0,1000}escribió:)$",
    // Il DATE, NAME <EMAIL> ha scritto:
    r"(?m)^\s*(Il(?:(?!^>*\s*Il\b|\bscritto:)[\s\S]){0,1000}scritto:)$",
    // Em DATE, NAME <EMAIL> escreveu:
    r"(?m)^\s*(Em(?:(?!^>*\s*Em\b|\bescreveu:)[\s\S]){0,1000}escreveu:)$",
    // Am DATE um TIME schrieb NAME:
    r"(?m)^\s*(Am\s.+\sum\s.+\sschrieb\s.+\s+?:)$",
    // Am DATE schrieb NAME <EMAIL>:
    r"(?m)^\s*(Am\s.+\sschrieb.+\s?[\[<].+\s*[\]>]:)$",
    // Op DATE schreef NAME <EMAIL>:
    r"(?m)^\s*(Op\s[\s\S]{1,1000}?schreef[\s\S]{1,1000}?:)$",
    // W dniu DATE, NAME <EMAIL> pisze|napisał:
    r"(?m)^\s*((?:W\sdniu|Dnia)\s[\s\S]{1,1000}?(?:pisze|napisał(?:\(a\))?):)$",
    // Den DATE skrev NAME <EMAIL>:
    r"(?m)^\s*(Den\s.+\sskrev\s.+:)$",
    // pe DATE NAME <EMAIL> kirjoitti:
    r"(?m)^\s*(pe\s.+\s.+kirjoitti:)$",
    // 在 DATE, TIME, NAME 写道：
    r"(?m)^(在[\s\S]{1,1000}?写道：)$",
    // DATE TIME NAME 작성:
    r"(?m)^(20[0-9]{2}\..+\s작성:)$",
    // DATE TIME、NAME のメッセージ:
    r"(?m)^(20[0-9]{2}/.+のメッセージ:)$",
    // NAME <EMAIL> schrieb:
    r"(?m)^(.+\s<.+>\sschrieb:)$",
    // NAME on DATE at TIME wrote:
    r"(?m)^(.+\son.*at.*wrote:)$",
    // From: NAME <EMAIL>
    r"^\s*(From\s?:.+\s?[\[<].+[\]>])",
    // De: NAME <EMAIL>
    r"\b(De\s?:.+\s?[\[<].+[\]>])",
    // Van: NAME <EMAIL>
    r"^\s*(Van\s?:.+\s?[\[<].+[\]>])",
    // Von: NAME <EMAIL>
    r"^\s*(Von\s?:.+\s?[\[<].+[\]>])",
    // Da: NAME <EMAIL>
    r"^\s*(Da\s?:.+\s?[\[<].+[\]>])",
    // 20YY-MM-DD HH:II GMT+01:00 NAME <EMAIL>:
    r"(?m)^(20[0-9]{2}-[0-9]{2}.[0-9]{2}.[0-9]{2}:[0-9]{2}.*\n?.*>:)$",
    // DATE skrev NAME <EMAIL>:
    r"(?m)^\s*([a-z]{3,4}\.\s[\s\S]{1,1000}?\sskrev\s[\s\S]{1,1000}?:)$",
    // DD.MM.20YY HH:II "NAME" <EMAIL>:
    r#"(?m)^([0-9]{2}.[0-9]{2}.20[0-9]{2}.*[0-9]{2}.[0-9]{2}.*" *<.*> *:)$"#,
];

/// Whole-line signature separators
const SIGNATURE_PATTERNS: &[&str] = &[
    r"^\s*—+\s*$",
    r"^\s*-+\s*$",
    r"^\s*_+\s*$",
    r"^-\w$",
    r"^_\w$",
    r"^\+{30,}\s*$",
    r"(?i)^\s*-+\s*Original Message\s*-+\s*$",
    r"^Von meinem (?:\w+\s*){1,3}gesendet\.?$",
];

/// Open-ended device prefixes. Each one counts as a signature only when it
/// is followed by a run of one to three words that ends the line.
const SIGNATURE_DEVICE_PREFIXES: &[&str] = &[
    "Sent from my",
    "Envoyé de mon",
    "Enviado desde mi",
    "Gesendet von",
    "Envoyé depuis",
    "Enviado desde",
];

/// Complete service taglines, matched anywhere in the line
const SIGNATURE_TAGLINES: &[&str] = &[
    "Sent from Yahoo Mail",
    "Get organized with Yahoo Mail",
    "- Original Message -",
    "Get Outlook for Android",
    "Sent from my Bell Samsung",
    "By replying or using an indeedemail.com email address",
    "Von meinem iPhone gesendet",
    "Diese Nachricht wurde von meinem Android Mobiltelefon mit GMX Mail gesendet.",
    "Von meinem Samsung Galaxy Smartphone gesendet.",
];

/// Single-line reply headers sitting directly above a quoted block
const QUOTE_HEADER_PATTERNS: &[&str] = &[
    r"^On.*wrote:$",
    r"El.*escribió:$",
    r"Le.*a écrit ?:$",
    r"<.*@.*\..*>:$",
    r"^Il.*scritto:$",
    r"^Em.*escreveu:$",
    r"^Am.*schrieb.*:$",
    r"^在.*写道：$",
    r"^20[0-9]{2}\..*작성:$",
    r"^20[0-9]{2}/.*のメッセージ:$",
    r"^Op .+ schreef .+:$",
    r"^(?:W dniu|Dnia) .+(?:pisze|napisał(?:\(a\))?):$",
    r"^Den .+ skrev .+:$",
    r"^[a-z]{3,4}\. .+ skrev .+:$",
    r"^pe .+kirjoitti:$",
    r"^.+ <.+> schrieb:$",
    r"^.+ on .*at.*wrote:$",
];

const QUOTED_PATTERN: &str = r"^>+";

const TRANSPORT_HEADER_PATTERN: &str = r"(?mi)^[ \t]*(?:From|Von|Gesendet):\s.*$";

static STANDARD: LazyLock<PatternTables> = LazyLock::new(|| {
    PatternTables::with_config(&PatternConfig::default())
        .expect("built-in pattern tables must compile")
});

/// Extra table entries supplied by the caller.
///
/// Built-in entries always come first; everything here is appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatternConfig {
    /// Reply-header patterns (fancy-regex syntax, group 1 is the header)
    pub reply_headers: Vec<String>,

    /// Whole-line signature patterns
    pub signatures: Vec<String>,

    /// Device prefixes, matched literally and followed by one to three words
    pub signature_devices: Vec<String>,

    /// Complete service taglines, matched literally anywhere in a line
    pub signature_taglines: Vec<String>,

    /// Single-line quote-header patterns
    pub quote_headers: Vec<String>,

    /// Backtrack limit for the reply-header patterns
    pub backtrack_limit: Option<usize>,
}

impl PatternConfig {
    /// Load a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReplyError::Config(e.to_string()))
    }
}

/// Compiled pattern tables shared by every parse.
#[derive(Debug, Clone)]
pub struct PatternTables {
    reply_headers: Vec<FancyRegex>,
    signatures: RegexSet,
    quoted: Regex,
    quote_headers: RegexSet,
    transport_header: Regex,
}

impl PatternTables {
    /// The built-in tables, compiled once per process
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Build the built-in tables extended with `config`
    pub fn with_config(config: &PatternConfig) -> Result<Self> {
        let limit = config.backtrack_limit.unwrap_or(DEFAULT_BACKTRACK_LIMIT);

        let reply_headers = REPLY_HEADER_PATTERNS
            .iter()
            .copied()
            .chain(config.reply_headers.iter().map(String::as_str))
            .map(|pattern| compile_reply_header(pattern, limit))
            .collect::<Result<Vec<_>>>()?;

        let signatures: Vec<String> = SIGNATURE_PATTERNS
            .iter()
            .map(ToString::to_string)
            .chain(config.signatures.iter().cloned())
            .chain(
                SIGNATURE_DEVICE_PREFIXES
                    .iter()
                    .copied()
                    .chain(config.signature_devices.iter().map(String::as_str))
                    .map(device_pattern),
            )
            .chain(
                SIGNATURE_TAGLINES
                    .iter()
                    .copied()
                    .chain(config.signature_taglines.iter().map(String::as_str))
                    .map(tagline_pattern),
            )
            .collect();

        let quote_headers: Vec<String> = QUOTE_HEADER_PATTERNS
            .iter()
            .map(ToString::to_string)
            .chain(config.quote_headers.iter().cloned())
            .collect();

        Ok(Self {
            reply_headers,
            signatures: compile_set("signature", &signatures)?,
            quoted: compile("quoted", QUOTED_PATTERN)?,
            quote_headers: compile_set("quote header", &quote_headers)?,
            transport_header: compile("transport header", TRANSPORT_HEADER_PATTERN)?,
        })
    }

    /// Does this line open a signature block?
    #[must_use]
    pub fn is_signature(&self, line: &str) -> bool {
        self.signatures.is_match(line)
    }

    /// Does this line carry a leading `>` quote marker?
    #[must_use]
    pub fn is_quoted(&self, line: &str) -> bool {
        self.quoted.is_match(line)
    }

    /// Is this line a reply header such as "On DATE, NAME wrote:"?
    #[must_use]
    pub fn is_quote_header(&self, line: &str) -> bool {
        self.quote_headers.is_match(line)
    }

    pub(crate) fn reply_headers(&self) -> &[FancyRegex] {
        &self.reply_headers
    }

    pub(crate) const fn transport_header(&self) -> &Regex {
        &self.transport_header
    }
}

fn device_pattern(device: &str) -> String {
    format!(r"-*\s*{}\s*-* (?:\s*\w+){{1,3}}$", regex::escape(device))
}

fn tagline_pattern(tagline: &str) -> String {
    format!(r"-*\s*{}", regex::escape(tagline))
}

fn compile_reply_header(pattern: &str, limit: usize) -> Result<FancyRegex> {
    FancyRegexBuilder::new(pattern)
        .backtrack_limit(limit)
        .build()
        .map_err(|e| invalid("reply header", pattern, &e))
}

fn compile(table: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| invalid(table, pattern, &e))
}

/// Compile each pattern on its own first so errors name the culprit.
fn compile_set(table: &'static str, patterns: &[String]) -> Result<RegexSet> {
    for pattern in patterns {
        compile(table, pattern)?;
    }
    RegexSet::new(patterns).map_err(|e| ReplyError::InvalidPattern {
        table,
        pattern: patterns.join(" | "),
        details: e.to_string(),
    })
}

fn invalid(table: &'static str, pattern: &str, err: &impl std::fmt::Display) -> ReplyError {
    ReplyError::InvalidPattern {
        table,
        pattern: pattern.to_string(),
        details: err.to_string(),
    }
}
