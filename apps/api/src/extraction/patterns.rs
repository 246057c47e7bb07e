//! Extraction rules as data. Swapping a pattern here changes what is
//! detected without touching the extractor or its callers.

use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

/// Local part, `@`, then a dotted domain.
pub const DEFAULT_EMAIL_PATTERN: &str = r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+";

/// Optional country code, optional (bracketed) area code, then 3+4 digits.
/// Separators are a single space, dash or dot; never a line break.
/// A country code needs a leading `+` or a trailing separator, otherwise
/// "2019-2021" would read as `2` `019-2021`.
pub const DEFAULT_PHONE_PATTERN: &str =
    r"(?:\+\d{1,3}[-. ]?|\d{1,3}[-. ])?(?:\(?\d{3}\)?[-. ]?)?\d{3}[-. ]?\d{4}";

pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;

const DEFAULT_HONORIFICS: &[&str] = &["Dr.", "Mr.", "Ms.", "Mrs.", "Prof."];
const DEFAULT_SUFFIXES: &[&str] = &["MD", "PhD", "Jr.", "Sr."];
const DEFAULT_EXCLUDED_HEADERS: &[&str] = &[
    "resume",
    "curriculum vitae",
    "work experience",
    "professional experience",
    "education",
    "education history",
    "relevant skills",
    "technical skills",
    "volunteer work",
    "contact information",
    "professional summary",
    "geriatric medicine",
];

/// Tunable knobs of the "guess a name from the top of the document" heuristic.
#[derive(Debug, Clone)]
pub struct NameRules {
    /// Number of non-empty leading lines inspected.
    pub scan_lines: usize,
    pub min_tokens: usize,
    pub max_tokens: usize,
    /// Optional leading titles, e.g. "Dr.".
    pub honorifics: Vec<String>,
    /// Optional trailing credentials, written after a comma, e.g. ", PhD".
    pub suffixes: Vec<String>,
    /// Lowercased section headings that look like names but are not.
    pub excluded_headers: Vec<String>,
}

impl Default for NameRules {
    fn default() -> Self {
        NameRules {
            scan_lines: 5,
            min_tokens: 2,
            max_tokens: 4,
            honorifics: to_strings(DEFAULT_HONORIFICS),
            suffixes: to_strings(DEFAULT_SUFFIXES),
            excluded_headers: to_strings(DEFAULT_EXCLUDED_HEADERS),
        }
    }
}

impl NameRules {
    pub fn with_scan_lines(mut self, scan_lines: usize) -> Self {
        self.scan_lines = scan_lines;
        self
    }
}

/// How dictionary skills are located in resume text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillMatchMode {
    /// The skill must not be glued to letters or digits on either side,
    /// so "java" does not fire inside "javascript".
    #[default]
    Token,
    /// Plain case-insensitive substring search.
    Substring,
}

#[derive(Debug, Error)]
#[error("unknown skill match mode '{0}' (expected 'token' or 'substring')")]
pub struct ParseSkillMatchModeError(String);

impl FromStr for SkillMatchMode {
    type Err = ParseSkillMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(SkillMatchMode::Token),
            "substring" => Ok(SkillMatchMode::Substring),
            _ => Err(ParseSkillMatchModeError(s.to_string())),
        }
    }
}

/// Compiled extraction patterns.
#[derive(Debug, Clone)]
pub struct ExtractionPatterns {
    pub email: Regex,
    pub phone: Regex,
    pub name: NameRules,
    pub skill_mode: SkillMatchMode,
}

impl ExtractionPatterns {
    pub fn new(email: &str, phone: &str, name: NameRules) -> Result<Self, regex::Error> {
        Ok(ExtractionPatterns {
            email: Regex::new(email)?,
            phone: Regex::new(phone)?,
            name,
            skill_mode: SkillMatchMode::default(),
        })
    }

    pub fn with_skill_mode(mut self, mode: SkillMatchMode) -> Self {
        self.skill_mode = mode;
        self
    }

    /// Default patterns with the given name-heuristic rules.
    pub fn with_name_rules(name: NameRules) -> Result<Self, regex::Error> {
        Self::new(DEFAULT_EMAIL_PATTERN, DEFAULT_PHONE_PATTERN, name)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
