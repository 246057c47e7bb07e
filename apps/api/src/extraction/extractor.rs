use std::collections::HashSet;

use tracing::debug;

use crate::catalog::SkillsDatabase;
use crate::extraction::patterns::{
    ExtractionPatterns, NameRules, SkillMatchMode, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS,
};
use crate::extraction::ExtractionResult;

/// Rule-based extractor. Holds only compiled patterns, so one instance is
/// shared by every request.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    patterns: ExtractionPatterns,
}

impl FieldExtractor {
    pub fn new(patterns: ExtractionPatterns) -> Self {
        FieldExtractor { patterns }
    }

    pub fn patterns(&self) -> &ExtractionPatterns {
        &self.patterns
    }

    /// Runs every heuristic over `text`.
    pub fn extract(&self, text: &str, skills_db: &SkillsDatabase) -> ExtractionResult {
        let result = ExtractionResult {
            name: self.extract_name(text),
            emails: self.extract_emails(text),
            phone_numbers: self.extract_phone_numbers(text),
            skills: self.extract_skills(text, skills_db),
        };
        debug!(
            name_found = result.name.is_some(),
            emails = result.emails.len(),
            phones = result.phone_numbers.len(),
            skills = result.skills.len(),
            "Field extraction complete"
        );
        result
    }

    /// Guesses the candidate's name from the first few non-empty lines.
    ///
    /// A line qualifies when, after dropping an optional honorific ("Dr.")
    /// and a trailing credential (", PhD"), it is 2–4 capitalised words, holds
    /// no digits or email address, and is not a known section heading.
    /// Returns the whole trimmed line of the first qualifying candidate.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        let rules = &self.patterns.name;

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(rules.scan_lines)
            .find(|line| self.is_name_line(line, rules))
            .map(collapse_whitespace)
    }

    fn is_name_line(&self, line: &str, rules: &NameRules) -> bool {
        if line.chars().any(|c| c.is_ascii_digit()) || self.patterns.email.is_match(line) {
            return false;
        }

        let heading = line.trim_end_matches(':').to_lowercase();
        if rules.excluded_headers.iter().any(|h| *h == heading) {
            return false;
        }

        let mut core = line;
        if let Some(rest) = rules
            .honorifics
            .iter()
            .find_map(|h| strip_prefix_word(core, h))
        {
            core = rest;
        }
        if let Some((head, tail)) = core.rsplit_once(',') {
            if rules.suffixes.iter().any(|s| s.eq_ignore_ascii_case(tail.trim())) {
                core = head;
            }
        }

        let tokens: Vec<&str> = core.split_whitespace().collect();
        (rules.min_tokens..=rules.max_tokens).contains(&tokens.len())
            && tokens.iter().all(|t| is_name_token(t))
    }

    /// All email addresses, in order of first appearance, each exactly once
    /// (compared ignoring case).
    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.patterns
            .email
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches('.'))
            .filter(|email| seen.insert(email.to_lowercase()))
            .map(str::to_string)
            .collect()
    }

    /// Phone numbers with 7–15 digits that are not part of a longer run of
    /// digits or letters. Duplicates are detected on the digit sequence, so
    /// "555-123-4567" and "555.123.4567" are reported once.
    pub fn extract_phone_numbers(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut phones = Vec::new();
        let mut pos = 0;

        while let Some(m) = self.patterns.phone.find_at(text, pos) {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            if before.is_some_and(char::is_alphanumeric) || after.is_some_and(char::is_alphanumeric)
            {
                // A glued candidate may still hide a valid number further in,
                // e.g. "94105 555-123-4567" first matches from inside the ZIP.
                pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
                continue;
            }
            pos = m.end();

            let candidate = m.as_str().trim();
            let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
            if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
                continue;
            }
            if seen.insert(digits) {
                phones.push(candidate.to_string());
            }
        }
        phones
    }

    /// Dictionary skills present in `text`, ignoring case and treating any
    /// run of whitespace as a single space. Each skill is tested on its own;
    /// the result follows dictionary order.
    pub fn extract_skills(&self, text: &str, skills_db: &SkillsDatabase) -> Vec<String> {
        let haystack = collapse_whitespace(text).to_lowercase();

        skills_db
            .iter()
            .filter(|skill| {
                let needle = collapse_whitespace(skill).to_lowercase();
                match self.patterns.skill_mode {
                    SkillMatchMode::Substring => haystack.contains(&needle),
                    SkillMatchMode::Token => contains_token(&haystack, &needle),
                }
            })
            .map(str::to_string)
            .collect()
    }
}

/// `true` when `needle` occurs in `haystack` without being glued to a letter
/// or digit. Edges of the needle that are punctuation ("c++", ".net") are
/// not boundary-checked.
fn contains_token(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let check_start = needle.chars().next().is_some_and(char::is_alphanumeric);
    let check_end = needle.chars().next_back().is_some_and(char::is_alphanumeric);

    haystack.match_indices(needle).any(|(idx, _)| {
        let before = haystack[..idx].chars().next_back();
        let after = haystack[idx + needle.len()..].chars().next();
        !(check_start && before.is_some_and(char::is_alphanumeric))
            && !(check_end && after.is_some_and(char::is_alphanumeric))
    })
}

/// A capitalised word: uppercase first letter, then letters, hyphens,
/// apostrophes or periods ("O'Neil", "Smith-Jones", "J.").
fn is_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_uppercase() && chars.all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | '.'))
}

fn strip_prefix_word<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    let rest = &line[prefix.len()..];
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
