use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{CandidateRecord, CleanRecord};

// One non-empty local part, an '@', and a domain of at least two non-empty
// dot-separated labels.
const EMAIL_FORMAT: &str = r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$";

pub(crate) struct Normalizer {
    email_format: Regex,
}

impl Normalizer {
    pub(crate) fn new() -> Result<Self> {
        let email_format =
            Regex::new(EMAIL_FORMAT).context("failed to compile email format regex")?;

        Ok(Self { email_format })
    }

    // Fails closed: no CleanRecord is ever built from an invalid email.
    pub(crate) fn normalize(&self, candidate: &CandidateRecord) -> Option<CleanRecord> {
        let email = canonical_email(&candidate.email);
        if !self.email_format.is_match(&email) {
            return None;
        }

        Some(CleanRecord {
            name: clean_person_name(&candidate.name),
            surname: clean_person_name(&candidate.surname),
            email,
        })
    }
}

pub(crate) fn clean_person_name(raw: &str) -> String {
    let filtered = raw
        .chars()
        .filter(|ch| ch.is_alphabetic() || *ch == '\'' || *ch == '-' || ch.is_whitespace())
        .collect::<String>();

    filtered
        .to_lowercase()
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<String>>()
        .join(" ")
}

pub(crate) fn canonical_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, surname: &str, email: &str) -> CandidateRecord {
        CandidateRecord {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            line: 2,
        }
    }

    #[test]
    fn names_are_trimmed_and_title_cased() {
        assert_eq!(clean_person_name("  john  "), "John");
        assert_eq!(clean_person_name("jane mary"), "Jane Mary");
    }

    #[test]
    fn apostrophes_do_not_restart_capitalization() {
        assert_eq!(clean_person_name("o'brien"), "O'brien");
    }

    #[test]
    fn hyphens_and_apostrophes_survive_filtering() {
        assert_eq!(clean_person_name("smith-jones"), "Smith-jones");
        assert_eq!(clean_person_name("D'ARCY"), "D'arcy");
    }

    #[test]
    fn non_name_characters_are_stripped() {
        assert_eq!(clean_person_name("John3!"), "John");
        assert_eq!(clean_person_name("M@ry_"), "Mry");
    }

    #[test]
    fn emails_are_lowercased_and_trimmed() {
        assert_eq!(
            canonical_email(" Jane.Doe@EXAMPLE.com "),
            "jane.doe@example.com"
        );
    }

    #[test]
    fn valid_email_yields_a_clean_record() {
        let normalizer = Normalizer::new().unwrap();
        let clean = normalizer
            .normalize(&candidate("john", "doe", "Jane.Doe@EXAMPLE.com"))
            .expect("email should be accepted");

        assert_eq!(clean.name, "John");
        assert_eq!(clean.surname, "Doe");
        assert_eq!(clean.email, "jane.doe@example.com");
    }

    #[test]
    fn short_domains_are_accepted() {
        let normalizer = Normalizer::new().unwrap();
        assert!(
            normalizer
                .normalize(&candidate("john", "doe", "john@x.com"))
                .is_some()
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        let normalizer = Normalizer::new().unwrap();

        for email in [
            "not-an-email",
            "a@b",
            "a@.com",
            "@example.com",
            "a b@example.com",
            "a@example.",
            "a@exa mple.com",
        ] {
            assert!(
                normalizer
                    .normalize(&candidate("john", "doe", email))
                    .is_none(),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn normalization_is_deterministic() {
        let normalizer = Normalizer::new().unwrap();
        let input = candidate("  o'brien ", "smith-JONES", " John.Smith@Example.COM");

        assert_eq!(normalizer.normalize(&input), normalizer.normalize(&input));
    }
}
