//! Surface-form normalization and formula detection.
//!
//! Raw names arrive from knowledge-base extraction in whatever shape the
//! source declared them: mixed case, underscores, stray punctuation, or
//! symbolic expressions ("C6H12O6", "a + b"). This module owns the
//! heuristics that decide how a raw string is normalized before it becomes
//! an index key.
//!
//! # Examples
//!
//! ```
//! use tessera::analysis::normalize::{is_formula, normalize_name};
//!
//! assert!(is_formula("H2O"));
//! assert!(!is_formula("left atrium"));
//! assert_eq!(normalize_name("Left_Atrium,  (Heart)"), "left atrium (heart)");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Characters that read as symbolic operators rather than natural language.
///
/// Parentheses are deliberately absent: parenthesized qualifiers are common
/// in ordinary class names and are handled by synonym generation instead.
const FORMULA_OPERATORS: &str = "=<>+^#@%\\|~&*{}[]";

static LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]").expect("Latin pattern should compile"));

/// Whether the raw string contains at least one Latin letter.
///
/// English-tagged names without any Latin letter are rejected by the add
/// path as unusable for lexical matching.
pub fn has_latin(raw: &str) -> bool {
    LATIN.is_match(raw)
}

/// Whether the raw string looks like a logical or mathematical expression.
///
/// A string is a formula when it contains a symbolic operator character, or
/// when any whitespace-separated token has a digit directly adjacent to a
/// letter (chemical and mathematical terms such as "H2O" or "x2").
pub fn is_formula(raw: &str) -> bool {
    let s = raw.trim();
    if s.is_empty() {
        return false;
    }
    if s.chars().any(|c| FORMULA_OPERATORS.contains(c)) {
        return true;
    }
    s.split_whitespace().any(|token| {
        token
            .bytes()
            .zip(token.bytes().skip(1))
            .any(|(a, b)| {
                (a.is_ascii_alphabetic() && b.is_ascii_digit())
                    || (a.is_ascii_digit() && b.is_ascii_alphabetic())
            })
    })
}

/// Normalize a natural-language name.
///
/// Lower-cases, maps underscores and hyphens to spaces, strips non-semantic
/// punctuation, and collapses whitespace runs to single spaces. Parentheses
/// are preserved so parenthetical synonym generation can see them.
pub fn normalize_name(raw: &str) -> String {
    let mapped: String = raw
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            '_' | '-' => Some(' '),
            '"' | '\'' | ',' | ';' | ':' | '.' | '!' | '?' => None,
            c => Some(c),
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a formula.
///
/// Less aggressive than [`normalize_name`]: only lower-cases and collapses
/// whitespace, keeping every symbol of the expression intact.
pub fn normalize_formula(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_latin() {
        assert!(has_latin("heart"));
        assert!(has_latin("T-cell 4"));
        assert!(!has_latin("1234"));
        assert!(!has_latin("心臓"));
        assert!(!has_latin(""));
    }

    #[test]
    fn test_is_formula_operators() {
        assert!(is_formula("a + b"));
        assert!(is_formula("x = y"));
        assert!(is_formula("Na+/K+ ATPase [complex]"));
    }

    #[test]
    fn test_is_formula_letter_digit_adjacency() {
        assert!(is_formula("H2O"));
        assert!(is_formula("C6H12O6"));
        assert!(is_formula("interleukin il6"));
    }

    #[test]
    fn test_is_formula_plain_names() {
        assert!(!is_formula("left atrium"));
        assert!(!is_formula("Left Atrium (Heart)"));
        assert!(!is_formula("type 2 diabetes")); // digit is its own token
        assert!(!is_formula(""));
        assert!(!is_formula("   "));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Left_Atrium"), "left atrium");
        assert_eq!(normalize_name("  Heart   Valve "), "heart valve");
        assert_eq!(normalize_name("Jaro-Winkler"), "jaro winkler");
        assert_eq!(normalize_name("cortex, renal"), "cortex renal");
        assert_eq!(normalize_name("Left Atrium (Heart)"), "left atrium (heart)");
    }

    #[test]
    fn test_normalize_formula() {
        assert_eq!(normalize_formula("A  +  B"), "a + b");
        assert_eq!(normalize_formula(" H2O "), "h2o");
        // punctuation survives, unlike normalize_name
        assert_eq!(normalize_formula("x, y"), "x, y");
    }
}
