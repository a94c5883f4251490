//! Paceplate Vocabulary
//!
//! Bidirectional mapping between what users type and what the knowledge base
//! stores. Two pure, deterministic directions over static tables:
//!
//! - [`canonicalize`]: free-form term -> canonical identifier
//!   (`"Fast Dining"` -> `"fast_dining_type"`). Unknown vocabulary degrades
//!   to a best-effort literal form rather than failing.
//! - [`humanize`]: canonical identifier -> display label
//!   (`"fast_dining_type"` -> `"Fast Dining"`). Applied whenever internal
//!   identifiers are surfaced to a caller.
//!
//! [`terms_match`] is the flexible comparison used by the heuristic search
//! path: exact equality first, then substring containment in either
//! direction, then the category's synonym table.
//!
//! The tables live in [`table`] as plain data rows; adding a synonym is a
//! one-line change there, not a new branch here.

pub mod table;

pub use crate::table::{rows, Category, SynonymRow};

use crate::table::exact_index;

/// Normalize a free-form user term to its canonical identifier within a
/// category. Lower-cases and trims, resolves exact synonyms through the
/// category table, and falls back to `spaces -> underscores` so unknown
/// vocabulary still participates in literal matching.
pub fn canonicalize(category: Category, raw: &str) -> String {
    let term = raw.trim().to_lowercase();
    if term.is_empty() {
        return term;
    }
    if let Some(canonical) = exact_index(category).get(term.as_str()) {
        return (*canonical).to_string();
    }
    term.replace(' ', "_")
}

/// Turn a canonical identifier into a display label: drop a trailing
/// `type` token, replace separators with spaces, and title-case each word.
pub fn humanize(canonical: &str) -> String {
    let mut words: Vec<&str> = canonical
        .split(['_', ' '])
        .filter(|w| !w.is_empty())
        .collect();
    if let Some(last) = words.last() {
        if last.eq_ignore_ascii_case("type") {
            words.pop();
        }
    }
    let mut label = String::with_capacity(canonical.len());
    for word in words {
        if !label.is_empty() {
            label.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(&chars.as_str().to_lowercase());
        }
    }
    label
}

/// Flexible category-aware comparison between a user-supplied term and a
/// stored value. Priority order:
///
/// 1. exact equality (case-insensitive, trimmed)
/// 2. substring containment in either direction
/// 3. canonical-id equality through [`canonicalize`]
/// 4. synonym table: the user term equals one of a row's terms and the
///    stored value contains that row's fragment
///
/// An empty user term matches nothing; callers treat empty criteria as
/// "no constraint" before getting here.
pub fn terms_match(category: Category, user_term: &str, stored: &str) -> bool {
    let user = user_term.trim().to_lowercase();
    let stored = stored.trim().to_lowercase();
    if user.is_empty() || stored.is_empty() {
        return false;
    }
    if user == stored || stored.contains(&user) || user.contains(&stored) {
        return true;
    }
    if canonicalize(category, &user) == canonicalize(category, &stored) {
        return true;
    }
    rows(category)
        .iter()
        .any(|row| row.terms.contains(&user.as_str()) && stored.contains(row.fragment))
}
