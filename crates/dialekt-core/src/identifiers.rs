//! Identifier classification and safe-name rewriting.
//!
//! Vendors quote with their own quote pair; the helpers here answer the
//! vendor-independent questions: does a name need quoting at all, and how
//! is an arbitrary string rewritten into a bare identifier.

use regex::Regex;
use std::sync::LazyLock;

/// A bare identifier: starts with a letter or underscore, continues with
/// word characters only. Anything else must be quoted or rewritten.
static BARE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static identifier pattern"));

/// Character substituted for anything an identifier cannot carry.
const PROTECTOR: char = '_';

/// Whether `name` must be wrapped in the vendor quote pair to survive as
/// an identifier.
pub fn needs_quoting(name: &str) -> bool {
    !BARE_IDENTIFIER.is_match(name)
}

/// Rewrite `name` into a bare identifier.
///
/// Disallowed characters become the protector character, a leading digit
/// gets a protector prefix, and a result matching one of `reserved_words`
/// (exact match, case-insensitive) gets a protector suffix. Idempotent:
/// rewriting an already-safe name returns it unchanged.
pub fn safe_identifier(name: &str, reserved_words: &[&str]) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push(PROTECTOR);
        }
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, PROTECTOR);
    }
    if out.is_empty() {
        out.push(PROTECTOR);
    }
    if reserved_words.iter().any(|w| w.eq_ignore_ascii_case(&out)) {
        out.push(PROTECTOR);
    }
    out
}
