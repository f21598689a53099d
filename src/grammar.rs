//! Shared grammar for numeric cron fields.
//!
//! A field is a comma-separated list of terms. Each term is either a
//! value or a `value/step` pair, where the value part is a wildcard,
//! a plain number or a `low-high` range.

use crate::token::{is_in_range, is_positive_number, is_wildcard, parse_number};

/// Validates a whole field against the shared grammar.
///
/// Every value in the field must sit inside the inclusive `min..=max`
/// bounds of that field.
pub(crate) fn is_valid_field(field: &str, min: u32, max: u32) -> bool {
    if !field.chars().all(is_grammar_char) {
        return false;
    }

    field.split(',').all(|term| is_valid_term(term, min, max))
}

/// Characters the shared grammar is built from
fn is_grammar_char(character: char) -> bool {
    character.is_ascii_digit() || matches!(character, ',' | '/' | '*' | '-')
}

/// Validates a single term, either `value` or `value/step`
fn is_valid_term(term: &str, min: u32, max: u32) -> bool {
    // A trailing slash would otherwise split into a valid value and an
    // empty step that never reaches the step check
    if term.ends_with('/') {
        return false;
    }

    let parts: Vec<&str> = term.split('/').collect();

    match parts.as_slice() {
        [value] => is_valid_range(value, min, max),
        [value, step] => is_valid_range(value, min, max) && is_valid_step(step),
        _ => false,
    }
}

/// Validates the value part of a term, either a wildcard, a plain
/// number or a `low-high` range
fn is_valid_range(range: &str, min: u32, max: u32) -> bool {
    let sides: Vec<&str> = range.split('-').collect();

    match sides.as_slice() {
        [value] => is_wildcard(value) || is_in_range(value, min, max),
        [low, high] => match (parse_number(low), parse_number(high)) {
            (Some(low), Some(high)) => {
                low <= high && (min..=max).contains(&low) && (min..=max).contains(&high)
            }
            _ => false,
        },
        _ => false,
    }
}

/// Validates the step part of a term, a positive number of any size.
/// Steps are never clamped to the field bounds, so the value itself
/// does not matter as long as it is above zero.
fn is_valid_step(step: &str) -> bool {
    is_positive_number(step)
}
