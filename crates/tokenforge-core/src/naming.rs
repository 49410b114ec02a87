//! Identifier casing rules.
//!
//! Every platform generator derives its names through these functions so a
//! token maps to the same words on every platform. All transforms are total:
//! any input string produces an output, possibly empty.

use once_cell::sync::Lazy;
use regex::Regex;

static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("case boundary pattern"));

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern"));

/// Convert to kebab-case (`BrandA/Button Primary` -> `brand-a-button-primary`).
pub fn kebab_case(input: &str) -> String {
    separated_lowercase(input, "-")
}

/// Convert to snake_case (`BrandA/Button Primary` -> `brand_a_button_primary`).
pub fn snake_case(input: &str) -> String {
    separated_lowercase(input, "_")
}

/// Convert to UPPER_SNAKE_CASE.
pub fn upper_snake_case(input: &str) -> String {
    snake_case(input).to_ascii_uppercase()
}

/// Convert to camelCase.
///
/// Only runs of non-alphanumeric characters split words; existing humps are
/// not preserved (`buttonBackground-hover` -> `buttonbackgroundHover`).
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (index, word) in words(input).enumerate() {
        if index == 0 {
            out.push_str(&word.to_ascii_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }

    out
}

/// Convert to PascalCase, for type names.
///
/// Words are split like [`kebab_case`], so humps survive
/// (`brandA` -> `BrandA`).
pub fn pascal_case(input: &str) -> String {
    kebab_case(input)
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
}

fn separated_lowercase(input: &str, separator: &str) -> String {
    let split = CASE_BOUNDARY.replace_all(input, "${1}-${2}");
    let lowered = split.to_lowercase();
    let joined = NON_ALPHANUMERIC.replace_all(&lowered, separator);
    joined.trim_matches(|c: char| separator.contains(c)).to_string()
}
