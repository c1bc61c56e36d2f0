//! Civil Text - small string helpers
//!
//! All helpers work on `char`s, so lengths and positions count Unicode
//! scalar values rather than bytes.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Characters in reverse order.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Trimmed input, or `""` when absent.
pub fn trim_to_empty(input: Option<&str>) -> &str {
    input.map_or("", str::trim)
}

pub fn is_none_or_empty(input: Option<&str>) -> bool {
    input.map_or(true, str::is_empty)
}

/// Absent, empty, or only whitespace.
pub fn is_none_or_blank(input: Option<&str>) -> bool {
    input.map_or(true, |s| s.trim().is_empty())
}

/// First character upper case, the rest lower case.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// First character lower case, the rest untouched.
pub fn uncapitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Non-empty and ASCII digits only.
pub fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Left-pad with `pad` up to `width` characters. Longer input is returned
/// unchanged.
pub fn pad_left(input: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(input.chars().count());
    std::iter::repeat(pad).take(missing).chain(input.chars()).collect()
}

/// Right-pad with `pad` up to `width` characters. Longer input is returned
/// unchanged.
pub fn pad_right(input: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(input.chars().count());
    input.chars().chain(std::iter::repeat(pad).take(missing)).collect()
}

/// Random `[A-Za-z0-9]` string from the thread-local CSPRNG.
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test]
    fn test_trim_and_blank() {
        assert_eq!(trim_to_empty(None), "");
        assert_eq!(trim_to_empty(Some("  x y  ")), "x y");

        assert!(is_none_or_empty(None));
        assert!(is_none_or_empty(Some("")));
        assert!(!is_none_or_empty(Some(" ")));

        assert!(is_none_or_blank(None));
        assert!(is_none_or_blank(Some(" \t\n")));
        assert!(!is_none_or_blank(Some(" a ")));
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(capitalize("hELLO wORLD"), "Hello world");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");

        assert_eq!(uncapitalize("Hello World"), "hello World");
        assert_eq!(uncapitalize("ABC"), "aBC");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123456789"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("1.5"));
        assert!(!is_numeric("١٢"));
    }

    #[test]
    fn test_padding() {
        assert_eq!(pad_left("7", 3, '0'), "007");
        assert_eq!(pad_right("ab", 4, '.'), "ab..");
        assert_eq!(pad_left("long", 2, '0'), "long");
        assert_eq!(pad_right("", 2, '-'), "--");
        assert_eq!(pad_left("é", 2, ' '), " é");
    }

    #[test]
    fn test_random_string() {
        let s = random_string(64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(random_string(0), "");
        assert_ne!(random_string(32), random_string(32));
    }
}
