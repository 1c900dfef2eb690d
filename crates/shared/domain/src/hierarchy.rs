//! Hierarchy arithmetic on CPV codes.
//!
//! A code such as `03111000-2` encodes its ancestry in the digits before the check digit.
//! Dropping trailing zeros yields the *short code* (`03111`), whose length tells the level:
//!
//! | short code length | level |
//! |---|---|
//! | 2 | division |
//! | 3 | group |
//! | 4 | class |
//! | 5 | category |
//! | 6 or more | subcategory (still a category) |
//!
//! Everything here is a pure function of the code string; no registry is needed.

use serde::{Deserialize, Serialize};
use std::fmt;

const DIVISION_LEN: usize = 2;
const GROUP_LEN: usize = 3;
const CLASS_LEN: usize = 4;
const CATEGORY_LEN: usize = 5;

/// Most specific hierarchy level a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Division,
    Group,
    Class,
    Category,
    Subcategory,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Division => "division",
            Self::Group => "group",
            Self::Class => "class",
            Self::Category => "category",
            Self::Subcategory => "subcategory",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Digits before `-` with trailing zeros removed, right-padded with `0` to at least two.
///
/// The padding goes on the right on purpose: a division keeps its own two digits, so
/// `50000000-5` shortens to `50` and not `05`.
///
/// ```
/// use cpv_domain::hierarchy::short_code;
///
/// assert_eq!(short_code("31532700-1"), "315327");
/// assert_eq!(short_code("03000000-1"), "03");
/// assert_eq!(short_code("50000000-5"), "50");
/// ```
#[must_use]
pub fn short_code(code: &str) -> String {
    let body = code.split_once('-').map_or(code, |(body, _)| body);
    let significant = body.trim_end_matches('0');
    format!("{significant:0<width$}", width = DIVISION_LEN)
}

fn prefix(code: &str, len: usize) -> String {
    short_code(code).chars().take(len).collect()
}

fn short_len(code: &str) -> usize {
    short_code(code).chars().count()
}

#[must_use]
pub fn division(code: &str) -> String {
    prefix(code, DIVISION_LEN)
}

/// First three short-code digits, or fewer when the code is a division.
#[must_use]
pub fn group(code: &str) -> String {
    prefix(code, GROUP_LEN)
}

#[must_use]
pub fn class(code: &str) -> String {
    prefix(code, CLASS_LEN)
}

#[must_use]
pub fn category(code: &str) -> String {
    prefix(code, CATEGORY_LEN)
}

#[must_use]
pub fn is_division(code: &str) -> bool {
    short_len(code) == DIVISION_LEN
}

#[must_use]
pub fn is_group(code: &str) -> bool {
    short_len(code) == GROUP_LEN
}

#[must_use]
pub fn is_class(code: &str) -> bool {
    short_len(code) == CLASS_LEN
}

/// True for categories and for every subcategory below them.
#[must_use]
pub fn is_category(code: &str) -> bool {
    short_len(code) >= CATEGORY_LEN
}

#[must_use]
pub fn is_subcategory(code: &str) -> bool {
    short_len(code) > CATEGORY_LEN
}

#[must_use]
pub fn level(code: &str) -> Level {
    match short_len(code) {
        ..=DIVISION_LEN => Level::Division,
        GROUP_LEN => Level::Group,
        CLASS_LEN => Level::Class,
        CATEGORY_LEN => Level::Category,
        _ => Level::Subcategory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_code_strips_trailing_zeros() {
        assert_eq!(short_code("03451300-9"), "034513");
        assert_eq!(short_code("03100000-2"), "031");
        assert_eq!(short_code("03110000-5"), "0311");
        assert_eq!(short_code("03111000-2"), "03111");
    }

    #[test]
    fn short_code_pads_on_the_right() {
        assert_eq!(short_code("50000000-5"), "50");
        assert_eq!(short_code("00000000-0"), "00");
        assert_eq!(short_code("1"), "10");
        assert_eq!(short_code(""), "00");
    }

    #[test]
    fn short_code_without_check_digit_uses_whole_string() {
        assert_eq!(short_code("03111000"), "03111");
    }

    #[test]
    fn levels_of_known_codes() {
        assert_eq!(level("03000000-1"), Level::Division);
        assert_eq!(level("03100000-2"), Level::Group);
        assert_eq!(level("03110000-5"), Level::Class);
        assert_eq!(level("03111000-2"), Level::Category);
        assert_eq!(level("31532700-1"), Level::Subcategory);

        assert!(is_category("31532700-1"));
        assert!(is_subcategory("31532700-1"));
        assert!(!is_subcategory("03111000-2"));
    }

    #[test]
    fn prefixes_never_exceed_available_digits() {
        assert_eq!(division("31532700-1"), "31");
        assert_eq!(group("31532700-1"), "315");
        assert_eq!(class("31532700-1"), "3153");
        assert_eq!(category("31532700-1"), "31532");

        assert_eq!(group("03000000-1"), "03");
        assert_eq!(category("03100000-2"), "031");
    }
}
