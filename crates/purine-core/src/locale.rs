// ABOUTME: Supported languages with locale-aware case folding and collation
// ABOUTME: Turkish dotted/dotless i handling and alphabet ordering for search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Locale rules used by catalog search and category listings.
//!
//! Collation is base-sensitivity only: case and accents that are not separate
//! letters in the language are ignored. In Turkish, `ç ğ ı ö ş ü` are letters of
//! their own and sort after their base letter; in English they fold to `c g i o s u`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Turkish alphabet in collation order (with q, w, x appended to their Latin slots)
const TURKISH_ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'q', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

/// Supported user languages
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Language {
    /// Turkish (`tr`)
    #[default]
    #[serde(rename = "tr", alias = "turkish")]
    Turkish,
    /// English (`en`)
    #[serde(rename = "en", alias = "english")]
    English,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 2] = [Self::Turkish, Self::English];

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Turkish => "tr",
            Self::English => "en",
        }
    }

    /// Category label given to user-created meals
    #[must_use]
    pub const fn custom_category_label(self) -> &'static str {
        match self {
            Self::Turkish => "Özel Yemek",
            Self::English => "Custom Meal",
        }
    }

    /// Lowercase `text` using this language's casing rules
    #[must_use]
    pub fn fold_case(self, text: &str) -> String {
        match self {
            Self::Turkish => {
                let mut folded = String::with_capacity(text.len());
                for c in text.chars() {
                    match c {
                        'I' => folded.push('ı'),
                        'İ' => folded.push('i'),
                        other => folded.extend(other.to_lowercase()),
                    }
                }
                folded
            }
            Self::English => text.to_lowercase(),
        }
    }

    /// Case-insensitive substring test under this language's casing rules
    #[must_use]
    pub fn contains_folded(self, haystack: &str, needle: &str) -> bool {
        self.fold_case(haystack).contains(&self.fold_case(needle))
    }

    /// Compare two strings by collation order, falling back to code points on ties
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        self.collation_key(a)
            .cmp(&self.collation_key(b))
            .then_with(|| a.cmp(b))
    }

    /// Primary collation weights for `text`
    #[must_use]
    pub fn collation_key(self, text: &str) -> Vec<CollationWeight> {
        self.fold_case(text)
            .chars()
            .filter_map(|c| self.primary_weight(c))
            .collect()
    }

    fn primary_weight(self, c: char) -> Option<CollationWeight> {
        if c.is_whitespace() {
            return Some(CollationWeight::Space);
        }
        if let Some(digit) = c.to_digit(10) {
            return Some(CollationWeight::Digit(digit));
        }
        let letter = match self {
            Self::Turkish => strip_circumflex(c),
            Self::English => fold_latin_diacritic(c),
        };
        let position = match self {
            Self::Turkish => TURKISH_ALPHABET.iter().position(|&l| l == letter),
            Self::English => letter
                .is_ascii_lowercase()
                .then(|| usize::from(letter as u8 - b'a')),
        };
        match position {
            Some(index) => Some(CollationWeight::Letter(index as u32)),
            // Combining marks carry no primary weight
            None if is_combining_mark(letter) => None,
            None if letter.is_alphabetic() => Some(CollationWeight::OtherLetter(letter as u32)),
            None => Some(CollationWeight::Symbol(letter as u32)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" | "turkish" => Ok(Self::Turkish),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// One primary collation weight; variant order is the cross-class ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollationWeight {
    /// Whitespace sorts first
    Space,
    /// Punctuation and symbols, by code point
    Symbol(u32),
    /// Decimal digits, by value
    Digit(u32),
    /// Letters of the language alphabet, by alphabet position
    Letter(u32),
    /// Letters outside the language alphabet, by code point
    OtherLetter(u32),
}

const fn strip_circumflex(c: char) -> char {
    match c {
        'â' => 'a',
        'î' => 'i',
        'û' => 'u',
        other => other,
    }
}

const fn fold_latin_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ğ' => 'g',
        'ı' | 'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ş' => 's',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

const fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
