//! Input plausibility check run before any classification.
//!
//! Rejects text that cannot be a human symptom description: too short,
//! numeric noise, repeated-character spam, keyboard mashing, no vowels,
//! or a well-known test phrase.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::enums::Language;

const MIN_LENGTH: usize = 3;
const MAX_DIGIT_RATIO: f64 = 0.8;
const SPAM_MIN_LENGTH: usize = 5;
const SPAM_MAX_DISTINCT: usize = 2;
const MASHING_MAX_LENGTH: usize = 15;

const MASHING_SEQUENCES: &[&str] = &[
    "asdf", "qwer", "zxcv", "hjkl", "uiop", "1234", "5678", "9012", "abcd",
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú', 'ü'];

const TEST_PHRASES: &[&str] = &[
    "test",
    "testing",
    "asdf",
    "hello",
    "hi",
    "hi there",
    "hey",
    "prueba",
    "hola",
    "qwerty",
    "abc",
    "xyz",
    "lorem ipsum",
];

/// Which plausibility rule rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    TooShort,
    MostlyDigits,
    RepeatedCharacters,
    KeyboardMashing,
    NoVowels,
    TestPhrase,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::MostlyDigits => "mostly_digits",
            Self::RepeatedCharacters => "repeated_characters",
            Self::KeyboardMashing => "keyboard_mashing",
            Self::NoVowels => "no_vowels",
            Self::TestPhrase => "test_phrase",
        }
    }
}

/// `true` when the text looks like a genuine symptom description.
pub fn validate(text: &str) -> bool {
    check(text).is_ok()
}

/// Run every plausibility rule in order; the first failing rule wins.
pub fn check(text: &str) -> Result<(), InvalidReason> {
    let lower = text.trim().to_lowercase();
    let length = lower.chars().count();

    if length < MIN_LENGTH {
        return Err(InvalidReason::TooShort);
    }

    let digits = lower.chars().filter(|c| c.is_ascii_digit()).count();
    if digits as f64 / length as f64 >= MAX_DIGIT_RATIO {
        return Err(InvalidReason::MostlyDigits);
    }

    let distinct: HashSet<char> = lower.chars().filter(|c| !c.is_whitespace()).collect();
    if distinct.len() <= SPAM_MAX_DISTINCT && length > SPAM_MIN_LENGTH {
        return Err(InvalidReason::RepeatedCharacters);
    }

    if length < MASHING_MAX_LENGTH && MASHING_SEQUENCES.iter().any(|s| lower.contains(s)) {
        return Err(InvalidReason::KeyboardMashing);
    }

    if !lower.chars().any(|c| VOWELS.contains(&c)) {
        return Err(InvalidReason::NoVowels);
    }

    if TEST_PHRASES.contains(&lower.as_str()) {
        return Err(InvalidReason::TestPhrase);
    }

    Ok(())
}

/// Guidance shown when the input is rejected.
pub fn guidance_message(lang: Language) -> &'static str {
    match lang {
        Language::Es => {
            "Por favor describa sus síntomas con palabras. Por ejemplo: \
             'dolor de cabeza', 'dolor de estómago', 'me siento cansado'."
        }
        Language::En => {
            "Please describe your symptoms in words. For example: \
             'headache', 'stomach pain', 'feeling tired'."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_descriptions() {
        assert!(validate("my stomach hurts"));
        assert!(validate("I have a mild headache since yesterday"));
        assert!(validate("me duele el estómago"));
        assert!(validate("Fever of 102 for 3 days"));
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(check(""), Err(InvalidReason::TooShort));
        assert_eq!(check("  a "), Err(InvalidReason::TooShort));
        assert_eq!(check("ok"), Err(InvalidReason::TooShort));
    }

    #[test]
    fn rejects_numeric_noise() {
        assert_eq!(check("1029384756"), Err(InvalidReason::MostlyDigits));
        assert_eq!(check("98765 4321"), Err(InvalidReason::MostlyDigits));
    }

    #[test]
    fn exactly_eighty_percent_digits_is_rejected() {
        assert_eq!(check("9876a"), Err(InvalidReason::MostlyDigits));
        assert_eq!(check("98765432ab"), Err(InvalidReason::MostlyDigits));
        // 7 of 10 digits stays below the threshold
        assert!(validate("9876543 ow"));
    }

    #[test]
    fn rejects_repeated_characters() {
        assert_eq!(check("aaaaaaa"), Err(InvalidReason::RepeatedCharacters));
        assert_eq!(check("ab ab ab ab"), Err(InvalidReason::RepeatedCharacters));
        // five characters is not long enough to count as spam
        assert!(validate("aaaaa"));
    }

    #[test]
    fn rejects_keyboard_mashing_only_when_short() {
        assert_eq!(check("asdfgh"), Err(InvalidReason::KeyboardMashing));
        assert_eq!(check("qwerty uiop"), Err(InvalidReason::KeyboardMashing));
        assert!(validate("my abcd muscles ache a lot today"));
    }

    #[test]
    fn rejects_text_without_vowels() {
        assert_eq!(check("brr grr pfft"), Err(InvalidReason::NoVowels));
        // y is not a vowel
        assert_eq!(check("my gym"), Err(InvalidReason::NoVowels));
    }

    #[test]
    fn accented_vowels_count() {
        assert!(validate("náú ñññ"));
    }

    #[test]
    fn rejects_test_phrases_case_insensitively() {
        assert_eq!(check("Hello"), Err(InvalidReason::TestPhrase));
        assert_eq!(check("  HI THERE "), Err(InvalidReason::TestPhrase));
        assert_eq!(check("prueba"), Err(InvalidReason::TestPhrase));
        assert!(validate("hello, my back hurts"));
    }

    #[test]
    fn guidance_is_localized() {
        assert!(guidance_message(Language::En).contains("describe your symptoms"));
        assert!(guidance_message(Language::Es).contains("describa sus síntomas"));
    }
}
