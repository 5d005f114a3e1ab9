//! Substring + edit-distance pattern matcher shared by the detectors.
//!
//! Both sides of a comparison go through [`normalize`] first, so accented
//! and unaccented spellings compare equal. A literal
//! substring hit is an exact match (score 100) and always outranks any
//! fuzzy result. Fuzzy matching is word based and bounded by Levenshtein
//! distance so that short words never match loosely.

use serde::Serialize;

/// Score given to a literal substring match.
pub const EXACT_SCORE: u32 = 100;

/// Single-word patterns shorter than this are matched exactly only.
const MIN_FUZZY_WORD_LEN: usize = 5;

/// Pattern words shorter than this are skipped in multi-word patterns.
const MIN_SIGNIFICANT_WORD_LEN: usize = 3;

/// Maximum length difference between a token and a pattern word.
const MAX_LEN_DIFF: usize = 2;

const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{2018}', '`', '\u{00B4}'];

/// Outcome of comparing one pattern against one haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub score: u32,
    pub exact: bool,
}

impl MatchResult {
    pub const NONE: MatchResult = MatchResult {
        matched: false,
        score: 0,
        exact: false,
    };

    fn exact() -> Self {
        Self {
            matched: true,
            score: EXACT_SCORE,
            exact: true,
        }
    }

    fn fuzzy(score: u32) -> Self {
        Self {
            matched: true,
            score,
            exact: false,
        }
    }
}

/// Lowercase, strip apostrophe variants, fold vowel accents, trim.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .map(fold_accent)
        .collect();
    stripped.trim().to_string()
}

/// `ñ` is kept: it is a distinct letter, not an accented `n`.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        _ => c,
    }
}

/// Compare an already-normalized haystack against an already-normalized pattern.
pub fn match_pattern(haystack: &str, pattern: &str) -> MatchResult {
    if pattern.is_empty() {
        return MatchResult::NONE;
    }

    if haystack.contains(pattern) {
        return MatchResult::exact();
    }

    let tokens = tokenize(haystack);
    let words: Vec<&str> = pattern.split_whitespace().collect();

    if words.len() == 1 {
        match_single_word(&tokens, words[0])
    } else {
        match_multi_word(&tokens, &words)
    }
}

fn match_single_word(tokens: &[&str], word: &str) -> MatchResult {
    if char_len(word) < MIN_FUZZY_WORD_LEN {
        return MatchResult::NONE;
    }

    match first_close_token(tokens, word) {
        Some(distance) => MatchResult::fuzzy(50u32.saturating_sub(10 * distance as u32)),
        None => MatchResult::NONE,
    }
}

fn match_multi_word(tokens: &[&str], words: &[&str]) -> MatchResult {
    let mut score = 0u32;
    let mut significant = 0usize;

    for word in words {
        if char_len(word) < MIN_SIGNIFICANT_WORD_LEN {
            continue;
        }
        significant += 1;

        if tokens.iter().any(|t| t == word) {
            score += 10;
            continue;
        }

        match first_close_token(tokens, word) {
            Some(distance) => score += 5u32.saturating_sub(distance as u32),
            None => return MatchResult::NONE,
        }
    }

    if significant == 0 {
        return MatchResult::NONE;
    }

    MatchResult::fuzzy(score)
}

/// Edit distance of the first token close enough to `word`, if any.
fn first_close_token(tokens: &[&str], word: &str) -> Option<usize> {
    let word_len = char_len(word);
    let allowed = max_distance(word_len);

    tokens
        .iter()
        .filter(|t| char_len(t).abs_diff(word_len) <= MAX_LEN_DIFF)
        .map(|t| strsim::levenshtein(t, word))
        .find(|d| *d <= allowed)
}

fn max_distance(word_len: usize) -> usize {
    if word_len <= 4 {
        1
    } else {
        2
    }
}

/// Whitespace tokens with surrounding punctuation removed.
fn tokenize(haystack: &str) -> Vec<&str> {
    haystack
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_trims_and_strips_apostrophes() {
        assert_eq!(normalize("  I CAN'T Breathe "), "i cant breathe");
        assert_eq!(normalize("can\u{2019}t"), "cant");
        assert_eq!(normalize("don`t"), "dont");
    }

    #[test]
    fn normalize_folds_vowel_accents_but_keeps_enye() {
        assert_eq!(normalize("Pérdida de VISIÓN"), "perdida de vision");
        assert_eq!(normalize("pingüino"), "pinguino");
        assert_eq!(normalize("año"), "año");
    }

    #[test]
    fn accented_pattern_matches_unaccented_text() {
        let m = match_pattern(&normalize("me duele el estomago"), &normalize("estómago"));
        assert!(m.exact);
    }

    #[test]
    fn substring_is_exact_with_full_score() {
        let m = match_pattern("i am tired", "tired");
        assert!(m.matched);
        assert!(m.exact);
        assert_eq!(m.score, EXACT_SCORE);
    }

    #[test]
    fn misspelled_word_matches_fuzzily() {
        let m = match_pattern("i feel tierd", "tired");
        assert!(m.matched);
        assert!(!m.exact);
        assert_eq!(m.score, 30);
    }

    #[test]
    fn exact_outranks_fuzzy_for_same_pattern() {
        let exact = match_pattern("i am tired", "tired");
        let fuzzy = match_pattern("i feel tierd", "tired");
        assert!(exact.score > fuzzy.score);
    }

    #[test]
    fn short_single_word_is_exact_only() {
        assert!(!match_pattern("my skin has a rosh", "rash").matched);
        assert!(match_pattern("a rash on my arm", "rash").matched);
    }

    #[test]
    fn single_word_respects_length_window() {
        // "tiredness" is 4 characters longer than "tired": never compared
        let m = match_pattern("tyredness", "tired");
        assert!(!m.matched);
    }

    #[test]
    fn single_word_distance_limit() {
        // distance 3 is outside the allowance for a 5-letter word
        assert!(!match_pattern("i feel tyrxx", "tired").matched);
        let m = match_pattern("i feel tirde", "tired");
        assert!(m.matched);
        assert_eq!(m.score, 30);
        let m = match_pattern("i feel tire", "tired");
        assert_eq!(m.score, 40);
    }

    #[test]
    fn multi_word_requires_every_significant_word() {
        let m = match_pattern("my stomack really hurts", "stomach hurts");
        assert!(m.matched);
        assert!(!m.exact);
        // "hurts" exact (+10), "stomack" distance 1 (+4)
        assert_eq!(m.score, 14);

        assert!(!match_pattern("my stomack is fine", "stomach hurts").matched);
    }

    #[test]
    fn multi_word_skips_short_words() {
        // "in" is skipped; "pain" and "belly" must match
        let m = match_pattern("belly has pain", "pain in belly");
        assert!(m.matched);
        assert_eq!(m.score, 20);
    }

    #[test]
    fn punctuation_does_not_block_token_match() {
        let m = match_pattern("so tierd, honestly", "tired");
        assert!(m.matched);
    }

    #[test]
    fn unmatched_returns_zero_score() {
        let m = match_pattern("everything is fine", "stomach pain");
        assert_eq!(m, MatchResult::NONE);
    }

    #[test]
    fn empty_pattern_never_matches() {
        assert_eq!(match_pattern("anything", ""), MatchResult::NONE);
    }

    #[test]
    fn matching_is_deterministic() {
        let a = match_pattern("pain in my lower back", "pain in back");
        let b = match_pattern("pain in my lower back", "pain in back");
        assert_eq!(a, b);
    }
}
