//! Per-cell feedback and keyboard hint rules
//!
//! A completed row is scored cell by cell against the puzzle word:
//! - Correct: same letter at the same position
//! - `PresentElsewhere`: letter occurs somewhere else in the word
//! - Absent: letter does not occur in the word
//!
//! Rows that have not been submitted yet stay `Default`.

use super::Word;

/// Colour of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// Not evaluated yet (empty, or part of the row being typed)
    #[default]
    Default,
    Correct,
    PresentElsewhere,
    Absent,
}

impl CellColor {
    /// Share-text symbol for this colour
    ///
    /// `Default` cells have no symbol and render as an empty string.
    #[must_use]
    pub const fn to_emoji(self) -> &'static str {
        match self {
            Self::Correct => "🟩",
            Self::PresentElsewhere => "🟨",
            Self::Absent => "⬛",
            Self::Default => "",
        }
    }
}

/// Best classification seen for a letter, used to tint the keyboard
///
/// Ordered so that `max` picks the most informative hint:
/// `Unused < Absent < PresentElsewhere < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum KeyHint {
    #[default]
    Unused,
    Absent,
    PresentElsewhere,
    Correct,
}

impl From<CellColor> for KeyHint {
    fn from(color: CellColor) -> Self {
        match color {
            CellColor::Default => Self::Unused,
            CellColor::Correct => Self::Correct,
            CellColor::PresentElsewhere => Self::PresentElsewhere,
            CellColor::Absent => Self::Absent,
        }
    }
}

/// How `PresentElsewhere` is decided for repeated letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// A letter is present elsewhere if the word contains it at all.
    ///
    /// Guessing two `e`s against a word with one `e` can mark both.
    #[default]
    Membership,
    /// Classic rule: exact matches consume occurrences first, then
    /// present-elsewhere hits are limited to the occurrences left over.
    CountLimited,
}

/// Score a fully typed row against the answer
///
/// Cells past the end of `guess` or past the end of the answer are `Default`.
///
/// # Examples
/// ```
/// use wordle_game::core::{CellColor, ScoringRule, Word, score_row};
///
/// let answer = Word::new("hello").unwrap();
/// let colors = score_row(b"world", &answer, ScoringRule::Membership);
/// assert_eq!(
///     colors,
///     vec![
///         CellColor::Absent,
///         CellColor::PresentElsewhere,
///         CellColor::Absent,
///         CellColor::Correct,
///         CellColor::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn score_row(guess: &[u8], answer: &Word, rule: ScoringRule) -> Vec<CellColor> {
    match rule {
        ScoringRule::Membership => guess
            .iter()
            .enumerate()
            .map(|(i, &letter)| match answer.char_at(i) {
                Some(expected) if expected == letter => CellColor::Correct,
                Some(_) if answer.has_letter(letter) => CellColor::PresentElsewhere,
                Some(_) => CellColor::Absent,
                None => CellColor::Default,
            })
            .collect(),
        ScoringRule::CountLimited => score_count_limited(guess, answer),
    }
}

fn score_count_limited(guess: &[u8], answer: &Word) -> Vec<CellColor> {
    let mut result = vec![CellColor::Absent; guess.len()];
    let mut answer_available = answer.char_counts();

    // First pass: exact matches consume their occurrence
    for (i, &letter) in guess.iter().enumerate() {
        match answer.char_at(i) {
            Some(expected) if expected == letter => {
                result[i] = CellColor::Correct;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
            Some(_) => {}
            None => result[i] = CellColor::Default,
        }
    }

    // Second pass: present-elsewhere from what is left
    for (i, &letter) in guess.iter().enumerate() {
        if result[i] == CellColor::Absent
            && let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            result[i] = CellColor::PresentElsewhere;
            *count -= 1;
        }
    }

    result
}

/// Render a row of colours as share symbols
///
/// Returns an empty string when no cell in the row has been scored.
#[must_use]
pub fn row_to_emoji(colors: &[CellColor]) -> String {
    colors.iter().map(|color| color.to_emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use CellColor::{Absent, Correct, PresentElsewhere};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn exact_guess_is_all_correct() {
        let answer = word("crane");
        for rule in [ScoringRule::Membership, ScoringRule::CountLimited] {
            assert_eq!(score_row(b"crane", &answer, rule), vec![Correct; 5]);
        }
    }

    #[test]
    fn disjoint_guess_is_all_absent() {
        let answer = word("hello");
        assert_eq!(
            score_row(b"brick", &answer, ScoringRule::Membership),
            vec![Absent; 5]
        );
    }

    #[test]
    fn membership_marks_every_repeated_letter() {
        // One `e` in the answer, two in the guess: both light up
        let answer = word("crane");
        let colors = score_row(b"eerie", &answer, ScoringRule::Membership);
        assert_eq!(
            colors,
            vec![PresentElsewhere, PresentElsewhere, PresentElsewhere, Absent, Correct]
        );
    }

    #[test]
    fn count_limited_consumes_occurrences() {
        // Same guess under the classic rule: the final `e` is correct and
        // uses up the only `e`, so the leading ones are absent
        let answer = word("crane");
        let colors = score_row(b"eerie", &answer, ScoringRule::CountLimited);
        assert_eq!(colors, vec![Absent, Absent, PresentElsewhere, Absent, Correct]);
    }

    #[test]
    fn count_limited_duplicates_with_green() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let answer = word("floor");
        let colors = score_row(b"robot", &answer, ScoringRule::CountLimited);
        assert_eq!(
            colors,
            vec![PresentElsewhere, PresentElsewhere, Absent, Correct, Absent]
        );
    }

    #[test]
    fn key_hint_ordering_prefers_correct() {
        assert!(KeyHint::Correct > KeyHint::PresentElsewhere);
        assert!(KeyHint::PresentElsewhere > KeyHint::Absent);
        assert!(KeyHint::Absent > KeyHint::Unused);
        assert_eq!(KeyHint::from(CellColor::Default), KeyHint::Unused);
    }

    #[test]
    fn emoji_row() {
        assert_eq!(
            row_to_emoji(&[Correct, PresentElsewhere, Absent]),
            "🟩🟨⬛"
        );
        assert_eq!(row_to_emoji(&[CellColor::Default; 5]), "");
    }
}
