//! Keyboard hint aggregation

use crate::core::{CellColor, KeyHint};

/// On-screen keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best hint seen for each letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardHints([KeyHint; 26]);

impl KeyboardHints {
    /// Fold one scored cell into the hints, keeping the best classification
    pub(crate) fn record(&mut self, letter: u8, color: CellColor) {
        if let Some(slot) = Self::index(letter).and_then(|i| self.0.get_mut(i)) {
            *slot = (*slot).max(KeyHint::from(color));
        }
    }

    /// Hint for a letter; `Unused` for anything that is not an ASCII letter
    #[must_use]
    pub fn hint(&self, letter: char) -> KeyHint {
        u8::try_from(letter.to_ascii_lowercase())
            .ok()
            .and_then(Self::index)
            .map_or(KeyHint::Unused, |i| self.0[i])
    }

    /// Every letter with its hint, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyHint)> + '_ {
        ('a'..='z').zip(self.0.iter().copied())
    }

    /// Letters carrying exactly `hint`
    pub fn letters_with(&self, hint: KeyHint) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(move |&(_, h)| h == hint)
            .map(|(letter, _)| letter)
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_best_hint() {
        let mut hints = KeyboardHints::default();
        hints.record(b'e', CellColor::Absent);
        hints.record(b'e', CellColor::Correct);
        hints.record(b'e', CellColor::PresentElsewhere);
        assert_eq!(hints.hint('e'), KeyHint::Correct);
        assert_eq!(hints.hint('E'), KeyHint::Correct);
    }

    #[test]
    fn unknown_letters_are_unused() {
        let mut hints = KeyboardHints::default();
        hints.record(b'1', CellColor::Correct);
        assert_eq!(hints.hint('1'), KeyHint::Unused);
        assert_eq!(hints.hint('\u{e9}'), KeyHint::Unused);
        assert!(hints.iter().all(|(_, hint)| hint == KeyHint::Unused));
    }

    #[test]
    fn layout_covers_alphabet_once() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }

    #[test]
    fn letters_with_filters_by_hint() {
        let mut hints = KeyboardHints::default();
        hints.record(b'b', CellColor::Absent);
        hints.record(b'a', CellColor::Absent);
        hints.record(b'c', CellColor::Correct);
        assert_eq!(
            hints.letters_with(KeyHint::Absent).collect::<String>(),
            "ab"
        );
    }
}
