//! Game state and key handling

use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, info};

use super::{ConfigError, GameConfig, Grid, KeyboardHints, MAX_TRIES};
use crate::core::{CellColor, Key, KeyHint, Word, row_to_emoji, score_row};

/// Overall game outcome
///
/// Leaves `Playing` at most once and never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Position of the next cell to be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// What a call to [`GameEngine::submit_key`] did
///
/// Front ends react to `Won` and `Lost` to show their end-of-game surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// A letter was written into the active row
    Typed,
    /// The last letter of the active row was cleared
    Erased,
    /// A row was completed and the game goes on
    Advanced,
    /// A row was completed and it matched the puzzle word
    Won,
    /// The last row was completed without a match
    Lost,
}

/// One game: puzzle word, attempt grid, cursor and status
///
/// # Examples
/// ```
/// use wordle_game::core::{Key, Word};
/// use wordle_game::engine::{GameConfig, GameEngine, Outcome, Status};
///
/// let word = Word::new("hello").unwrap();
/// let mut game = GameEngine::with_word(word, GameConfig::default()).unwrap();
///
/// for key in Key::typing("hello") {
///     game.submit_key(key);
/// }
/// assert_eq!(game.submit_key(Key::Submit), Outcome::Won);
/// assert_eq!(game.status(), Status::Won);
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine {
    word: Word,
    config: GameConfig,
    grid: Grid,
    cursor: Cursor,
    status: Status,
}

impl GameEngine {
    /// Start a game with a word picked uniformly at random from `words`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the list is empty, holds an invalid word or
    /// words of different lengths, or if `config.max_tries` is zero or above
    /// [`MAX_TRIES`].
    pub fn initialize<S: AsRef<str>>(words: &[S], config: GameConfig) -> Result<Self, ConfigError> {
        Self::initialize_with_rng(words, config, &mut rand::rng())
    }

    /// Same as [`GameEngine::initialize`] with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// See [`GameEngine::initialize`].
    pub fn initialize_with_rng<S, R>(
        words: &[S],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError>
    where
        S: AsRef<str>,
        R: Rng,
    {
        check_config(&config)?;
        let words = validate_word_list(words)?;
        let word = words
            .choose(rng)
            .cloned()
            .ok_or(ConfigError::EmptyWordList)?;

        debug!(candidates = words.len(), "picked puzzle word");
        Self::with_word(word, config)
    }

    /// Start a game with a known puzzle word
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoTries` if `config.max_tries` is zero and
    /// `ConfigError::TooManyTries` if it exceeds [`MAX_TRIES`].
    pub fn with_word(word: Word, config: GameConfig) -> Result<Self, ConfigError> {
        check_config(&config)?;
        let grid = Grid::new(config.max_tries, word.len());

        info!(
            letters = word.len(),
            tries = config.max_tries,
            "new game started"
        );

        Ok(Self {
            word,
            config,
            grid,
            cursor: Cursor::default(),
            status: Status::Playing,
        })
    }

    /// Apply one key press
    ///
    /// Every input that cannot apply is a silent no-op reported as
    /// [`Outcome::Ignored`]: keys after the game ended, letters into a full
    /// row, backspace on an empty row, submitting an incomplete row, and
    /// anything that is not an ASCII letter.
    pub fn submit_key(&mut self, key: Key) -> Outcome {
        if self.status.is_over() {
            return Outcome::Ignored;
        }

        let outcome = match key {
            Key::Backspace => self.erase(),
            Key::Submit => self.submit_row(),
            Key::Letter(_) => key.letter().map_or(Outcome::Ignored, |letter| self.type_letter(letter)),
        };

        if outcome != Outcome::Ignored {
            debug!(%key, row = self.cursor.row, col = self.cursor.col, "key accepted");
        }
        outcome
    }

    fn type_letter(&mut self, letter: u8) -> Outcome {
        let Cursor { row, col } = self.cursor;
        if row >= self.max_tries() || col >= self.word_len() {
            return Outcome::Ignored;
        }

        self.grid.set(row, col, Some(letter));
        self.cursor.col += 1;
        Outcome::Typed
    }

    fn erase(&mut self) -> Outcome {
        let Cursor { row, col } = self.cursor;
        if col == 0 {
            return Outcome::Ignored;
        }

        self.grid.set(row, col - 1, None);
        self.cursor.col -= 1;
        Outcome::Erased
    }

    fn submit_row(&mut self) -> Outcome {
        let Cursor { row, col } = self.cursor;
        if row >= self.max_tries() || col != self.word_len() {
            return Outcome::Ignored;
        }

        self.cursor = Cursor { row: row + 1, col: 0 };
        info!(row, guess = %self.grid.row_text(row), "row submitted");

        self.update_status(row)
    }

    fn update_status(&mut self, completed_row: usize) -> Outcome {
        let solved = self
            .grid
            .row_letters(completed_row)
            .is_some_and(|letters| self.word.matches(&letters));

        if solved {
            self.status = Status::Won;
            info!(tries = self.cursor.row, "puzzle solved");
            Outcome::Won
        } else if self.cursor.row == self.max_tries() {
            self.status = Status::Lost;
            info!(word = %self.word, "out of tries");
            Outcome::Lost
        } else {
            Outcome::Advanced
        }
    }

    /// Colour of one cell
    ///
    /// Only completed rows are scored; the active row and everything below it
    /// (and any out-of-range coordinate) is `Default`.
    #[must_use]
    pub fn cell_color(&self, row: usize, col: usize) -> CellColor {
        if row >= self.cursor.row || col >= self.word_len() {
            return CellColor::Default;
        }
        self.row_colors(row)
            .get(col)
            .copied()
            .unwrap_or_default()
    }

    /// Colours of a whole row
    #[must_use]
    pub fn row_colors(&self, row: usize) -> Vec<CellColor> {
        if row >= self.cursor.row {
            return vec![CellColor::Default; self.word_len()];
        }
        self.grid.row_letters(row).map_or_else(
            || vec![CellColor::Default; self.word_len()],
            |letters| score_row(&letters, &self.word, self.config.scoring),
        )
    }

    /// Best classification of `letter` across all completed rows
    ///
    /// `Unused` if the letter has not been submitted yet.
    #[must_use]
    pub fn keyboard_classification(&self, letter: char) -> KeyHint {
        self.keyboard().hint(letter)
    }

    /// Hints for the whole alphabet
    #[must_use]
    pub fn keyboard(&self) -> KeyboardHints {
        let mut hints = KeyboardHints::default();
        for row in 0..self.completed_rows() {
            let colors = self.row_colors(row);
            for (cell, color) in self.grid.row(row).iter().zip(colors) {
                if let Some(letter) = cell {
                    hints.record(*letter, color);
                }
            }
        }
        hints
    }

    /// Title line followed by one symbol line per played row
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Key, Word};
    /// use wordle_game::engine::{GameConfig, GameEngine};
    ///
    /// let word = Word::new("hello").unwrap();
    /// let mut game = GameEngine::with_word(word, GameConfig::default()).unwrap();
    /// for key in Key::typing("world").chain([Key::Submit]) {
    ///     game.submit_key(key);
    /// }
    /// assert_eq!(game.share_text(), "Wordle\n⬛🟨⬛🟩⬛");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let lines: Vec<String> = (0..self.max_tries())
            .map(|row| row_to_emoji(&self.row_colors(row)))
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            self.config.title.clone()
        } else {
            format!("{}\n{}", self.config.title, lines.join("\n"))
        }
    }

    /// Whether `(row, col)` is where the next letter goes
    #[must_use]
    pub fn is_active_cell(&self, row: usize, col: usize) -> bool {
        self.status == Status::Playing && self.cursor.row == row && self.cursor.col == col
    }

    /// Shared copy of the grid; later edits do not show through it
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The puzzle word; front ends should only reveal it once the game is over
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.config.max_tries
    }

    /// Rows already submitted
    #[must_use]
    pub const fn completed_rows(&self) -> usize {
        self.cursor.row
    }

    #[must_use]
    pub const fn remaining_tries(&self) -> usize {
        self.config.max_tries.saturating_sub(self.cursor.row)
    }
}

fn check_config(config: &GameConfig) -> Result<(), ConfigError> {
    match config.max_tries {
        0 => Err(ConfigError::NoTries),
        requested if requested > MAX_TRIES => Err(ConfigError::TooManyTries {
            requested,
            max: MAX_TRIES,
        }),
        _ => Ok(()),
    }
}

/// Parse every entry and require one shared length
///
/// # Errors
///
/// Returns `ConfigError` for an empty list, an entry that is not a word, or
/// a length different from the first entry's.
pub fn validate_word_list<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, ConfigError> {
    if words.is_empty() {
        return Err(ConfigError::EmptyWordList);
    }

    // Length in letters of the first parsed word, not its raw byte length
    let mut expected = None;
    words
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            let word = Word::new(entry).map_err(|source| ConfigError::InvalidWord {
                word: entry.to_string(),
                source,
            })?;
            let expected = *expected.get_or_insert(word.len());
            if word.len() != expected {
                return Err(ConfigError::MixedLengths {
                    word: entry.to_string(),
                    expected,
                    found: word.len(),
                });
            }
            Ok(word)
        })
        .collect()
}
