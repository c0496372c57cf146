//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{print_replay, replay};
pub use simple::{run_simple, run_simple_with};

use crate::core::Key;
use crate::engine::{GameEngine, Outcome};

/// Type a whole guess and submit it
///
/// If the engine rejects the submit (too few valid letters) the partial row
/// is cleared again so the next guess starts from an empty row.
pub fn enter_guess(game: &mut GameEngine, guess: &str) -> Outcome {
    for key in Key::typing(guess) {
        game.submit_key(key);
    }

    let outcome = game.submit_key(Key::Submit);
    if outcome == Outcome::Ignored {
        while game.submit_key(Key::Backspace) == Outcome::Erased {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{Cursor, GameConfig};

    fn game() -> GameEngine {
        GameEngine::with_word(Word::new("hello").unwrap(), GameConfig::default()).unwrap()
    }

    #[test]
    fn enter_guess_submits_full_row() {
        let mut game = game();
        assert_eq!(enter_guess(&mut game, "world"), Outcome::Advanced);
        assert_eq!(enter_guess(&mut game, "hello"), Outcome::Won);
    }

    #[test]
    fn rejected_guess_leaves_empty_row() {
        let mut game = game();
        assert_eq!(enter_guess(&mut game, "he1lo"), Outcome::Ignored);
        assert_eq!(game.cursor(), Cursor::default());
        assert!(game.grid().is_row_empty(0));
    }
}
