//! Wordle - CLI
//!
//! Word-guessing game with a TUI, a line-based mode and a scripted replay.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{print_replay, replay, run_simple},
    core::ScoringRule,
    engine::{DEFAULT_MAX_TRIES, DEFAULT_TITLE, GameConfig, MAX_TRIES},
    logging::{self, LogTarget},
    wordlists::{DICTIONARY, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word in a handful of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Number of tries per game
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TRIES, value_parser = parse_tries)]
    tries: usize,

    /// Limit present-elsewhere hints to the unmatched occurrences of a letter
    #[arg(long, global = true)]
    strict_duplicates: bool,

    /// Title line of the share text
    #[arg(long, global = true, default_value = DEFAULT_TITLE)]
    title: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score guesses against a known answer and print the result
    Replay {
        /// The hidden word
        #[arg(short, long)]
        answer: String,

        /// Guesses in the order they were played
        guesses: Vec<String>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let scoring = if self.strict_duplicates {
            ScoringRule::CountLimited
        } else {
            ScoringRule::Membership
        };

        GameConfig::default()
            .with_max_tries(self.tries)
            .with_scoring(scoring)
            .with_title(self.title.clone())
    }

    fn log_target(&self) -> LogTarget<'_> {
        match (&self.log_file, &self.command) {
            (Some(path), _) => LogTarget::File(path),
            (None, None | Some(Commands::Play)) => LogTarget::StderrQuiet,
            (None, Some(_)) => LogTarget::Stderr,
        }
    }
}

/// Parse --tries, keeping it within what a game accepts
fn parse_tries(arg: &str) -> Result<usize, String> {
    let tries: usize = arg.parse().map_err(|err| format!("{err}"))?;
    if (1..=MAX_TRIES).contains(&tries) {
        Ok(tries)
    } else {
        Err(format!("must be between 1 and {MAX_TRIES}"))
    }
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: Option<&PathBuf>) -> Result<Vec<String>> {
    match wordlist {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(words_from_slice(DICTIONARY)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_target())?;

    let config = cli.game_config();

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(load_words(cli.wordlist.as_ref())?, config),
        Commands::Simple => run_simple(&load_words(cli.wordlist.as_ref())?, &config),
        Commands::Replay { answer, guesses } => run_replay_command(answer, guesses, config),
    }
}

fn run_play_command(words: Vec<String>, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config).context("cannot start a game")?;
    if let Some(share) = run_tui(app)? {
        println!("{share}");
    }
    Ok(())
}

fn run_replay_command(answer: &str, guesses: &[String], config: GameConfig) -> Result<()> {
    let game = replay(answer, guesses, config)?;
    print_replay(&mut io::stdout().lock(), &game)
}
