//! A terminal blackjack table: one dealer, one human seat, and a row of
//! robots playing basic strategy from a six-deck shoe.
//!
//! The crate provides a [`Game`] type that runs the full round flow,
//! including betting, insurance, player turns with doubling and splitting,
//! dealer play, and settlement. Everything the human sees or answers goes
//! through the [`Frontend`] trait; [`terminal::TerminalFrontend`] is the
//! ANSI terminal implementation used by the `bjsim` binary.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use bjsim::terminal::TerminalFrontend;
//! use bjsim::{Game, GameOptions};
//!
//! let mut frontend = TerminalFrontend::new(io::stdin().lock(), io::stdout());
//! let mut game = Game::new(GameOptions::default(), 42);
//! let standings = game.run(&mut frontend)?;
//! # let _ = standings;
//! # Ok::<(), bjsim::GameError>(())
//! ```

pub mod card;
pub mod error;
pub mod frontend;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod settlement;
pub mod shoe;
pub mod strategy;
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, GameError, InsuranceError, Interrupted, ShoeError};
pub use frontend::{Event, Frontend};
pub use game::{Game, RoundPhase};
pub use hand::{DealerHand, Hand};
pub use options::GameOptions;
pub use player::{Player, PlayerKind};
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult, Standing};
pub use shoe::Shoe;
pub use strategy::Action;
