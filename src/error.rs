//! Errors for the shoe, the bankroll, and the round flow.

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe ran out of cards.
    #[error("the shoe is empty")]
    Empty,
}

/// Why a bet was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount lies outside the table limits.
    #[error("bet of {amount} is outside the limits {min}..={max}")]
    OutOfRange {
        /// Requested amount.
        amount: usize,
        /// Table minimum.
        min: usize,
        /// Maximum allowed for this player.
        max: usize,
    },
    /// Bankroll is smaller than the bet.
    #[error("bet exceeds the bankroll")]
    InsufficientFunds,
}

/// Why hit, double, or split was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No hand at that index.
    #[error("no such hand")]
    HandNotFound,
    /// Only an undoubled two-card hand may double.
    #[error("only an undoubled two-card hand can double")]
    CannotDouble,
    /// Not a pair.
    #[error("only a pair can be split")]
    CannotSplit,
    /// The seat already split three times this round.
    #[error("no more splits this round")]
    MaxSplitsReached,
    /// Bankroll cannot match the hand's bet again.
    #[error("bankroll cannot match the bet")]
    InsufficientFunds,
    /// The shoe ran out of cards.
    #[error("the shoe is empty")]
    EmptyShoe,
}

impl From<ShoeError> for ActionError {
    fn from(_: ShoeError) -> Self {
        Self::EmptyShoe
    }
}

/// Why insurance was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Bankroll cannot cover half the bet.
    #[error("bankroll cannot cover the insurance stake")]
    InsufficientFunds,
    /// No bet on the table to insure.
    #[error("no bet to insure")]
    NoBet,
}

/// The player walked away while the table waited for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input interrupted")]
pub struct Interrupted;

/// Errors that abort a round or the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The shoe ran dry mid-round.
    #[error("the shoe ran out of cards mid-round")]
    EmptyShoe,
    /// A player action was rejected after its guards passed.
    #[error("action rejected: {0}")]
    Action(ActionError),
    /// Input was interrupted while waiting on the human player.
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

impl From<ShoeError> for GameError {
    fn from(_: ShoeError) -> Self {
        Self::EmptyShoe
    }
}

impl From<ActionError> for GameError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::EmptyShoe => Self::EmptyShoe,
            other => Self::Action(other),
        }
    }
}
