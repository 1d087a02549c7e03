//! Seats at the table.

use crate::error::{BetError, InsuranceError};
use crate::hand::Hand;

/// Who makes the decisions for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Decisions come from the frontend.
    Human,
    /// Decisions come from basic strategy.
    Robot,
}

/// A player and everything they have on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    bankroll: usize,
    hands: Vec<Hand>,
    current_hand: usize,
    insurance: usize,
}

impl Player {
    /// Creates a player with an empty seat.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind, bankroll: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            bankroll,
            hands: Vec::new(),
            current_hand: 0,
            insurance: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the frontend plays this seat.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    /// Returns the money not currently on the table.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns whether the bankroll covers `amount`.
    #[must_use]
    pub const fn can_cover(&self, amount: usize) -> bool {
        self.bankroll >= amount
    }

    /// Returns the player's hands for this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns a hand by index.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns a mutable hand by index.
    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns all hands mutably.
    pub fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn current_hand(&self) -> usize {
        self.current_hand
    }

    /// Points the turn cursor at `index`.
    pub const fn set_current_hand(&mut self, index: usize) {
        self.current_hand = index;
    }

    /// Number of splits made this round.
    #[must_use]
    pub fn splits(&self) -> usize {
        self.hands.len().saturating_sub(1)
    }

    /// Returns the insurance stake (0 when uninsured).
    #[must_use]
    pub const fn insurance(&self) -> usize {
        self.insurance
    }

    /// Returns whether the player bought insurance this round.
    #[must_use]
    pub const fn is_insured(&self) -> bool {
        self.insurance > 0
    }

    /// Places the opening bet for a round.
    ///
    /// Deducts the bet and replaces the hands with a single empty hand.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] when the bankroll is short.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.hands = vec![Hand::new(amount)];
        self.current_hand = 0;
        self.insurance = 0;
        Ok(())
    }

    /// Buys insurance worth half the opening bet.
    ///
    /// Returns the stake.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet is on the table or the bankroll cannot
    /// cover the stake.
    pub fn take_insurance(&mut self) -> Result<usize, InsuranceError> {
        let stake = self.hands.first().ok_or(InsuranceError::NoBet)?.bet() / 2;

        if !self.can_cover(stake) {
            return Err(InsuranceError::InsufficientFunds);
        }

        self.bankroll -= stake;
        self.insurance = stake;
        Ok(stake)
    }

    /// Takes `amount` off the bankroll.
    pub(crate) const fn debit(&mut self, amount: usize) {
        self.bankroll -= amount;
    }

    /// Adds `amount` to the bankroll.
    pub const fn credit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    /// Appends a hand created by splitting.
    pub(crate) fn push_hand(&mut self, hand: Hand) {
        self.hands.push(hand);
    }

    /// Clears the round's hands and insurance.
    pub fn clear_round(&mut self) {
        self.hands.clear();
        self.current_hand = 0;
        self.insurance = 0;
    }
}
