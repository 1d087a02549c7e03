//! What settlement hands back: per hand, per player, per round.

use crate::card::Card;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Beat the dealer's total, or the dealer busted. Pays even money.
    Win,
    /// Busted, or fell short of the dealer.
    Lose,
    /// Stake returned.
    Push,
    /// A two-card 21 against a dealer without one. Pays 3:2.
    Blackjack,
}

/// How one hand settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Position of the hand in the seat's list; split hands follow the first.
    pub hand_index: usize,
    /// Outcome.
    pub outcome: HandOutcome,
    /// Final stake, doubled if the hand doubled down.
    pub bet: usize,
    /// Credited to the bankroll, stake included.
    pub payout: usize,
    /// Hand total.
    pub player_value: u8,
    /// Dealer total.
    pub dealer_value: u8,
}

/// One seat's settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat name.
    pub name: String,
    /// One entry per hand.
    pub hands: Vec<HandResult>,
    /// Everything credited this round, insurance included.
    pub total_payout: usize,
    /// Payout minus every stake put up this round.
    pub net: isize,
    /// Insurance stake, or 0.
    pub insurance_bet: usize,
    /// Three times the stake on a dealer natural, else 0.
    pub insurance_payout: usize,
    /// Bankroll after the payout.
    pub bankroll: usize,
}

/// Everything that happened at settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Results for each player who bet this round.
    pub players: Vec<PlayerResult>,
    /// Dealer's cards as they ended.
    pub dealer_cards: Vec<Card>,
    /// Dealer's final total.
    pub dealer_value: u8,
    /// Dealer went over 21.
    pub dealer_bust: bool,
    /// Dealer turned over a natural.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Returns the result for the named player.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.name == name)
    }
}

/// A player's standing when the game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Seat name.
    pub name: String,
    /// Final bankroll.
    pub bankroll: usize,
    /// Bankroll minus the starting bankroll.
    pub profit: isize,
}
