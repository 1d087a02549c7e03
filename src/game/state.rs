//! Round state types.

use crate::hand::DealerHand;

/// Where the table is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Between rounds.
    Idle,
    /// Checking whether the shoe needs a reshuffle.
    ShuffleCheck,
    /// Collecting bets.
    Betting,
    /// Dealing the opening two cards.
    Dealing,
    /// Offering insurance against a dealer Ace.
    Insurance,
    /// Peeking for a dealer natural.
    DealerBlackjackCheck,
    /// Players act on their hands.
    PlayerTurns,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Paying out.
    Settlement,
    /// Round is finished.
    Complete,
}

/// The state that lives only for one round.
#[derive(Debug, Clone)]
pub(crate) struct Round {
    /// Round number, starting at 1.
    pub number: u32,
    /// Indices of the players who bet this round, in seat order.
    pub seats: Vec<usize>,
    /// The dealer's hand.
    pub dealer: DealerHand,
}

impl Round {
    pub const fn new(number: u32, seats: Vec<usize>) -> Self {
        Self {
            number,
            seats,
            dealer: DealerHand::new(),
        }
    }
}
