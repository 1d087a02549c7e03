//! Payout calculation.

use crate::hand::{DealerHand, Hand};
use crate::result::HandOutcome;

/// The parts of the dealer's final hand that settlement looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerSummary {
    /// Final total.
    pub total: u8,
    /// Whether the dealer went over 21.
    pub busted: bool,
    /// Whether the dealer holds a natural.
    pub blackjack: bool,
}

impl From<&DealerHand> for DealerSummary {
    fn from(dealer: &DealerHand) -> Self {
        Self {
            total: dealer.total(),
            busted: dealer.is_busted(),
            blackjack: dealer.is_blackjack(),
        }
    }
}

/// Amount returned for a natural: the stake plus 3:2, rounded down.
#[must_use]
pub const fn blackjack_payout(bet: usize) -> usize {
    bet + bet * 3 / 2
}

/// Amount returned for an insurance stake when the dealer has blackjack.
#[must_use]
pub const fn insurance_payout(stake: usize) -> usize {
    stake * 3
}

/// Settles `hand` against the dealer, returning the outcome and the amount
/// credited back to the bankroll (stake included).
///
/// A bust loses before anything else is looked at; then a natural against a
/// non-natural, then a dealer bust, then the totals. A natural is only
/// special against a non-natural, so any 21 ties a dealer natural.
#[must_use]
pub fn settle_hand(hand: &Hand, dealer: DealerSummary) -> (HandOutcome, usize) {
    let bet = hand.bet();
    let total = hand.total();

    if hand.is_busted() {
        (HandOutcome::Lose, 0)
    } else if hand.is_blackjack() && !dealer.blackjack {
        (HandOutcome::Blackjack, blackjack_payout(bet))
    } else if dealer.busted {
        (HandOutcome::Win, bet * 2)
    } else if hand.is_blackjack() && dealer.blackjack {
        (HandOutcome::Push, bet)
    } else if total > dealer.total {
        (HandOutcome::Win, bet * 2)
    } else if total < dealer.total {
        (HandOutcome::Lose, 0)
    } else {
        (HandOutcome::Push, bet)
    }
}
