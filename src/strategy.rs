//! Basic strategy for the robot seats.
//!
//! Every function here is a pure lookup on the acting hand, the dealer's up
//! card and (for splits) how many times the player has already split. The
//! dealer's Ace counts as 11.

use core::fmt;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::MAX_SPLITS;

/// A decision on a live hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the bet and draw exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Self; 4] = [Self::Hit, Self::Stand, Self::Double, Self::Split];

    /// Single-letter key used at the prompt.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Hit => 'h',
            Self::Stand => 's',
            Self::Double => 'd',
            Self::Split => 'p',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
        };
        f.write_str(name)
    }
}

/// Returns whether basic strategy hits `hand` against `up_card`.
#[must_use]
pub fn should_hit(hand: &Hand, up_card: &Card) -> bool {
    let total = hand.total();
    let dealer = up_card.value();

    if total >= 21 {
        return false;
    }

    if hand.is_soft() {
        match total {
            ..=17 => true,
            18 => dealer >= 9,
            _ => false,
        }
    } else {
        match total {
            ..=11 => true,
            12 => matches!(dealer, 2 | 3 | 7..=11),
            13..=16 => dealer >= 7,
            _ => false,
        }
    }
}

/// Returns whether basic strategy doubles `hand` against `up_card`.
///
/// Always false when the hand is not eligible to double.
#[must_use]
pub fn should_double(hand: &Hand, up_card: &Card) -> bool {
    if !hand.can_double() {
        return false;
    }

    let total = hand.total();
    let dealer = up_card.value();

    if hand.is_soft() {
        match total {
            13 | 14 => matches!(dealer, 5 | 6),
            15 | 16 => matches!(dealer, 4..=6),
            17 | 18 => matches!(dealer, 3..=6),
            _ => false,
        }
    } else {
        match total {
            9 => matches!(dealer, 3..=6),
            10 => dealer <= 9,
            11 => true,
            _ => false,
        }
    }
}

/// Returns whether basic strategy splits `hand` against `up_card` after
/// `splits` earlier splits.
#[must_use]
pub fn should_split(hand: &Hand, up_card: &Card, splits: usize) -> bool {
    if !hand.can_split() || splits >= MAX_SPLITS {
        return false;
    }

    let dealer = up_card.value();

    match hand.cards()[0].value() {
        11 | 8 => true,
        2 | 3 | 7 => dealer <= 7,
        4 => matches!(dealer, 5 | 6),
        6 => dealer <= 6,
        9 => dealer <= 9 && dealer != 7,
        _ => false,
    }
}

/// Robots never take insurance.
#[must_use]
pub const fn should_take_insurance(_hand: &Hand) -> bool {
    false
}

/// Picks the robot's action for `hand`.
///
/// Splitting is considered first, then doubling, then hitting; anything else
/// stands. Splits and doubles also need `bankroll` to cover another bet.
#[must_use]
pub fn decide(hand: &Hand, up_card: &Card, splits: usize, bankroll: usize) -> Action {
    let covered = bankroll >= hand.bet();

    if covered && should_split(hand, up_card, splits) {
        Action::Split
    } else if covered && should_double(hand, up_card) {
        Action::Double
    } else if should_hit(hand, up_card) {
        Action::Hit
    } else {
        Action::Stand
    }
}
