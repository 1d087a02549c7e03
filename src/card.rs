//! Playing cards.

use core::fmt;

/// One of the four French suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A card as dealt from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Suit.
    pub suit: Suit,
    /// Rank from 1 (Ace) to 13 (King).
    pub rank: u8,
}

impl Card {
    /// Creates a card. Ranks outside 1..=13 are kept as given and count as
    /// zero.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the blackjack value of the card, counting an Ace as 11.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns the rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub fn label(&self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            rank => rank.to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.suit.symbol())
    }
}

/// Cards in one deck.
pub const DECK_SIZE: usize = 52;
