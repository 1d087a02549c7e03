//! The multi-deck shoe.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ShoeError;

/// A shuffled multi-deck shoe with penetration tracking.
///
/// Cards are dealt from the back of the internal vector. The shoe remembers
/// how many cards it has dealt since the last reshuffle so the table can
/// decide when to bring in a fresh shoe.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    dealt: usize,
    penetration: f64,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    ///
    /// `penetration` is the fraction of the shoe dealt before
    /// [`needs_shuffle`](Self::needs_shuffle) reports true.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, penetration: f64, rng: &mut R) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            decks,
            dealt: 0,
            penetration,
        };
        shoe.reset(rng);
        shoe
    }

    fn build(decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards
    }

    /// Rebuilds the full shoe, shuffles it, and zeroes the dealt counter.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut cards = Self::build(self.decks);
        cards.shuffle(rng);
        self.cards = cards;
        self.dealt = 0;
    }

    /// Deals one card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] when no cards remain.
    pub fn deal(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop().ok_or(ShoeError::Empty)?;
        self.dealt += 1;
        Ok(card)
    }

    /// Number of cards in a full shoe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Number of cards dealt since the last reshuffle.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.dealt
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Number of dealt cards that triggers a reshuffle.
    #[must_use]
    pub fn cut_card(&self) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let threshold = self.total_cards() as f64 * self.penetration;
        threshold as usize
    }

    /// Returns whether the cut card has been reached.
    #[must_use]
    pub fn needs_shuffle(&self) -> bool {
        self.dealt >= self.cut_card()
    }

    /// Replaces the remaining cards so that `draws` are dealt in order.
    ///
    /// The dealt counter is left alone.
    pub fn stack(&mut self, draws: &[Card]) {
        let mut cards = draws.to_vec();
        cards.reverse();
        self.cards = cards;
    }
}
