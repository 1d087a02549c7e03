//! Hands of cards: a player's betting hand and the dealer's hand.

use crate::card::Card;

/// Evaluates a run of cards, returning the total and whether it is soft.
///
/// Aces start at 11 and are demoted to 1 one at a time while the total is
/// over 21. The hand is soft when at least one Ace still counts as 11.
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// One betting hand at a seat. Splitting gives a seat several of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Amount riding on the hand.
    bet: usize,
    /// Whether the hand has been doubled.
    doubled: bool,
    /// Whether the hand has been paid out.
    settled: bool,
}

impl Hand {
    /// Creates an empty hand carrying `bet`.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            doubled: false,
            settled: false,
        }
    }

    /// Creates a hand holding `cards` with the given bet.
    #[must_use]
    pub fn with_cards(cards: &[Card], bet: usize) -> Self {
        Self {
            cards: cards.to_vec(),
            ..Self::new(bet)
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the amount riding on the hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the hand has been doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the hand has been paid out.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Doubles the bet amount and marks the hand as doubled.
    pub const fn double_down(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Marks the hand as paid out.
    pub const fn settle(&mut self) {
        self.settled = true;
    }

    /// Calculates the total of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is a pair of equal-valued cards.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].value() == self.cards[1].value()
    }

    /// Returns whether the hand may still be doubled.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.cards.len() == 2 && !self.doubled
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Takes the second card off a two-card hand.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand. The first card is the up card, the second the hole card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates an empty dealer hand with the hole card face down.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Turns the hole card face up.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Value a player can see: the up card alone until the hole card is turned.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.total()
        } else {
            self.cards.first().map_or(0, Card::value)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the dealer must draw another card.
    ///
    /// The dealer hits below 17 and on soft 17.
    #[must_use]
    pub fn must_hit(&self) -> bool {
        let (total, soft) = evaluate(&self.cards);
        total < 17 || (total == 17 && soft)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand and turns the hole card back down.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
