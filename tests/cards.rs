//! Card, hand, and shoe tests.

use bjsim::hand::evaluate;
use bjsim::{Card, DECK_SIZE, DealerHand, Hand, Shoe, ShoeError, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Cards of arbitrary suits, by rank.
fn ranks(ranks: &[u8]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| Card::new(suit, rank))
        .collect()
}

fn hand(cards: &[u8]) -> Hand {
    Hand::with_cards(&ranks(cards), 10)
}

fn shoe() -> Shoe {
    Shoe::new(6, 0.75, &mut ChaCha8Rng::seed_from_u64(3))
}

#[test]
fn card_values_and_labels() {
    assert_eq!(card(Suit::Hearts, 1).value(), 11);
    assert_eq!(card(Suit::Spades, 7).value(), 7);
    assert_eq!(card(Suit::Clubs, 12).value(), 10);
    assert_eq!(card(Suit::Hearts, 1).label(), "A");
    assert_eq!(card(Suit::Diamonds, 11).label(), "J");
    assert_eq!(card(Suit::Clubs, 10).to_string(), "10♣");
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Spades.is_red());
}

#[test]
fn aces_are_demoted_one_at_a_time() {
    let pair = hand(&[1, 1]);
    assert_eq!(pair.total(), 12);
    assert!(pair.is_soft());

    let soft_21 = hand(&[1, 1, 9]);
    assert_eq!(soft_21.total(), 21);
    assert!(soft_21.is_soft());
    assert!(!soft_21.is_blackjack());

    let hard_21 = hand(&[10, 10, 1]);
    assert_eq!(hard_21.total(), 21);
    assert!(!hard_21.is_soft());
    assert!(!hard_21.is_blackjack());

    let busted = hand(&[10, 6, 9]);
    assert_eq!(busted.total(), 25);
    assert!(busted.is_busted());
}

#[test]
fn total_is_best_count_not_over_21() {
    // Every two- and three-card run of ranks, against a brute force over the
    // number of Aces counted as 11.
    for a in 1..=13u8 {
        for b in 1..=13u8 {
            for c in 0..=13u8 {
                let run: Vec<u8> = [a, b, c].into_iter().filter(|&r| r > 0).collect();
                let cards = ranks(&run);
                let hard: u8 = cards
                    .iter()
                    .map(|c| if c.is_ace() { 1 } else { c.value() })
                    .sum();
                let aces = cards.iter().filter(|c| c.is_ace()).count() as u8;
                let best = (0..=aces)
                    .map(|high| hard + 10 * high)
                    .filter(|&t| t <= 21)
                    .max();

                let (total, soft) = evaluate(&cards);
                match best {
                    Some(best) => {
                        assert_eq!(total, best, "{run:?}");
                        assert_eq!(soft, best != hard, "{run:?}");
                    }
                    None => {
                        assert_eq!(total, hard, "{run:?}");
                        assert!(!soft, "{run:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(hand(&[1, 13]).is_blackjack());
    assert!(hand(&[10, 1]).is_blackjack());
    assert!(!hand(&[7, 7, 7]).is_blackjack());
    assert!(!hand(&[1, 9]).is_blackjack());
}

#[test]
fn split_and_double_eligibility() {
    assert!(hand(&[8, 8]).can_split());
    assert!(hand(&[10, 13]).can_split());
    assert!(!hand(&[8, 9]).can_split());
    assert!(!hand(&[8, 8, 2]).can_split());

    let mut eleven = hand(&[6, 5]);
    assert!(eleven.can_double());
    eleven.double_down();
    assert_eq!(eleven.bet(), 20);
    assert!(eleven.is_doubled());
    assert!(!eleven.can_double());
    assert!(!hand(&[2, 3, 4]).can_double());
}

#[test]
fn split_card_moves_off_the_pair() {
    let mut pair = hand(&[8, 8]);
    let moved = pair.take_split_card();
    assert_eq!(moved.map(|c| c.value()), Some(8));
    assert_eq!(pair.len(), 1);
    assert!(hand(&[8, 9]).take_split_card().is_none());
}

#[test]
fn dealer_hides_hole_card_until_revealed() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 6));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(dealer.up_card(), Some(&card(Suit::Hearts, 1)));

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn dealer_hits_soft_17_and_stands_on_hard_17() {
    let mut soft = DealerHand::new();
    for c in ranks(&[1, 6]) {
        soft.add_card(c);
    }
    assert!(soft.must_hit());

    let mut hard = DealerHand::new();
    for c in ranks(&[10, 7]) {
        hard.add_card(c);
    }
    assert!(!hard.must_hit());

    let mut sixteen = DealerHand::new();
    for c in ranks(&[10, 6]) {
        sixteen.add_card(c);
    }
    assert!(sixteen.must_hit());

    let mut soft_18 = DealerHand::new();
    for c in ranks(&[1, 7]) {
        soft_18.add_card(c);
    }
    assert!(!soft_18.must_hit());
}

#[test]
fn fresh_shoe_holds_six_decks() {
    let shoe = shoe();
    assert_eq!(shoe.total_cards(), 6 * DECK_SIZE);
    assert_eq!(shoe.remaining(), 312);
    assert_eq!(shoe.dealt(), 0);
    assert_eq!(shoe.cut_card(), 234);
}

#[test]
fn shoe_contains_each_card_once_per_deck() {
    let mut shoe = shoe();
    let mut counts = std::collections::HashMap::<Card, usize>::new();
    while let Ok(card) = shoe.deal() {
        *counts.entry(card).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == 6));
}

#[test]
fn reshuffle_is_due_at_the_cut_card() {
    let mut shoe = shoe();
    for _ in 0..233 {
        shoe.deal().unwrap();
    }
    assert!(!shoe.needs_shuffle());

    shoe.deal().unwrap();
    assert!(shoe.needs_shuffle());

    shoe.reset(&mut ChaCha8Rng::seed_from_u64(4));
    assert_eq!(shoe.remaining(), 312);
    assert_eq!(shoe.dealt(), 0);
    assert!(!shoe.needs_shuffle());
}

#[test]
fn same_seed_shuffles_the_same_way() {
    let mut a = shoe();
    let mut b = shoe();
    for _ in 0..20 {
        assert_eq!(a.deal(), b.deal());
    }
}

#[test]
fn empty_shoe_errors() {
    let mut shoe = shoe();
    shoe.stack(&ranks(&[5]));
    assert!(shoe.deal().is_ok());
    assert_eq!(shoe.deal(), Err(ShoeError::Empty));
}

#[test]
fn stacked_shoe_deals_in_order() {
    let mut shoe = shoe();
    let draws = [card(Suit::Hearts, 1), card(Suit::Spades, 9)];
    shoe.stack(&draws);
    assert_eq!(shoe.deal(), Ok(draws[0]));
    assert_eq!(shoe.deal(), Ok(draws[1]));
    assert_eq!(shoe.dealt(), 2);
}
