//! Player actions on a single hand.
//!
//! The functions here take the shoe and the acting player directly so the
//! same rules serve the human seat, the robots, and tests.

use log::{debug, warn};

use crate::card::Card;
use crate::error::{ActionError, GameError};
use crate::frontend::{Event, Frontend};
use crate::hand::Hand;
use crate::options::MAX_SPLITS;
use crate::player::Player;
use crate::shoe::Shoe;
use crate::strategy::{self, Action};

use super::{Game, Round};

/// Returns the actions open to `player` on the hand at `hand_index`.
///
/// Hit and stand are always offered. Double needs a two-card hand that has
/// not been doubled; split needs a pair and fewer than [`MAX_SPLITS`]
/// splits. Both need the bankroll to cover the hand's bet again.
#[must_use]
pub fn available_actions(player: &Player, hand_index: usize) -> Vec<Action> {
    let mut actions = vec![Action::Hit, Action::Stand];
    let Some(hand) = player.hand(hand_index) else {
        return actions;
    };

    let covered = player.can_cover(hand.bet());
    if hand.can_double() && covered {
        actions.push(Action::Double);
    }
    if hand.can_split() && player.splits() < MAX_SPLITS && covered {
        actions.push(Action::Split);
    }
    actions
}

/// Draws a card onto the hand.
///
/// # Errors
///
/// Returns an error if the hand does not exist or the shoe is empty.
pub fn hit(shoe: &mut Shoe, player: &mut Player, hand_index: usize) -> Result<Card, ActionError> {
    let hand = player
        .hand_mut(hand_index)
        .ok_or(ActionError::HandNotFound)?;
    let card = shoe.deal()?;
    hand.add_card(card);
    Ok(card)
}

/// Doubles the hand's bet and draws exactly one card.
///
/// # Errors
///
/// Returns an error if the hand does not exist, is not eligible to double,
/// the player cannot cover the extra bet, or the shoe is empty.
pub fn double_down(
    shoe: &mut Shoe,
    player: &mut Player,
    hand_index: usize,
) -> Result<Card, ActionError> {
    let hand = player.hand(hand_index).ok_or(ActionError::HandNotFound)?;

    if !hand.can_double() {
        return Err(ActionError::CannotDouble);
    }

    let bet = hand.bet();
    if !player.can_cover(bet) {
        return Err(ActionError::InsufficientFunds);
    }

    let card = shoe.deal()?;
    player.debit(bet);

    let hand = player
        .hand_mut(hand_index)
        .ok_or(ActionError::HandNotFound)?;
    hand.double_down();
    hand.add_card(card);

    Ok(card)
}

/// Splits a pair into two hands with the same bet.
///
/// The second card moves to a new hand appended after the player's other
/// hands, and each of the two hands receives one fresh card.
///
/// # Errors
///
/// Returns an error if the hand does not exist, is not a pair, the player
/// has already split [`MAX_SPLITS`] times, the player cannot cover the
/// extra bet, or the shoe is empty.
pub fn split(shoe: &mut Shoe, player: &mut Player, hand_index: usize) -> Result<(), ActionError> {
    let hand = player.hand(hand_index).ok_or(ActionError::HandNotFound)?;

    if !hand.can_split() {
        return Err(ActionError::CannotSplit);
    }

    if player.splits() >= MAX_SPLITS {
        return Err(ActionError::MaxSplitsReached);
    }

    let bet = hand.bet();
    if !player.can_cover(bet) {
        return Err(ActionError::InsufficientFunds);
    }

    let first = shoe.deal()?;
    let second = shoe.deal()?;
    player.debit(bet);

    let hand = player
        .hand_mut(hand_index)
        .ok_or(ActionError::HandNotFound)?;
    let moved = hand.take_split_card().ok_or(ActionError::CannotSplit)?;
    hand.add_card(first);

    let mut new_hand = Hand::with_cards(&[moved], bet);
    new_hand.add_card(second);
    player.push_hand(new_hand);

    Ok(())
}

impl Game {
    /// Plays every seat's hands in order.
    ///
    /// Natural blackjacks stand without a turn. Hands created by splitting
    /// are appended to the player's list and picked up by the same loop, so
    /// the bound is re-read after every hand.
    pub(super) fn play_turns<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        round: &Round,
    ) -> Result<(), GameError> {
        let Some(&up_card) = round.dealer.up_card() else {
            return Ok(());
        };

        for &seat in &round.seats {
            let player = &self.players[seat];
            if player.hand(0).is_some_and(Hand::is_blackjack) {
                frontend.notify(&Event::Blackjack {
                    name: player.name().to_string(),
                });
                continue;
            }

            let mut hand_index = 0;
            while hand_index < self.players[seat].hands().len() {
                self.players[seat].set_current_hand(hand_index);
                self.play_hand(frontend, round, seat, hand_index, up_card)?;
                hand_index += 1;
            }
        }

        Ok(())
    }

    /// Plays one hand until it busts, reaches 21, stands, or doubles.
    fn play_hand<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        round: &Round,
        seat: usize,
        hand_index: usize,
        up_card: Card,
    ) -> Result<(), GameError> {
        let name = self.players[seat].name().to_string();
        frontend.notify(&Event::TurnStarted {
            name: name.clone(),
            hand_index,
        });

        loop {
            let player = &self.players[seat];
            let hand = player
                .hand(hand_index)
                .ok_or(ActionError::HandNotFound)?;
            if hand.total() >= 21 {
                break;
            }

            self.show_table(frontend, &[seat], round, true);

            let action = if player.is_human() {
                self.ask_action(frontend, seat, hand_index)?
            } else {
                let action = strategy::decide(hand, &up_card, player.splits(), player.bankroll());
                debug!(
                    "{name} holds {}{} against {up_card}: {action}",
                    if hand.is_soft() { "soft " } else { "" },
                    hand.total()
                );
                action
            };

            let player = &mut self.players[seat];
            match action {
                Action::Hit => {
                    let card = hit(&mut self.shoe, player, hand_index)?;
                    debug!("{name} draws {card}");
                    frontend.notify(&Event::Hit {
                        name: name.clone(),
                        card,
                        total: hand_total(player, hand_index),
                    });
                }
                Action::Stand => {
                    frontend.notify(&Event::Stand {
                        name: name.clone(),
                        total: hand_total(player, hand_index),
                    });
                    break;
                }
                Action::Double => {
                    let card = double_down(&mut self.shoe, player, hand_index)?;
                    frontend.notify(&Event::Doubled {
                        name: name.clone(),
                        card,
                        total: hand_total(player, hand_index),
                    });
                    break;
                }
                Action::Split => {
                    split(&mut self.shoe, player, hand_index)?;
                    frontend.notify(&Event::Split {
                        name: name.clone(),
                        hands: player.hands().len(),
                    });
                }
            }
        }

        let player = &self.players[seat];
        if player.hand(hand_index).is_some_and(Hand::is_busted) {
            debug!("{name} busts");
            frontend.notify(&Event::Busted {
                name,
                total: hand_total(player, hand_index),
            });
        }

        Ok(())
    }

    /// Asks the human for an action until one on offer comes back.
    fn ask_action<F: Frontend + ?Sized>(
        &self,
        frontend: &mut F,
        seat: usize,
        hand_index: usize,
    ) -> Result<Action, GameError> {
        let player = &self.players[seat];
        let options = available_actions(player, hand_index);

        loop {
            let action = frontend.request_human_action(player.name(), &options)?;
            if options.contains(&action) {
                return Ok(action);
            }
            warn!("{}: {action} is not available", player.name());
            frontend.notify(&Event::InvalidAction { action });
        }
    }
}

fn hand_total(player: &Player, hand_index: usize) -> u8 {
    player.hand(hand_index).map_or(0, Hand::total)
}
