use log::{debug, warn};
use rand::Rng;

use crate::error::{BetError, GameError};
use crate::frontend::{Event, Frontend};
use crate::options::{HUMAN_MAX_BET, MIN_BET, ROBOT_MAX_BET};

use super::{Game, Round};

impl Game {
    /// Places a bet for the player at `index`, enforcing the table minimum
    /// and `max`.
    fn bet(&mut self, index: usize, amount: usize, max: usize) -> Result<(), BetError> {
        if !(MIN_BET..=max).contains(&amount) {
            return Err(BetError::OutOfRange {
                amount,
                min: MIN_BET,
                max,
            });
        }

        self.players[index].place_bet(amount)
    }

    /// Asks the human at `index` for a bet until a valid one is placed.
    fn take_human_bet<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        index: usize,
    ) -> Result<usize, GameError> {
        let player = &self.players[index];
        let name = player.name().to_string();
        let bankroll = player.bankroll();
        let max = HUMAN_MAX_BET.min(bankroll);

        loop {
            let amount = frontend.request_human_bet(&name, bankroll, MIN_BET, max)?;
            match self.bet(index, amount, max) {
                Ok(()) => return Ok(amount),
                Err(err) => {
                    warn!("{name}: rejected bet: {err}");
                    frontend.notify(&Event::InvalidBet {
                        amount,
                        min: MIN_BET,
                        max,
                    });
                }
            }
        }
    }

    /// Collects bets from every seat that can cover the minimum.
    ///
    /// Returns the indices of the players in this round.
    pub(super) fn collect_bets<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<Vec<usize>, GameError> {
        let mut seats = Vec::new();

        for index in 0..self.players.len() {
            let bankroll = self.players[index].bankroll();

            if bankroll < MIN_BET {
                self.players[index].clear_round();
                frontend.notify(&Event::SatOut {
                    name: self.players[index].name().to_string(),
                });
                continue;
            }

            let amount = if self.players[index].is_human() {
                self.take_human_bet(frontend, index)?
            } else {
                let max = ROBOT_MAX_BET.min(bankroll);
                let amount = self.rng.random_range(MIN_BET..=max);
                if let Err(err) = self.bet(index, amount, max) {
                    warn!("{}: robot bet rejected: {err}", self.players[index].name());
                    continue;
                }
                amount
            };

            let player = &self.players[index];
            debug!("{} bets {amount}", player.name());
            frontend.notify(&Event::BetPlaced {
                name: player.name().to_string(),
                amount,
                bankroll: player.bankroll(),
            });
            seats.push(index);
        }

        Ok(seats)
    }

    /// Deals two cards to each seat and the dealer, one pass at a time.
    pub(super) fn deal_initial(&mut self, round: &mut Round) -> Result<(), GameError> {
        round.dealer.clear();

        for _ in 0..2 {
            for &seat in &round.seats {
                let card = self.shoe.deal()?;
                if let Some(hand) = self.players[seat].hand_mut(0) {
                    hand.add_card(card);
                }
            }
            round.dealer.add_card(self.shoe.deal()?);
        }

        debug!(
            "dealer shows {}",
            round
                .dealer
                .up_card()
                .map_or_else(String::new, ToString::to_string)
        );
        Ok(())
    }
}
