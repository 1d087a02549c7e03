use log::{debug, info};

use crate::error::GameError;
use crate::frontend::{Event, Frontend};
use crate::settlement::insurance_payout;
use crate::strategy;

use super::{Game, Round};

impl Game {
    /// Offers insurance to every seat when the dealer shows an Ace.
    ///
    /// The stake is half the opening bet, rounded down, and leaves the
    /// bankroll immediately.
    pub(super) fn offer_insurance<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        round: &Round,
    ) -> Result<(), GameError> {
        if !round.dealer.up_card().is_some_and(|c| c.is_ace()) {
            return Ok(());
        }

        frontend.notify(&Event::InsuranceOffered);

        for &seat in &round.seats {
            let player = &self.players[seat];
            let name = player.name().to_string();
            let Some(hand) = player.hand(0) else {
                continue;
            };

            let wants = if player.is_human() {
                frontend.request_human_insurance(&name, hand.bet() / 2)?
            } else {
                strategy::should_take_insurance(hand)
            };

            if !wants {
                frontend.notify(&Event::InsuranceDeclined { name });
                continue;
            }

            match self.players[seat].take_insurance() {
                Ok(stake) => {
                    debug!("{name} insures for {stake}");
                    frontend.notify(&Event::InsuranceTaken { name, stake });
                }
                Err(err) => {
                    debug!("{name} cannot insure: {err}");
                    frontend.notify(&Event::InsuranceRejected { name });
                }
            }
        }

        Ok(())
    }

    /// Peeks for a dealer natural.
    ///
    /// On a natural the hole card is revealed and insurance pays 2:1 (the
    /// stake comes back with it). Otherwise every insurance stake is lost.
    /// Returns whether the dealer has blackjack.
    pub(super) fn check_dealer_blackjack<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        round: &mut Round,
    ) -> bool {
        if !round.dealer.is_blackjack() {
            for &seat in &round.seats {
                let player = &self.players[seat];
                if player.is_insured() {
                    frontend.notify(&Event::InsuranceLost {
                        name: player.name().to_string(),
                        stake: player.insurance(),
                    });
                }
            }
            return false;
        }

        info!("dealer has blackjack");
        round.dealer.reveal_hole();
        frontend.notify(&Event::DealerBlackjack);
        self.show_table(frontend, &round.seats, round, false);

        for &seat in &round.seats {
            let player = &mut self.players[seat];
            if player.is_insured() {
                let stake = player.insurance();
                player.credit(insurance_payout(stake));
                frontend.notify(&Event::InsurancePaid {
                    name: player.name().to_string(),
                    winnings: stake * 2,
                });
            }
        }

        true
    }
}
