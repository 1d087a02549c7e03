use log::{debug, info};

use crate::error::GameError;
use crate::frontend::{Event, Frontend};
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};
use crate::settlement::{self, DealerSummary, settle_hand};

use super::{Game, Round};

impl Game {
    /// Checks if any seat still has a hand that is not busted.
    pub(super) fn any_live_hands(&self, seats: &[usize]) -> bool {
        seats.iter().any(|&seat| {
            self.players[seat]
                .hands()
                .iter()
                .any(|hand| !hand.is_busted())
        })
    }

    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card, hits below 17 and on soft 17, and
    /// stands on hard 17 or better.
    pub(super) fn play_dealer<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        round: &mut Round,
    ) -> Result<(), GameError> {
        round.dealer.reveal_hole();
        frontend.notify(&Event::DealerReveals {
            total: round.dealer.total(),
        });

        while round.dealer.must_hit() {
            let card = self.shoe.deal()?;
            round.dealer.add_card(card);
            debug!("dealer draws {card}");
            frontend.notify(&Event::DealerHits {
                card,
                total: round.dealer.total(),
            });
        }

        let total = round.dealer.total();
        if round.dealer.is_busted() {
            frontend.notify(&Event::DealerBusts { total });
        } else {
            frontend.notify(&Event::DealerStands { total });
        }

        Ok(())
    }

    /// Pays out every hand in the round and returns the results.
    ///
    /// Hand payouts are credited here. Insurance was already paid when the
    /// dealer's natural was turned over, so it only shows up in the record.
    pub(super) fn settle<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
        round: &Round,
    ) -> RoundResult {
        let dealer = DealerSummary::from(&round.dealer);
        let mut players = Vec::with_capacity(round.seats.len());

        for &seat in &round.seats {
            let player = &mut self.players[seat];
            let mut hands = Vec::with_capacity(player.hands().len());
            let mut hand_payout: usize = 0;
            let mut total_bet: usize = 0;

            for (hand_index, hand) in player.hands_mut().iter_mut().enumerate() {
                if hand.is_settled() {
                    continue;
                }

                let (outcome, payout) = settle_hand(hand, dealer);
                hand.settle();
                hand_payout += payout;
                total_bet += hand.bet();

                hands.push(HandResult {
                    hand_index,
                    outcome,
                    bet: hand.bet(),
                    payout,
                    player_value: hand.total(),
                    dealer_value: dealer.total,
                });
            }

            player.credit(hand_payout);

            if dealer.blackjack
                && hands
                    .iter()
                    .any(|result| result.outcome == HandOutcome::Push)
            {
                frontend.notify(&Event::BlackjackPush {
                    name: player.name().to_string(),
                });
            }

            let insurance_bet = player.insurance();
            let insurance_payout = if dealer.blackjack {
                settlement::insurance_payout(insurance_bet)
            } else {
                0
            };

            let total_payout = hand_payout + insurance_payout;
            #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
            let net = total_payout as isize - (total_bet + insurance_bet) as isize;

            let result = PlayerResult {
                name: player.name().to_string(),
                hands,
                total_payout,
                net,
                insurance_bet,
                insurance_payout,
                bankroll: player.bankroll(),
            };

            info!(
                "{} settles for {} (net {}), bankroll {}",
                result.name, result.total_payout, result.net, result.bankroll
            );
            frontend.notify(&Event::Settled(result.clone()));
            players.push(result);
        }

        RoundResult {
            round: round.number,
            players,
            dealer_cards: round.dealer.cards().to_vec(),
            dealer_value: dealer.total,
            dealer_bust: dealer.busted,
            dealer_blackjack: dealer.blackjack,
        }
    }
}
