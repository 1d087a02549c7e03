//! Game engine and round flow.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GameError;
use crate::frontend::{Event, Frontend};
use crate::options::{DECKS, GameOptions, MIN_BET, PENETRATION};
use crate::player::{Player, PlayerKind};
use crate::result::{RoundResult, Standing};
use crate::shoe::Shoe;

pub mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

use state::Round;
pub use state::RoundPhase;

/// A blackjack table: the shoe, the players, and the round state machine.
///
/// All randomness (shuffles and robot bet sizes) comes from one `ChaCha8`
/// generator seeded in [`Game::new`], so a seed fully determines a run given
/// the same human answers.
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    /// Seats, human first.
    players: Vec<Player>,
    /// Number of rounds started.
    round: u32,
    /// Current phase.
    phase: RoundPhase,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.players().len(), 4);
    /// assert_eq!(game.shoe.remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(DECKS, PENETRATION, &mut rng);

        let mut players = Vec::with_capacity(options.robots.len() + 1);
        players.push(Player::new(
            options.player_name.clone(),
            PlayerKind::Human,
            options.starting_bankroll,
        ));
        players.extend(options.robots.iter().map(|name| {
            Player::new(name.clone(), PlayerKind::Robot, options.starting_bankroll)
        }));

        Self {
            shoe,
            options,
            players,
            round: 0,
            phase: RoundPhase::Idle,
            rng,
        }
    }

    /// Returns the seats, human first.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a seat by index.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns a mutable seat by index.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Plays one complete round.
    ///
    /// Returns `Ok(None)` when nobody could bet, which ends the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Interrupted`] if the frontend gives up while
    /// waiting on the human, or [`GameError::EmptyShoe`] if the shoe runs dry.
    pub fn play_round<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<Option<RoundResult>, GameError> {
        self.round += 1;

        self.phase = RoundPhase::ShuffleCheck;
        if self.shoe.needs_shuffle() {
            info!("reshuffling after {} cards", self.shoe.dealt());
            self.shoe.reset(&mut self.rng);
            frontend.notify(&Event::Reshuffled);
        }

        info!("round {} starting", self.round);
        frontend.notify(&Event::RoundStarted { round: self.round });

        self.phase = RoundPhase::Betting;
        let seats = self.collect_bets(frontend)?;
        if seats.is_empty() {
            info!("no active players");
            frontend.notify(&Event::NoActivePlayers);
            self.phase = RoundPhase::Complete;
            return Ok(None);
        }

        let mut round = Round::new(self.round, seats);

        self.phase = RoundPhase::Dealing;
        self.deal_initial(&mut round)?;
        self.show_table(frontend, &round.seats, &round, true);

        self.phase = RoundPhase::Insurance;
        self.offer_insurance(frontend, &round)?;

        self.phase = RoundPhase::DealerBlackjackCheck;
        if !self.check_dealer_blackjack(frontend, &mut round) {
            self.phase = RoundPhase::PlayerTurns;
            self.play_turns(frontend, &round)?;

            self.phase = RoundPhase::DealerTurn;
            if self.any_live_hands(&round.seats) {
                self.play_dealer(frontend, &mut round)?;
            } else {
                frontend.notify(&Event::AllBusted);
            }

            round.dealer.reveal_hole();
            self.show_table(frontend, &round.seats, &round, false);
        }

        self.phase = RoundPhase::Settlement;
        let result = self.settle(frontend, &round);

        self.phase = RoundPhase::Complete;
        Ok(Some(result))
    }

    /// Plays rounds until the human is broke, declines another round, nobody
    /// can bet, or input is interrupted. Returns the final standings.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyShoe`] if the shoe runs dry mid-round. An
    /// interrupt is not an error here: the run stops and the standings are
    /// still reported.
    pub fn run<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<Vec<Standing>, GameError> {
        match self.run_rounds(frontend) {
            Ok(()) => {}
            Err(GameError::Interrupted(_)) => {
                info!("input interrupted during round {}", self.round);
                frontend.notify(&Event::Interrupted);
            }
            Err(err) => return Err(err),
        }

        let standings = self.standings();
        frontend.notify(&Event::FinalStandings(standings.clone()));
        frontend.notify(&Event::Farewell);
        Ok(standings)
    }

    fn run_rounds<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<(), GameError> {
        loop {
            if let Some(human) = self.players.iter().find(|p| p.is_human()) {
                if !human.can_cover(MIN_BET) {
                    frontend.notify(&Event::OutOfMoney {
                        name: human.name().to_string(),
                    });
                    return Ok(());
                }
            }

            if self.play_round(frontend)?.is_none() {
                return Ok(());
            }

            if !frontend.request_continue()? {
                return Ok(());
            }
        }
    }

    /// Returns every player's bankroll and profit against the starting
    /// bankroll.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let start = self.options.starting_bankroll;
        self.players
            .iter()
            .map(|player| {
                #[expect(clippy::cast_possible_wrap, reason = "bankrolls fit in isize")]
                let profit = player.bankroll() as isize - start as isize;
                Standing {
                    name: player.name().to_string(),
                    bankroll: player.bankroll(),
                    profit,
                }
            })
            .collect()
    }

    fn show_table<F: Frontend + ?Sized>(
        &self,
        frontend: &mut F,
        seats: &[usize],
        round: &Round,
        hide_hole_card: bool,
    ) {
        let players: Vec<&Player> = seats.iter().filter_map(|&i| self.players.get(i)).collect();
        frontend.display_table(&players, &round.dealer, hide_hole_card);
    }
}
