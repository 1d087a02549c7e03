//! Round flow tests against a scripted frontend and stacked shoes.

use std::collections::VecDeque;

use bjsim::{
    Action, Card, DealerHand, Event, Frontend, Game, GameError, GameOptions, HandOutcome,
    Interrupted, Player, RoundPhase, Standing, Suit,
};

/// Cards of arbitrary suits, by rank.
fn ranks(ranks: &[u8]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| Card::new(suit, rank))
        .collect()
}

/// A table with only the human seat, holding `bankroll`.
fn solo_game(bankroll: usize) -> Game {
    let options = GameOptions::default()
        .with_player_name("Ada")
        .with_robots(Vec::<String>::new())
        .with_starting_bankroll(bankroll);
    Game::new(options, 7)
}

/// A frontend that answers from queues and records what it was told.
///
/// An empty queue answers with the fallback when one is set and interrupts
/// otherwise.
#[derive(Default)]
struct ScriptedFrontend {
    bets: VecDeque<usize>,
    insurance: VecDeque<bool>,
    actions: VecDeque<Action>,
    continues: VecDeque<bool>,
    fallback_bet: Option<usize>,
    fallback_action: Option<Action>,
    fallback_insurance: Option<bool>,
    events: Vec<Event>,
    bet_prompts: usize,
    insurance_prompts: usize,
    action_prompts: Vec<Vec<Action>>,
    tables: Vec<(Vec<String>, bool)>,
}

impl ScriptedFrontend {
    fn new() -> Self {
        Self::default()
    }

    fn with_bets(mut self, bets: &[usize]) -> Self {
        self.bets.extend(bets);
        self
    }

    fn with_insurance(mut self, answers: &[bool]) -> Self {
        self.insurance.extend(answers);
        self
    }

    fn with_actions(mut self, actions: &[Action]) -> Self {
        self.actions.extend(actions);
        self
    }

    fn with_continues(mut self, answers: &[bool]) -> Self {
        self.continues.extend(answers);
        self
    }

    /// Bets `bet`, declines insurance and stands, forever.
    fn steady(bet: usize) -> Self {
        Self {
            fallback_bet: Some(bet),
            fallback_action: Some(Action::Stand),
            fallback_insurance: Some(false),
            ..Self::default()
        }
    }

    fn saw(&self, wanted: impl Fn(&Event) -> bool) -> bool {
        self.events.iter().any(wanted)
    }

    fn position(&self, wanted: impl Fn(&Event) -> bool) -> Option<usize> {
        self.events.iter().position(wanted)
    }
}

impl Frontend for ScriptedFrontend {
    fn request_human_bet(
        &mut self,
        _name: &str,
        _bankroll: usize,
        _min: usize,
        _max: usize,
    ) -> Result<usize, Interrupted> {
        self.bet_prompts += 1;
        self.bets.pop_front().or(self.fallback_bet).ok_or(Interrupted)
    }

    fn request_human_insurance(&mut self, _name: &str, _stake: usize) -> Result<bool, Interrupted> {
        self.insurance_prompts += 1;
        self.insurance
            .pop_front()
            .or(self.fallback_insurance)
            .ok_or(Interrupted)
    }

    fn request_human_action(
        &mut self,
        _name: &str,
        options: &[Action],
    ) -> Result<Action, Interrupted> {
        self.action_prompts.push(options.to_vec());
        self.actions
            .pop_front()
            .or(self.fallback_action)
            .ok_or(Interrupted)
    }

    fn request_continue(&mut self) -> Result<bool, Interrupted> {
        self.continues.pop_front().ok_or(Interrupted)
    }

    fn display_table(&mut self, players: &[&Player], _dealer: &DealerHand, hide_hole_card: bool) {
        let names = players.iter().map(|p| p.name().to_string()).collect();
        self.tables.push((names, hide_hole_card));
    }

    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

/// Stacks the shoe for a solo table: the player's two cards, the dealer's
/// up and hole cards, then whatever is drawn after the deal.
fn deal(game: &mut Game, player: [u8; 2], dealer: [u8; 2], draws: &[u8]) {
    let mut order = vec![player[0], dealer[0], player[1], dealer[1]];
    order.extend_from_slice(draws);
    game.shoe.stack(&ranks(&order));
}

#[test]
fn standing_hand_beats_dealer() {
    let mut game = solo_game(1000);
    deal(&mut game, [10, 9], [6, 10], &[2]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Stand]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    let ada = result.player("Ada").unwrap();
    assert_eq!(ada.hands[0].outcome, HandOutcome::Win);
    assert_eq!(ada.total_payout, 200);
    assert_eq!(ada.net, 100);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(game.player(0).unwrap().bankroll(), 1100);
    assert_eq!(game.phase(), RoundPhase::Complete);
    assert_eq!(game.round(), 1);
    assert_eq!(frontend.insurance_prompts, 0);
    assert!(!frontend.saw(|e| *e == Event::InsuranceOffered));

    // Hole card stays down until the dealer plays.
    assert_eq!(frontend.tables.first(), Some(&(vec!["Ada".to_string()], true)));
    assert_eq!(frontend.tables.last(), Some(&(vec!["Ada".to_string()], false)));
}

#[test]
fn natural_pays_three_to_two_without_a_turn() {
    let mut game = solo_game(1000);
    deal(&mut game, [1, 13], [9, 9], &[]);
    let mut frontend = ScriptedFrontend::new().with_bets(&[100]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.players[0].total_payout, 250);
    assert_eq!(game.player(0).unwrap().bankroll(), 1150);
    assert!(frontend.action_prompts.is_empty());
    assert!(frontend.saw(|e| matches!(e, Event::Blackjack { name } if name == "Ada")));
}

#[test]
fn insurance_pays_when_dealer_has_blackjack() {
    let mut game = solo_game(1000);
    deal(&mut game, [9, 7], [1, 13], &[]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_insurance(&[true]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(frontend.insurance_prompts, 1);
    assert!(frontend.action_prompts.is_empty());
    assert!(result.dealer_blackjack);
    assert_eq!(result.dealer_cards.len(), 2);

    let ada = &result.players[0];
    assert_eq!(ada.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(ada.insurance_bet, 50);
    assert_eq!(ada.insurance_payout, 150);
    assert_eq!(ada.net, 0);
    assert_eq!(game.player(0).unwrap().bankroll(), 1000);
    assert!(frontend.saw(|e| matches!(e, Event::InsurancePaid { winnings: 100, .. })));
}

#[test]
fn naturals_push_against_dealer_blackjack() {
    let mut game = solo_game(1000);
    deal(&mut game, [1, 12], [1, 13], &[]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_insurance(&[false]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Push);
    assert_eq!(game.player(0).unwrap().bankroll(), 1000);
    assert!(frontend.saw(|e| matches!(e, Event::InsuranceDeclined { .. })));
    assert!(frontend.saw(|e| matches!(e, Event::BlackjackPush { .. })));
    assert!(!frontend.saw(|e| matches!(e, Event::Blackjack { .. })));
}

#[test]
fn insurance_is_lost_when_dealer_has_no_blackjack() {
    let mut game = solo_game(1000);
    deal(&mut game, [10, 9], [1, 7], &[]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_insurance(&[true])
        .with_actions(&[Action::Stand]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    // Soft 18 stands, 19 wins.
    assert_eq!(result.dealer_value, 18);
    let ada = &result.players[0];
    assert_eq!(ada.hands[0].outcome, HandOutcome::Win);
    assert_eq!(ada.insurance_payout, 0);
    assert_eq!(ada.net, 50);
    assert_eq!(game.player(0).unwrap().bankroll(), 1050);
    assert!(frontend.saw(|e| matches!(e, Event::InsuranceLost { stake: 50, .. })));
}

#[test]
fn insurance_needs_the_money() {
    let mut game = solo_game(100);
    deal(&mut game, [10, 9], [1, 7], &[]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_insurance(&[true])
        .with_actions(&[Action::Stand]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(result.players[0].insurance_bet, 0);
    assert_eq!(game.player(0).unwrap().bankroll(), 200);
    assert!(frontend.saw(|e| matches!(e, Event::InsuranceRejected { .. })));
}

#[test]
fn double_takes_one_card_and_doubles_the_bet() {
    let mut game = solo_game(1000);
    deal(&mut game, [6, 5], [6, 10], &[10, 9]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Double]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(frontend.action_prompts.len(), 1);
    assert!(frontend.action_prompts[0].contains(&Action::Double));

    let hand = game.player(0).unwrap().hand(0).unwrap();
    assert_eq!(hand.len(), 3);
    assert!(hand.is_doubled());
    assert_eq!(hand.bet(), 200);

    assert!(result.dealer_bust);
    assert_eq!(result.players[0].total_payout, 400);
    assert_eq!(game.player(0).unwrap().bankroll(), 1200);
}

#[test]
fn split_hands_are_played_in_the_same_turn() {
    let mut game = solo_game(1000);
    deal(&mut game, [8, 8], [6, 10], &[3, 10, 10, 7]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Split, Action::Hit, Action::Stand]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    let player = game.player(0).unwrap();
    assert_eq!(player.hands().len(), 2);
    assert_eq!(player.hand(0).unwrap().total(), 21);
    assert_eq!(player.hand(1).unwrap().total(), 18);

    // Hand 0 stops on 21 without another prompt.
    assert_eq!(frontend.action_prompts.len(), 3);
    assert!(frontend.saw(|e| matches!(e, Event::TurnStarted { hand_index: 1, .. })));
    assert!(frontend.saw(|e| matches!(e, Event::Split { hands: 2, .. })));

    assert!(result.dealer_bust);
    let ada = &result.players[0];
    assert_eq!(ada.hands.len(), 2);
    assert!(ada.hands.iter().all(|h| h.outcome == HandOutcome::Win));
    assert_eq!(ada.total_payout, 400);
    assert_eq!(game.player(0).unwrap().bankroll(), 1200);
}

#[test]
fn split_hands_can_split_again_up_to_three_times() {
    let mut game = solo_game(1000);
    deal(&mut game, [8, 8], [6, 10], &[8, 8, 8, 8, 8, 8, 10]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[
            Action::Split,
            Action::Split,
            Action::Split,
            Action::Stand,
            Action::Stand,
            Action::Stand,
            Action::Stand,
        ]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    let player = game.player(0).unwrap();
    assert_eq!(player.hands().len(), 4);
    assert!(player.hands().iter().all(|h| h.total() == 16 && h.bet() == 100));

    // Three splits on the first hand, then one stand per hand.
    assert_eq!(frontend.action_prompts.len(), 7);
    assert!(frontend.action_prompts[..3].iter().all(|o| o.contains(&Action::Split)));
    assert!(frontend.action_prompts[3..].iter().all(|o| !o.contains(&Action::Split)));
    assert!(frontend.saw(|e| matches!(e, Event::Split { hands: 4, .. })));
    assert!(frontend.saw(|e| matches!(e, Event::TurnStarted { hand_index: 3, .. })));

    assert!(result.dealer_bust);
    assert_eq!(result.players[0].hands.len(), 4);
    assert_eq!(result.players[0].total_payout, 800);
    assert_eq!(game.player(0).unwrap().bankroll(), 1400);
}

#[test]
fn robot_splits_and_doubles_by_strategy() {
    let options = GameOptions::default().with_player_name("Ada").with_robots(["Rob"]);
    let mut game = Game::new(options, 3);
    // Ada, Rob, dealer up; Ada, Rob, dealer hole; then the draws.
    game.shoe.stack(&ranks(&[10, 8, 6, 9, 8, 10, 3, 2, 10, 9, 10]));
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Stand]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    // 8s split against a 6; 8+3 and 8+2 both double against a 6.
    let rob = game.player(1).unwrap();
    assert_eq!(rob.hands().len(), 2);
    assert!(rob.hands().iter().all(|h| h.is_doubled() && h.is_settled()));
    assert_eq!(rob.hand(0).unwrap().total(), 21);
    assert_eq!(rob.hand(1).unwrap().total(), 19);
    assert!(frontend.saw(|e| matches!(e, Event::Split { name, hands: 2 } if name == "Rob")));
    let doubles = frontend
        .events
        .iter()
        .filter(|e| matches!(e, Event::Doubled { name, .. } if name == "Rob"))
        .count();
    assert_eq!(doubles, 2);

    assert!(result.dealer_bust);
    let rob = result.player("Rob").unwrap();
    assert!(rob.hands.iter().all(|h| h.outcome == HandOutcome::Win));
    let stake = rob.hands[0].bet / 2;
    assert!((10..=50).contains(&stake));
    assert_eq!(rob.total_payout, 8 * stake);
    assert_eq!(rob.bankroll, 1000 + 4 * stake);
    assert_eq!(frontend.action_prompts.len(), 1);
}

#[test]
fn dealer_skips_drawing_when_everyone_busts() {
    let mut game = solo_game(1000);
    deal(&mut game, [10, 6], [6, 10], &[13, 5]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Hit]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(result.dealer_cards.len(), 2);
    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Lose);
    assert_eq!(game.player(0).unwrap().bankroll(), 900);
    assert_eq!(game.shoe.remaining(), 1);
    assert!(frontend.saw(|e| matches!(e, Event::Busted { total: 26, .. })));
    assert!(frontend.saw(|e| *e == Event::AllBusted));
    assert!(!frontend.saw(|e| matches!(e, Event::DealerHits { .. })));
}

#[test]
fn dealer_hits_soft_17() {
    let mut game = solo_game(1000);
    deal(&mut game, [10, 8], [1, 6], &[3]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_insurance(&[false])
        .with_actions(&[Action::Stand]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(result.dealer_cards.len(), 3);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Lose);
}

#[test]
fn invalid_bets_are_asked_again() {
    let mut game = solo_game(1000);
    deal(&mut game, [10, 9], [6, 10], &[2]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[5, 600, 100])
        .with_actions(&[Action::Stand]);

    game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(frontend.bet_prompts, 3);
    let rejected: Vec<_> = frontend
        .events
        .iter()
        .filter_map(|e| match e {
            Event::InvalidBet { amount, min, max } => Some((*amount, *min, *max)),
            _ => None,
        })
        .collect();
    assert_eq!(rejected, [(5, 10, 500), (600, 10, 500)]);
}

#[test]
fn bet_ceiling_follows_the_bankroll() {
    let mut game = solo_game(60);
    deal(&mut game, [10, 9], [6, 10], &[2]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100, 60])
        .with_actions(&[Action::Stand]);

    game.play_round(&mut frontend).unwrap().unwrap();

    assert!(frontend.saw(|e| matches!(e, Event::InvalidBet { max: 60, .. })));
    assert_eq!(game.player(0).unwrap().bankroll(), 120);
}

#[test]
fn unavailable_actions_are_asked_again() {
    let mut game = solo_game(1000);
    deal(&mut game, [10, 9], [6, 10], &[2]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Split, Action::Stand]);

    game.play_round(&mut frontend).unwrap().unwrap();

    assert!(frontend.saw(|e| *e == Event::InvalidAction {
        action: Action::Split
    }));
    assert_eq!(game.player(0).unwrap().bankroll(), 1100);
}

#[test]
fn broke_robots_sit_out() {
    let options = GameOptions::default()
        .with_player_name("Ada")
        .with_robots(["Alice"])
        .with_starting_bankroll(5);
    let mut game = Game::new(options, 1);
    game.player_mut(0).unwrap().credit(995);
    deal(&mut game, [10, 9], [6, 10], &[2]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Stand]);

    let result = game.play_round(&mut frontend).unwrap().unwrap();

    assert_eq!(result.players.len(), 1);
    assert!(frontend.saw(|e| matches!(e, Event::SatOut { name } if name == "Alice")));
    assert_eq!(game.player(1).unwrap().bankroll(), 5);
}

#[test]
fn round_without_bettors_ends_the_game() {
    let mut game = solo_game(5);
    let mut frontend = ScriptedFrontend::new();

    assert_eq!(game.play_round(&mut frontend).unwrap(), None);
    assert!(frontend.saw(|e| *e == Event::NoActivePlayers));
    assert_eq!(frontend.bet_prompts, 0);
}

#[test]
fn shoe_is_reshuffled_before_the_deal_past_the_cut_card() {
    let mut game = solo_game(1000);
    for _ in 0..234 {
        game.shoe.deal().unwrap();
    }
    let mut frontend = ScriptedFrontend::steady(10);

    game.play_round(&mut frontend).unwrap().unwrap();

    let reshuffled = frontend.position(|e| *e == Event::Reshuffled).unwrap();
    let started = frontend
        .position(|e| matches!(e, Event::RoundStarted { .. }))
        .unwrap();
    assert!(reshuffled < started);
    assert!(game.shoe.dealt() < 20);
}

#[test]
fn empty_shoe_aborts_the_round() {
    let mut game = solo_game(1000);
    game.shoe.stack(&ranks(&[10, 6, 9]));
    let mut frontend = ScriptedFrontend::new().with_bets(&[100]);

    assert!(matches!(
        game.play_round(&mut frontend),
        Err(GameError::EmptyShoe)
    ));
}

#[test]
fn run_stops_when_the_player_declines() {
    let mut game = solo_game(1000);
    deal(&mut game, [10, 9], [6, 10], &[2]);
    let mut frontend = ScriptedFrontend::new()
        .with_bets(&[100])
        .with_actions(&[Action::Stand])
        .with_continues(&[false]);

    let standings = game.run(&mut frontend).unwrap();

    assert_eq!(
        standings,
        [Standing {
            name: "Ada".to_string(),
            bankroll: 1100,
            profit: 100,
        }]
    );
    assert_eq!(game.round(), 1);
    assert_eq!(frontend.events.last(), Some(&Event::Farewell));
    assert!(frontend.saw(|e| matches!(e, Event::FinalStandings(s) if s.len() == 1)));
}

#[test]
fn interrupt_still_reports_standings() {
    let mut game = Game::new(GameOptions::default(), 11);
    let mut frontend = ScriptedFrontend::new();

    let standings = game.run(&mut frontend).unwrap();

    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|s| s.bankroll == 1000 && s.profit == 0));
    let interrupted = frontend.position(|e| *e == Event::Interrupted).unwrap();
    let standings_at = frontend
        .position(|e| matches!(e, Event::FinalStandings(_)))
        .unwrap();
    assert!(interrupted < standings_at);
}

#[test]
fn broke_player_cannot_start_a_round() {
    let mut game = solo_game(5);
    let mut frontend = ScriptedFrontend::new();

    game.run(&mut frontend).unwrap();

    assert_eq!(game.round(), 0);
    assert!(frontend.saw(|e| matches!(e, Event::OutOfMoney { name } if name == "Ada")));
    assert!(frontend.saw(|e| *e == Event::Farewell));
}

#[test]
fn robots_play_by_themselves() {
    let mut game = Game::new(GameOptions::default().with_player_name("Ada"), 2024);
    let mut frontend = ScriptedFrontend::steady(10);

    for _ in 0..80 {
        let result = game.play_round(&mut frontend).unwrap().unwrap();
        let total: usize = result.players.iter().map(|p| p.bankroll).sum();
        assert!(total > 0);
    }

    for event in &frontend.events {
        if let Event::BetPlaced { name, amount, .. } = event {
            if name == "Ada" {
                assert_eq!(*amount, 10);
            } else {
                assert!((10..=50).contains(amount), "{name} bet {amount}");
            }
        }
    }

    // At least four cards go out every round.
    assert!(frontend.saw(|e| *e == Event::Reshuffled));
    assert!(frontend.action_prompts.iter().all(|o| o.contains(&Action::Hit)));
    assert_eq!(
        frontend
            .events
            .iter()
            .filter(|e| **e == Event::InsuranceOffered)
            .count(),
        frontend.insurance_prompts
    );
}

#[test]
fn same_seed_plays_the_same_game() {
    let play = || {
        let mut game = Game::new(GameOptions::default(), 99);
        let mut frontend = ScriptedFrontend::steady(25);
        (0..10)
            .map(|_| game.play_round(&mut frontend).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(), play());
}
