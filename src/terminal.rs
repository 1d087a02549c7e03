//! ANSI terminal frontend.

use std::io::{BufRead, Write};

use crate::card::Card;
use crate::error::Interrupted;
use crate::frontend::{Event, Frontend};
use crate::hand::{DealerHand, Hand};
use crate::player::Player;
use crate::result::HandOutcome;
use crate::strategy::Action;

const RED: &str = "91";
const GREEN: &str = "92";
const YELLOW: &str = "93";
const CYAN: &str = "96";
const MAGENTA: &str = "95";
const WHITE: &str = "97";
const BOLD: &str = "1";

const RULE_WIDTH: usize = 60;

/// A [`Frontend`] that draws the table as text and reads answers line by
/// line.
///
/// End of input, or `q` at any prompt, interrupts the game.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    /// Creates a coloured frontend over `input` and `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    /// Turns ANSI colours on or off.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the frontend, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for the human player's name. An empty answer means "Player".
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when input is no longer available.
    pub fn request_name(&mut self) -> Result<String, Interrupted> {
        let banner = self.paint("🎰  WELCOME TO CASINO BLACKJACK  🎰", &[CYAN, BOLD]);
        self.rule('=');
        self.line(banner);
        self.rule('=');

        let name = self.prompt("Enter your name: ")?;
        if name.is_empty() {
            Ok("Player".to_string())
        } else {
            Ok(name)
        }
    }

    /// Says goodbye when the process is interrupted mid-prompt, leaving the
    /// half-written prompt line behind.
    pub fn interrupted(&mut self) {
        self.line("");
        self.notify(&Event::Interrupted);
        self.notify(&Event::Farewell);
    }

    fn paint(&self, text: &str, codes: &[&str]) -> String {
        if self.color && !codes.is_empty() {
            format!("\u{1b}[{}m{text}\u{1b}[0m", codes.join(";"))
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.output, "{}", text.as_ref());
    }

    fn rule(&mut self, ch: char) {
        self.line(ch.to_string().repeat(RULE_WIDTH));
    }

    /// Prints `prompt` and reads one trimmed line. `q` and end of input
    /// interrupt.
    fn prompt(&mut self, prompt: &str) -> Result<String, Interrupted> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut input = String::new();
        match self.input.read_line(&mut input) {
            Ok(0) | Err(_) => Err(Interrupted),
            Ok(_) => {
                let answer = input.trim().to_string();
                if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                    Err(Interrupted)
                } else {
                    Ok(answer)
                }
            }
        }
    }

    fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool, Interrupted> {
        let answer = self.prompt(prompt)?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    fn error(&mut self, text: &str) {
        let text = self.paint(text, &[RED]);
        self.line(text);
    }

    fn format_card(&self, card: &Card) -> String {
        let code = if card.suit.is_red() { RED } else { WHITE };
        self.paint(&format!("[{card}]"), &[code])
    }

    fn format_cards(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .map(|card| self.format_card(card))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_hand(&self, hand: &Hand) -> String {
        let soft = if hand.is_soft() { " (soft)" } else { "" };
        format!("{} = {}{soft}", self.format_cards(hand.cards()), hand.total())
    }

    fn format_dealer(&self, dealer: &DealerHand, hide_hole_card: bool) -> String {
        if dealer.is_empty() {
            return "(no cards)".to_string();
        }

        if hide_hole_card {
            let mut parts = Vec::new();
            if let Some(card) = dealer.up_card() {
                parts.push(self.format_card(card));
            }
            if dealer.len() > 1 {
                parts.push("[??]".to_string());
            }
            parts.join(" ")
        } else {
            let soft = if dealer.is_soft() { " (soft)" } else { "" };
            format!(
                "{} = {}{soft}",
                self.format_cards(dealer.cards()),
                dealer.total()
            )
        }
    }

    /// While hands are still being played, a seat with several hands marks
    /// the one on turn.
    fn format_seat(&self, player: &Player, in_play: bool) -> String {
        let many = player.hands().len() > 1;
        let hands: Vec<String> = player
            .hands()
            .iter()
            .enumerate()
            .map(|(index, hand)| {
                let mut label = hand_label(index, many);
                if many && in_play && index == player.current_hand() {
                    label.insert_str(0, "▶ ");
                }
                let mut bet = format!("${}", hand.bet());
                if hand.is_doubled() {
                    bet.push_str(" (DOUBLED)");
                }
                let status = if hand.is_busted() {
                    format!(" {}", self.paint("BUST", &[RED]))
                } else if hand.is_blackjack() {
                    format!(" {}", self.paint("BLACKJACK!", &[GREEN]))
                } else {
                    String::new()
                };
                format!("{label}: {}{status} (Bet: {bet})", self.format_hand(hand))
            })
            .collect();

        let mut text = format!(
            "{} (${}): {}",
            self.paint(player.name(), &[BOLD]),
            player.bankroll(),
            hands.join(" | ")
        );
        if player.is_insured() {
            let tag = format!(" [INSURED ${}]", player.insurance());
            text.push_str(&self.paint(&tag, &[YELLOW]));
        }
        text
    }

    fn event_text(&self, event: &Event) -> Vec<String> {
        match event {
            Event::RoundStarted { round } => vec![
                String::new(),
                self.paint(&"═".repeat(RULE_WIDTH), &[MAGENTA, BOLD]),
                self.paint(&centered(&format!("ROUND {round}")), &[MAGENTA, BOLD]),
                self.paint(&"═".repeat(RULE_WIDTH), &[MAGENTA, BOLD]),
            ],
            Event::Reshuffled => vec![self.paint("🔀  Reshuffling the shoe...", &[YELLOW])],
            Event::SatOut { name } => {
                vec![self.paint(&format!("{name} is out of money!"), &[RED])]
            }
            Event::InvalidBet { min, max, .. } => vec![self.paint(
                &format!("Invalid bet amount! Bet between {min} and {max}."),
                &[RED],
            )],
            Event::BetPlaced {
                name,
                amount,
                bankroll,
            } => vec![format!("{name} bets ${amount} (Bankroll: ${bankroll})")],
            Event::NoActivePlayers => vec![self.paint("No active players!", &[RED])],
            Event::InsuranceOffered => {
                vec![self.paint("Dealer shows Ace! Insurance available.", &[YELLOW])]
            }
            Event::InsuranceTaken { name, stake } => {
                vec![self.paint(&format!("{name} takes insurance: ${stake}"), &[GREEN])]
            }
            Event::InsuranceDeclined { name } => vec![format!("{name} declines insurance")],
            Event::InsuranceRejected { name } => vec![self.paint(
                &format!("{name} does not have enough money for insurance!"),
                &[RED],
            )],
            Event::DealerBlackjack => vec![self.paint("Dealer has BLACKJACK!", &[RED, BOLD])],
            Event::InsurancePaid { name, winnings } => {
                vec![self.paint(&format!("{name} insurance pays ${winnings}"), &[GREEN])]
            }
            Event::InsuranceLost { name, stake } => {
                vec![self.paint(&format!("{name} loses insurance bet ${stake}"), &[RED])]
            }
            Event::BlackjackPush { name } => {
                vec![self.paint(&format!("{name} pushes with blackjack"), &[YELLOW])]
            }
            Event::Blackjack { name } => {
                vec![self.paint(&format!("{name} has BLACKJACK!"), &[GREEN])]
            }
            Event::TurnStarted { .. } => Vec::new(),
            Event::InvalidAction { action } => {
                vec![self.paint(&format!("You can't {action} right now."), &[RED])]
            }
            Event::Hit { name, card, total } => vec![format!(
                "{name} hits and draws {} ({total})",
                self.format_card(card)
            )],
            Event::Stand { name, total } => {
                vec![self.paint(&format!("{name} stands on {total}"), &[GREEN])]
            }
            Event::Doubled { name, card, total } => vec![format!(
                "{} {} ({total})",
                self.paint(&format!("{name} doubles down and draws"), &[YELLOW]),
                self.format_card(card)
            )],
            Event::Split { name, hands } => {
                vec![self.paint(&format!("{name} splits ({hands} hands)"), &[YELLOW])]
            }
            Event::Busted { name, total } => {
                vec![self.paint(&format!("{name} busts with {total}!"), &[RED])]
            }
            Event::AllBusted => vec![self.paint("All players busted! Dealer wins.", &[RED])],
            Event::DealerReveals { total } => vec![
                self.paint("Dealer's turn", &[CYAN, BOLD]),
                format!("Dealer reveals: {total}"),
            ],
            Event::DealerHits { card, total } => {
                vec![format!("Dealer hits: {} ({total})", self.format_card(card))]
            }
            Event::DealerStands { total } => {
                vec![self.paint(&format!("Dealer stands on {total}"), &[GREEN])]
            }
            Event::DealerBusts { total } => {
                vec![self.paint(&format!("Dealer busts with {total}!"), &[RED])]
            }
            Event::Settled(result) => {
                let many = result.hands.len() > 1;
                let mut lines = vec![self.paint(&format!("{}:", result.name), &[BOLD])];
                for hand in &result.hands {
                    let label = hand_label(hand.hand_index, many);
                    let text = match hand.outcome {
                        HandOutcome::Blackjack => self.paint(
                            &format!(
                                "BLACKJACK! Won ${} (paid {})",
                                hand.payout - hand.bet,
                                hand.payout
                            ),
                            &[GREEN],
                        ),
                        HandOutcome::Win => self.paint(
                            &format!(
                                "Won ${} ({} vs {})",
                                hand.bet, hand.player_value, hand.dealer_value
                            ),
                            &[GREEN],
                        ),
                        HandOutcome::Push => self.paint(
                            &format!("Push ({}) - Bet returned", hand.player_value),
                            &[YELLOW],
                        ),
                        HandOutcome::Lose if hand.player_value > 21 => {
                            self.paint(&format!("BUST - Lost ${}", hand.bet), &[RED])
                        }
                        HandOutcome::Lose => self.paint(
                            &format!(
                                "Lost ${} ({} vs {})",
                                hand.bet, hand.player_value, hand.dealer_value
                            ),
                            &[RED],
                        ),
                    };
                    lines.push(format!("  {label}: {text}"));
                }
                lines.push(format!("  New bankroll: ${}", result.bankroll));
                lines
            }
            Event::OutOfMoney { name } => {
                vec![self.paint(&format!("{name} is out of money! Game over."), &[RED])]
            }
            Event::Interrupted => vec![self.paint("Game interrupted.", &[YELLOW])],
            Event::FinalStandings(standings) => {
                let mut lines = vec![
                    String::new(),
                    self.paint(&"═".repeat(RULE_WIDTH), &[MAGENTA, BOLD]),
                    self.paint(&centered("FINAL STANDINGS"), &[MAGENTA, BOLD]),
                    self.paint(&"═".repeat(RULE_WIDTH), &[MAGENTA, BOLD]),
                ];
                for standing in standings {
                    let sign = if standing.profit >= 0 { "+" } else { "-" };
                    let code = if standing.profit >= 0 { GREEN } else { RED };
                    let profit =
                        self.paint(&format!("{sign}${}", standing.profit.unsigned_abs()), &[code]);
                    lines.push(format!("{}: ${} ({profit})", standing.name, standing.bankroll));
                }
                lines
            }
            Event::Farewell => vec![self.paint("Thanks for playing! 🎰", &[CYAN])],
        }
    }
}

fn centered(text: &str) -> String {
    format!("{text:^width$}", width = RULE_WIDTH)
}

fn hand_label(index: usize, many: bool) -> String {
    if many {
        format!("Hand {}", index + 1)
    } else {
        "Hand".to_string()
    }
}

/// Reads an action from its menu key or its full name.
fn parse_action(answer: &str) -> Option<Action> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Action::ALL.into_iter().find(|a| a.key() == key),
        _ => Action::ALL.into_iter().find(|a| a.to_string() == answer),
    }
}

fn menu_label(action: Action) -> &'static str {
    match action {
        Action::Hit => "(h)it",
        Action::Stand => "(s)tand",
        Action::Double => "(d)ouble",
        Action::Split => "s(p)lit",
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn request_human_bet(
        &mut self,
        name: &str,
        bankroll: usize,
        min: usize,
        max: usize,
    ) -> Result<usize, Interrupted> {
        loop {
            self.line(format!("{name}'s bankroll: ${bankroll}"));
            let answer = self.prompt(&format!("Enter your bet ({min}-{max}): $"))?;
            match answer.parse::<usize>() {
                Ok(amount) if (min..=max).contains(&amount) => return Ok(amount),
                Ok(_) => self.error("Invalid bet amount!"),
                Err(_) => self.error("Please enter a number!"),
            }
        }
    }

    fn request_human_insurance(&mut self, name: &str, stake: usize) -> Result<bool, Interrupted> {
        self.prompt_yes_no(&format!("{name}, take insurance for ${stake}? (y/n): "))
    }

    fn request_human_action(
        &mut self,
        _name: &str,
        options: &[Action],
    ) -> Result<Action, Interrupted> {
        let menu: Vec<&str> = options.iter().copied().map(menu_label).collect();
        loop {
            self.line(format!("Options: {}", menu.join(", ")));
            let answer = self.prompt("Your choice: ")?.to_lowercase();
            match parse_action(&answer) {
                Some(action) if options.contains(&action) => return Ok(action),
                _ => self.error("Invalid choice!"),
            }
        }
    }

    fn request_continue(&mut self) -> Result<bool, Interrupted> {
        let prompt = self.paint("Continue playing? (y/n): ", &[CYAN]);
        let _ = writeln!(self.output);
        self.prompt_yes_no(&prompt)
    }

    fn display_table(&mut self, players: &[&Player], dealer: &DealerHand, hide_hole_card: bool) {
        let header = self.paint(&centered("🎰  TABLE  🎰"), &[BOLD]);
        let dealer_line = format!(
            "{} {}",
            self.paint("Dealer:", &[BOLD]),
            self.format_dealer(dealer, hide_hole_card)
        );
        let seats: Vec<String> = players
            .iter()
            .map(|p| self.format_seat(p, hide_hole_card))
            .collect();
        let players_label = self.paint("Players:", &[BOLD]);

        self.line("");
        self.rule('═');
        self.line(header);
        self.rule('═');
        self.line(dealer_line);
        self.line("");
        self.line(players_label);
        self.rule('─');
        for seat in seats {
            self.line(seat);
        }
        self.line("");
    }

    fn notify(&mut self, event: &Event) {
        for text in self.event_text(event) {
            self.line(text);
        }
    }
}
