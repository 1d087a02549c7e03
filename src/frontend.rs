//! The boundary between the table and whoever is watching it.
//!
//! The game never prints or reads anything itself. It asks a [`Frontend`]
//! for the human player's decisions and tells it what happened through
//! [`Event`]s.

use crate::card::Card;
use crate::error::Interrupted;
use crate::hand::DealerHand;
use crate::player::Player;
use crate::result::{PlayerResult, Standing};
use crate::strategy::Action;

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new round is starting.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// The shoe was replaced with a freshly shuffled one.
    Reshuffled,
    /// A player could not cover the minimum bet and sits the round out.
    SatOut {
        /// Player name.
        name: String,
    },
    /// The human answered with a bet outside the table limits.
    InvalidBet {
        /// Requested amount.
        amount: usize,
        /// Table minimum.
        min: usize,
        /// Maximum for this player.
        max: usize,
    },
    /// A bet was placed.
    BetPlaced {
        /// Player name.
        name: String,
        /// Bet amount.
        amount: usize,
        /// Bankroll after the bet.
        bankroll: usize,
    },
    /// Nobody could bet, so the game is over.
    NoActivePlayers,
    /// The dealer shows an Ace.
    InsuranceOffered,
    /// A player bought insurance.
    InsuranceTaken {
        /// Player name.
        name: String,
        /// Insurance stake.
        stake: usize,
    },
    /// A player passed on insurance.
    InsuranceDeclined {
        /// Player name.
        name: String,
    },
    /// A player asked for insurance they could not afford.
    InsuranceRejected {
        /// Player name.
        name: String,
    },
    /// The dealer turned over a natural.
    DealerBlackjack,
    /// An insurance bet paid 2:1.
    InsurancePaid {
        /// Player name.
        name: String,
        /// Winnings, not counting the returned stake.
        winnings: usize,
    },
    /// An insurance bet was lost.
    InsuranceLost {
        /// Player name.
        name: String,
        /// Lost stake.
        stake: usize,
    },
    /// A natural pushed against the dealer's natural.
    BlackjackPush {
        /// Player name.
        name: String,
    },
    /// A player was dealt a natural and stands on it.
    Blackjack {
        /// Player name.
        name: String,
    },
    /// A player's turn on one of their hands starts.
    TurnStarted {
        /// Player name.
        name: String,
        /// Hand index.
        hand_index: usize,
    },
    /// The human picked an action that was not on offer.
    InvalidAction {
        /// The rejected action.
        action: Action,
    },
    /// A player drew a card.
    Hit {
        /// Player name.
        name: String,
        /// The card drawn.
        card: Card,
        /// Hand total after the draw.
        total: u8,
    },
    /// A player stood.
    Stand {
        /// Player name.
        name: String,
        /// Hand total.
        total: u8,
    },
    /// A player doubled down.
    Doubled {
        /// Player name.
        name: String,
        /// The single card drawn.
        card: Card,
        /// Hand total after the draw.
        total: u8,
    },
    /// A player split a pair.
    Split {
        /// Player name.
        name: String,
        /// Number of hands the player now holds.
        hands: usize,
    },
    /// A hand went over 21.
    Busted {
        /// Player name.
        name: String,
        /// Final total.
        total: u8,
    },
    /// Every hand on the table busted; the dealer does not draw.
    AllBusted,
    /// The dealer turned over the hole card.
    DealerReveals {
        /// Dealer total.
        total: u8,
    },
    /// The dealer drew a card.
    DealerHits {
        /// The card drawn.
        card: Card,
        /// Dealer total after the draw.
        total: u8,
    },
    /// The dealer stood.
    DealerStands {
        /// Dealer total.
        total: u8,
    },
    /// The dealer busted.
    DealerBusts {
        /// Dealer total.
        total: u8,
    },
    /// A player's hands were paid out.
    Settled(PlayerResult),
    /// The human can no longer cover the minimum bet.
    OutOfMoney {
        /// Player name.
        name: String,
    },
    /// Input was interrupted; the game stops after this.
    Interrupted,
    /// Final bankrolls.
    FinalStandings(Vec<Standing>),
    /// Last words.
    Farewell,
}

/// The presentation and input collaborator.
///
/// Request methods block until the human answers. Returning
/// [`Interrupted`] from any of them ends the whole run.
pub trait Frontend {
    /// Asks the human for a bet in `min..=max`.
    ///
    /// Implementations should keep asking until they get a number. The game
    /// checks the range again and re-asks when the answer falls outside it.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when input is no longer available.
    fn request_human_bet(
        &mut self,
        name: &str,
        bankroll: usize,
        min: usize,
        max: usize,
    ) -> Result<usize, Interrupted>;

    /// Asks the human whether to insure for `stake`.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when input is no longer available.
    fn request_human_insurance(&mut self, name: &str, stake: usize) -> Result<bool, Interrupted>;

    /// Asks the human to pick one of `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when input is no longer available.
    fn request_human_action(&mut self, name: &str, options: &[Action])
    -> Result<Action, Interrupted>;

    /// Asks whether to deal another round.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when input is no longer available.
    fn request_continue(&mut self) -> Result<bool, Interrupted>;

    /// Shows the table.
    fn display_table(&mut self, players: &[&Player], dealer: &DealerHand, hide_hole_card: bool);

    /// Reports an event.
    fn notify(&mut self, event: &Event);
}
