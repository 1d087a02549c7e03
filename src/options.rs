//! Table configuration.
//!
//! The house rules are fixed; only the seating can be changed.

/// Number of decks in the shoe.
pub const DECKS: u8 = 6;

/// Fraction of the shoe dealt before a reshuffle.
pub const PENETRATION: f64 = 0.75;

/// Table minimum bet.
pub const MIN_BET: usize = 10;

/// Maximum bet for the human seat.
pub const HUMAN_MAX_BET: usize = 500;

/// Maximum bet the robots will place.
pub const ROBOT_MAX_BET: usize = 50;

/// Maximum number of splits per player per round.
pub const MAX_SPLITS: usize = 3;

/// Who sits at the table and with how much.
///
/// Built up from the default seating:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_name("Ada")
///     .with_robots(["Alice", "Bob"])
///     .with_starting_bankroll(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name of the human seat.
    pub player_name: String,
    /// Names of the robot seats, in playing order after the human.
    pub robots: Vec<String>,
    /// Bankroll every seat starts with.
    pub starting_bankroll: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            robots: ["Alice", "Bob", "Charlie"]
                .into_iter()
                .map(String::from)
                .collect(),
            starting_bankroll: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the human player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Ada");
    /// assert_eq!(options.player_name, "Ada");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the robot seats.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_robots(Vec::<String>::new());
    /// assert!(options.robots.is_empty());
    /// ```
    #[must_use]
    pub fn with_robots<I, S>(mut self, robots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.robots = robots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }
}
