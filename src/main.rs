//! Terminal blackjack.

use std::io;
use std::process::{self, ExitCode};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::terminal::TerminalFrontend;
use bjsim::{Game, GameOptions};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bjsim", about = "Casino blackjack against the dealer and three robots")]
struct Cli {
    /// Your name at the table (asked for when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Seed for the shoe and the robots' bets (defaults to the clock)
    #[arg(long, env = "BJSIM_SEED")]
    seed: Option<u64>,

    /// Starting bankroll for every seat
    #[arg(long, default_value_t = 1000)]
    bankroll: usize,

    /// Robot seats, comma separated
    #[arg(long, value_delimiter = ',', default_value = "Alice,Bob,Charlie")]
    robots: Vec<String>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let color = !cli.no_color;
    if let Err(err) = ctrlc::set_handler(move || {
        TerminalFrontend::new(io::empty(), io::stdout())
            .with_color(color)
            .interrupted();
        process::exit(0);
    }) {
        log::warn!("cannot catch Ctrl-C: {err}");
    }

    let mut frontend =
        TerminalFrontend::new(io::stdin().lock(), io::stdout()).with_color(color);

    let name = match cli.name {
        Some(name) => name,
        None => match frontend.request_name() {
            Ok(name) => name,
            Err(_) => return ExitCode::SUCCESS,
        },
    };

    let options = GameOptions::default()
        .with_player_name(name)
        .with_robots(cli.robots.into_iter().filter(|r| !r.trim().is_empty()))
        .with_starting_bankroll(cli.bankroll);

    let mut game = Game::new(options, seed);
    match game.run(&mut frontend) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("game aborted: {err}");
            eprintln!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
