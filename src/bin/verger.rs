//! Verger simulator.
//!
//! With no arguments, plays a batch of games for each harvest policy and
//! prints the win/loss tally. `--single` and `--showcase` render one game.

use anyhow::Context;
use clap::Parser;
use verger_sim::display::{render_outcome, render_state};
use verger_sim::{
    find_showcase, play_recorded, BatchConfig, BatchRunner, GameEngine, GameLog, GameRng, OrchardConfig,
    PolicyKind,
};

/// Games replayed before giving up on a showcase.
const SHOWCASE_ATTEMPTS: u64 = 1_000_000;

#[derive(Debug, Parser)]
#[command(name = "verger", about = "Simulate the Verger orchard game under each harvest policy")]
struct Cli {
    /// Play and render a single game with this policy
    #[arg(long, value_name = "POLICY", conflicts_with = "showcase")]
    single: Option<PolicyKind>,

    /// Replay games with this policy until a 16-turn basket-heavy win, then render it
    #[arg(long, value_name = "POLICY")]
    showcase: Option<PolicyKind>,

    /// Base seed for the dice
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = BatchConfig::new().with_seed(cli.seed);

    if let Some(policy) = cli.single {
        let mut engine = GameEngine::new(config.orchard, policy, GameRng::new(cli.seed));
        let game = play_recorded(&mut engine).context("single game aborted")?;
        print_game(&game, &config.orchard);
    } else if let Some(policy) = cli.showcase {
        let mut engine = GameEngine::new(config.orchard, policy, GameRng::new(cli.seed));
        match find_showcase(&mut engine, SHOWCASE_ATTEMPTS).context("showcase search aborted")? {
            Some(game) => print_game(&game, &config.orchard),
            None => println!("No showcase game in {} attempts", SHOWCASE_ATTEMPTS),
        }
    } else {
        let runner = BatchRunner::new(config);
        for policy in PolicyKind::ALL {
            let report = runner
                .run(policy)
                .with_context(|| format!("batch for {} aborted", policy))?;
            println!("{}", report);
        }
    }

    Ok(())
}

fn print_game(game: &GameLog, config: &OrchardConfig) {
    for state in &game.snapshots {
        println!("{}", render_state(state, config));
    }
    println!("{}", render_outcome(game.result));
}
