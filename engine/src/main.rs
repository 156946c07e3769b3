//! A headless demo binary: builds a `World` from a synthetic in-memory
//! stage, drives it for a configurable number of ticks behind the
//! `NullRenderer`/`NullAudio` stand-ins, and prints a one-line summary.
//! Exists for manual/CI smoke testing, not for play (§10.2).

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use log::LevelFilter;

use platformer_core::constants::InputButtons;
use platformer_core::types::{Player, Stage, TileGrid};
use platformer_engine::interfaces::{EmptyStageSource, NullAudio, NullRenderer};
use platformer_engine::{TickOutcome, World};

#[derive(Parser, Debug)]
#[command(name = "sim-cli", about = "Headless smoke test for the platformer simulation core")]
struct Args {
    /// Number of ticks to run before stopping.
    #[arg(long, default_value_t = 400)]
    ticks: u64,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    let log_level = args.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    if let Err(e) = platformer_core::init_logging(log_level, None) {
        eprintln!("failed to initialize logging: {e}");
    }

    let quit_flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&quit_flag);
    if let Err(e) = ctrlc::set_handler(move || {
        log::info!("interrupt received, stopping after the current tick");
        handler_flag.store(true, Ordering::SeqCst);
    }) {
        log::warn!("failed to install Ctrl-C handler: {e}");
    }

    let player = Player::new(10, 10);
    let stage = Stage::new(TileGrid::empty());
    let mut world = World::new(player, stage, NullRenderer, NullAudio::default(), EmptyStageSource);

    let mut outcome = TickOutcome::Continue;
    let mut ticks_run = 0u64;
    while ticks_run < args.ticks && outcome == TickOutcome::Continue {
        if quit_flag.load(Ordering::SeqCst) {
            outcome = TickOutcome::Quit;
            break;
        }
        outcome = world.tick(InputButtons::empty());
        ticks_run += 1;
    }

    log::info!(
        "ran {ticks_run} ticks, outcome={outcome:?}, score={}, lives={}",
        world.score.value(),
        world.player.lives
    );

    process::exit(match outcome {
        TickOutcome::Quit => 0,
        TickOutcome::Victory => 1,
        TickOutcome::GameOver => 2,
        TickOutcome::Continue => 0,
    });
}
