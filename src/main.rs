//! Gopher Rain entry point
//!
//! Headless demo: the autopilot plays for a while at a fixed frame rate and
//! the final frame is printed as JSON.
//!
//! Usage: `gopher-rain [seconds] [seed] [tuning.json]`

use gopher_rain::consts::SIM_DT;
use gopher_rain::sim::{GameEvent, GameState, autopilot_input, seeded};
use gopher_rain::{Session, SessionStatus, Tuning};

const DEFAULT_SECONDS: f32 = 60.0;
const DEFAULT_SEED: u64 = 0x60_9E_12;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let seconds = match args.next() {
        Some(arg) => arg.parse::<f32>()?,
        None => DEFAULT_SECONDS,
    };
    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>()?,
        None => DEFAULT_SEED,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    log::info!("Gopher Rain (headless) starting: {seconds}s, seed {seed}");

    let state = GameState::with_source(tuning, seeded(seed))?;
    let mut session = Session::new(state);

    let frames = (seconds / SIM_DT).max(0.0) as u64;
    let (mut caught, mut missed) = (0u32, 0u32);
    for _ in 0..frames {
        let input = autopilot_input(&session.state);
        if session.update(SIM_DT, &input) == SessionStatus::Quit {
            break;
        }
        for event in session.events() {
            match event {
                GameEvent::CoinCaught { .. } => caught += 1,
                GameEvent::CoinMissed { .. } => missed += 1,
                GameEvent::Reset => log::info!("Run reset"),
                GameEvent::CoinSpawned { .. } => {}
            }
        }
    }

    log::info!(
        "Done after {} ticks: {caught} caught, {missed} missed, {} resets, {} spawn faults",
        session.state.time_ticks,
        session.state.resets,
        session.faults()
    );

    let snapshot = session.state.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
