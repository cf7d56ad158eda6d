//! Cube Drive headless driver
//!
//! Runs the simulation without a window: key names come from a script or
//! from stdin, and the overhead view is printed as a text map.

use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;

use cube_drive::Settings;
use cube_drive::platform::{
    Clock, FrameCounter, INTERACTION_HELP, Key, KeyAction, KeyFeed, ManualClock, SystemClock,
    Wake,
};
use cube_drive::renderer::{ascii, status_message};
use cube_drive::sim::{GameEvent, GameState, TickInput, tick};

/// Simulated time between scripted key presses
const SCRIPT_KEY_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "cube-drive", about = "Drive a car through a field of cubes to the goal")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// RNG seed for the obstacle layout (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keys to replay, one per character (l, r, u, d, g, q)
    #[arg(long)]
    script: Option<String>,

    /// Print the overhead map after every redraw
    #[arg(short, long)]
    map: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let settings = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            Settings::from_json(&json)
                .with_context(|| format!("parsing settings in {}", path.display()))?
        }
        None => Settings::default(),
    };

    let seed = cli.seed.or(settings.seed).unwrap_or_else(clock_seed);
    let mut state = GameState::with_config(seed, settings.round_config());
    log::info!(
        "Cube Drive (native) starting: seed={}, {}x{} grid, {} cubes",
        seed,
        state.field.rows(),
        state.field.columns(),
        state.field.present_count()
    );

    println!("{INTERACTION_HELP}");
    let mut driver = Driver {
        frames: FrameCounter::new(),
        show_map: cli.map,
    };
    if cli.map {
        driver.draw(&state);
    }

    match &cli.script {
        Some(script) => {
            let clock = ManualClock::new();
            for c in script.chars().filter(|c| !c.is_whitespace()) {
                clock.advance(SCRIPT_KEY_INTERVAL);
                if !driver.press(&mut state, Key::from_script_char(c), &clock) {
                    break;
                }
            }
        }
        None => {
            let clock = SystemClock::new();
            let feed = KeyFeed::spawn(BufReader::new(std::io::stdin()));
            loop {
                match feed.wait(state.reset_timer.remaining(clock.now())) {
                    Wake::Key(key) => {
                        if !driver.press(&mut state, key, &clock) {
                            break;
                        }
                    }
                    Wake::Timeout => driver.step(&mut state, &TickInput::default(), &clock),
                    Wake::Closed => break,
                }
            }
        }
    }

    log::info!(
        "Session over (seed {}): {} wins, {} crashes, {} resets",
        state.rng_state.seed,
        state.stats.wins,
        state.stats.collisions,
        state.stats.resets
    );
    Ok(())
}

struct Driver {
    frames: FrameCounter,
    show_map: bool,
}

impl Driver {
    /// Handle one key press. Returns false when the player quits.
    fn press(&mut self, state: &mut GameState, key: Key, clock: &impl Clock) -> bool {
        let action = key.action();
        if action == KeyAction::Quit {
            return false;
        }
        let Some(input) = action.to_tick_input() else {
            log::debug!("Unmapped key {:?}", key);
            return true;
        };

        self.step(state, &input, clock);
        true
    }

    /// Advance the game once and redraw if anything changed
    fn step(&mut self, state: &mut GameState, input: &TickInput, clock: &impl Clock) {
        let now = clock.now();
        let result = tick(state, input, now);
        for event in &result.events {
            report(event);
        }
        if result.redraw {
            if let Some(fps) = self.frames.frame(now) {
                log::info!("FPS = {}", fps);
            }
            self.draw(state);
        }
    }

    fn draw(&self, state: &GameState) {
        if !self.show_map {
            return;
        }
        print!("{}", ascii::render_map(state));
        if let Some(message) = status_message(state.phase) {
            println!("{message}");
        }
        println!();
    }
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::Collided { .. } => println!("You Lose!"),
        GameEvent::Won { .. } => println!("You Win!"),
        GameEvent::Reset => println!("New round"),
        GameEvent::GroundToggled(style) => log::info!("Ground texture: {:?}", style),
        GameEvent::Moved { .. } | GameEvent::Turned { .. } => {}
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
