//! Full rounds driven through the public API

use std::sync::mpsc;
use std::time::Duration;

use cube_drive::consts::*;
use cube_drive::platform::{Clock, Key, KeyFeed, ManualClock, SystemClock, Wake};
use cube_drive::renderer::Scene;
use cube_drive::sim::{
    CarPose, Command, GameEvent, GamePhase, GameState, RoundConfig, TickInput, tick,
};

const KEY_INTERVAL: Duration = Duration::from_millis(100);

fn press(state: &mut GameState, clock: &ManualClock, command: Command, times: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..times {
        clock.advance(KEY_INTERVAL);
        events.extend(tick(state, &TickInput::command(command), clock.now()).events);
    }
    events
}

#[test]
fn test_straight_run_through_full_field_wins() {
    // With an even column count the lattice straddles x = 0, leaving a lane
    let mut state = GameState::new(2024);
    assert_eq!(state.field.present_count(), ROWS * COLUMNS);
    let clock = ManualClock::new();

    let events = press(&mut state, &clock, Command::Forward, 85);
    assert_eq!(state.phase, GamePhase::Playing);
    assert!(events.iter().all(|e| matches!(e, GameEvent::Moved { .. })));

    let events = press(&mut state, &clock, Command::Forward, 1);
    assert_eq!(state.phase, GamePhase::Won);
    assert!(matches!(events.last(), Some(GameEvent::Won { .. })));
    assert_eq!(state.car.pos.y, -86.0);

    let won_at = clock.now();
    assert_eq!(state.reset_timer.due_at(), Some(won_at + Duration::from_millis(RESET_DELAY_MS)));

    // Frozen until the reset fires
    let frozen = state.car;
    let events = press(&mut state, &clock, Command::Backward, 5);
    assert!(events.is_empty());
    assert_eq!(state.car, frozen);

    clock.advance_to(won_at + Duration::from_millis(RESET_DELAY_MS));
    let result = tick(&mut state, &TickInput::default(), clock.now());
    assert_eq!(result.events, vec![GameEvent::Reset]);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.car, CarPose::default());
    assert_eq!(state.field.rows(), ROWS);
    assert_eq!(state.field.columns(), COLUMNS);
    assert_eq!(state.stats.wins, 1);
    assert_eq!(state.stats.resets, 1);
}

#[test]
fn test_swerving_into_a_cube_loses() {
    let mut state = GameState::new(7);
    let clock = ManualClock::new();

    press(&mut state, &clock, Command::Forward, 30);
    press(&mut state, &clock, Command::TurnRight, 18);
    assert_eq!(state.car.heading, 270.0);
    assert_eq!(state.phase, GamePhase::Playing);

    // Heading +x along z = -30 toward the cube at (15, -40)
    press(&mut state, &clock, Command::Forward, 8);
    assert_eq!(state.phase, GamePhase::Playing);
    let last_good = state.car;

    let events = press(&mut state, &clock, Command::Forward, 1);
    assert_eq!(state.phase, GamePhase::Collided);
    assert!(matches!(events.as_slice(), [GameEvent::Collided { .. }]));
    assert_eq!(state.car, last_good);
    assert!((state.car.pos.x - 8.0).abs() < 1e-3);
    assert_eq!(state.stats.collisions, 1);

    // Scene reflects the loss
    let scene = Scene::build(&state, (800, 400));
    assert_eq!(scene.overhead.message, Some("You Lose!"));
}

#[test]
fn test_reset_redraws_layout_with_same_dimensions() {
    let settings = cube_drive::Settings {
        fill_probability: 50,
        rows: 4,
        columns: 5,
        ..Default::default()
    };
    let mut state = GameState::with_config(31337, settings.round_config());
    let clock = ManualClock::new();

    // Crash by turning in place next to a planted cube
    state.field.insert(
        0,
        0,
        cube_drive::sim::Obstacle::new(glam::Vec3::new(-14.0, 0.0, 0.0), OBSTACLE_RADIUS, [9; 3]),
    );
    press(&mut state, &clock, Command::TurnLeft, 12);
    assert_eq!(state.phase, GamePhase::Collided);
    assert_eq!(state.car.heading, 55.0);

    clock.advance(Duration::from_secs(3));
    let result = tick(&mut state, &Key::Up.action().to_tick_input().unwrap(), clock.now());

    // Reset fires first, then the key drives the new round
    assert_eq!(result.events[0], GameEvent::Reset);
    assert!(matches!(result.events[1], GameEvent::Moved { .. }));
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.car.heading, 0.0);
    assert_eq!(state.field.rows(), 4);
    assert_eq!(state.field.columns(), 5);
    assert_eq!(state.rng_state.stream, 1);
}

#[test]
fn test_pending_reset_fires_without_a_key_press() {
    let config = RoundConfig {
        reset_delay: Duration::from_millis(30),
        ..Default::default()
    };
    let mut state = GameState::with_config(2024, config);
    let clock = SystemClock::new();
    for _ in 0..86 {
        tick(&mut state, &TickInput::command(Command::Forward), clock.now());
    }
    assert_eq!(state.phase, GamePhase::Won);

    // Input stays open but silent; the loop wakes when the reset falls due
    let (_keys, rx) = mpsc::channel::<Key>();
    let feed = KeyFeed::new(rx);
    let wait = state.reset_timer.remaining(clock.now());
    assert!(wait.is_some());
    assert_eq!(feed.wait(wait), Wake::Timeout);

    let result = tick(&mut state, &TickInput::default(), clock.now());
    assert_eq!(result.events, vec![GameEvent::Reset]);
    assert!(result.redraw);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.reset_timer.remaining(clock.now()), None);
}
