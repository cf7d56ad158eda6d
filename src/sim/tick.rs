//! Discrete-event simulation step
//!
//! One input is processed to completion before the next is accepted.

use std::time::Duration;

use super::collision::{car_collides, reached_goal};
use super::state::{Command, GameEvent, GamePhase, GameState};

/// Input for a single step
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Driving command (arrow keys)
    pub command: Option<Command>,
    /// Swap the ground texture
    pub toggle_ground: bool,
}

impl TickInput {
    pub fn command(command: Command) -> Self {
        Self {
            command: Some(command),
            ..Default::default()
        }
    }
}

/// What a step produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<GameEvent>,
    /// The host should redraw the frame
    pub redraw: bool,
}

/// Advance the game by one input at monotonic time `now`.
///
/// A due reset fires first, so a command arriving in the same step drives
/// the fresh round.
pub fn tick(state: &mut GameState, input: &TickInput, now: Duration) -> TickResult {
    let mut events = Vec::new();

    if state.reset_timer.poll(now) {
        state.reset();
        events.push(GameEvent::Reset);
    }

    if let Some(command) = input.command {
        apply_command(state, command, now, &mut events);
    }

    if input.toggle_ground {
        state.ground = state.ground.toggled();
        events.push(GameEvent::GroundToggled(state.ground));
    }

    let redraw = !events.is_empty();
    TickResult { events, redraw }
}

/// Apply one driving command.
///
/// The candidate pose is always derived from the committed pose. Turning
/// keeps the position, so a turn in place is tested with the new heading
/// and can itself collide.
pub fn apply_command(
    state: &mut GameState,
    command: Command,
    now: Duration,
    events: &mut Vec<GameEvent>,
) {
    if state.phase.is_over() {
        log::trace!("Ignoring {:?} while {:?}", command, state.phase);
        return;
    }

    let candidate = state.car.advanced(command, &state.config);

    if car_collides(candidate.pos, candidate.heading, &state.field) {
        state.phase = GamePhase::Collided;
        state.stats.collisions += 1;
        state.reset_timer.schedule(now, state.config.reset_delay);
        log::info!(
            "Collision on {:?} at ({:.1}, {:.1}) heading {:.0}",
            command,
            candidate.pos.x,
            candidate.pos.y,
            candidate.heading
        );
        events.push(GameEvent::Collided {
            pos: candidate.pos,
            heading: candidate.heading,
        });
        return;
    }

    state.car = candidate;
    match command {
        Command::TurnLeft | Command::TurnRight => events.push(GameEvent::Turned {
            heading: candidate.heading,
        }),
        Command::Forward | Command::Backward => {
            events.push(GameEvent::Moved { pos: candidate.pos })
        }
    }
    log::debug!(
        "Car at ({:.1}, {:.1}) heading {:.0}",
        candidate.pos.x,
        candidate.pos.y,
        candidate.heading
    );

    if reached_goal(state.car.pos) {
        state.phase = GamePhase::Won;
        state.stats.wins += 1;
        state.reset_timer.schedule(now, state.config.reset_delay);
        log::info!("Goal reached at ({:.1}, {:.1})", state.car.pos.x, state.car.pos.y);
        events.push(GameEvent::Won { pos: state.car.pos });
    }
}
