//! Per-frame simulation tick
//!
//! Order within a tick: basket, spawner, fruit kinematics, collisions.

use super::collision::resolve;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer x the basket should center on
    pub target_x: f32,
}

/// Advance the game by `dt` seconds
///
/// Does nothing once the run is over. Returns what happened this tick.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut dyn RandomSource,
) -> Vec<GameEvent> {
    if state.phase == GamePhase::GameOver {
        return Vec::new();
    }

    state.time_ticks += 1;
    let mut events = Vec::new();

    state.basket.update(input.target_x, state.playfield.width);

    let spawn_y = state.spawn_y();
    if let Some(fruit) = state.spawner.maybe_spawn(
        state.scoreboard.score,
        dt,
        state.playfield.width,
        spawn_y,
        rng,
    ) {
        events.push(GameEvent::Spawned {
            id: fruit.id,
            kind: fruit.kind(),
        });
        state.fruits.push(fruit);
    }

    for fruit in &mut state.fruits {
        fruit.update(dt, state.gravity);
    }

    let basket = state.basket.bounds();
    let resolved = resolve(&mut state.fruits, &basket, &mut state.scoreboard);
    for event in &resolved {
        match event {
            GameEvent::Caught { .. } => state.spawner.tighten(),
            GameEvent::GameOver { score } => {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "Game over for {} with {} points after {} ticks",
                    state.player_name(),
                    score,
                    state.time_ticks
                );
            }
            _ => {}
        }
    }
    events.extend(resolved);

    events
}

/// Basket target for demo play: follow the lowest falling fruit
///
/// Picks the descending fruit with the lowest top edge and aims at its
/// center. With nothing falling the basket stays put.
pub fn autopilot_target(state: &GameState) -> f32 {
    state
        .fruits
        .iter()
        .filter(|f| f.vel.y < 0.0)
        .min_by(|a, b| {
            a.bounds()
                .top()
                .partial_cmp(&b.bounds().top())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|f| f.bounds().center().x)
        .unwrap_or_else(|| state.basket.center_x())
}
