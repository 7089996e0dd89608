//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; components only see the
//! pieces handed to them.

use super::basket::Basket;
use super::fruit::{Fruit, FruitKind};
use super::rng::RandomSource;
use super::spawner::Spawner;
use crate::highscores::PlayerName;
use crate::settings::Settings;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new fruit was launched
    Spawned { id: u32, kind: FruitKind },
    /// A fruit landed in the basket
    Caught { id: u32, kind: FruitKind, points: u32 },
    /// A fruit fell off the bottom of the playfield
    Dropped { id: u32, lives_left: u8 },
    /// Lives ran out; carries the final score
    GameOver { score: u64 },
}

/// Visible simulation area (y-up, floor at 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Score and remaining lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u8,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Captured at game start, never changes
    player_name: PlayerName,
    pub playfield: Playfield,
    pub phase: GamePhase,
    pub scoreboard: Scoreboard,
    /// Live fruit
    pub fruits: Vec<Fruit>,
    pub basket: Basket,
    pub spawner: Spawner,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Gap between basket top and the spawn height
    pub spawn_height_gap: f32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
}

impl GameState {
    /// Start a run with the configured number of seed fruit already in flight
    ///
    /// Settings are sanitized first, so a run always starts with at least one life.
    pub fn new(
        player_name: PlayerName,
        playfield: Playfield,
        settings: &Settings,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let settings = &settings.clone().sanitized();
        let mut state = Self {
            player_name,
            playfield,
            phase: GamePhase::Playing,
            scoreboard: Scoreboard {
                score: 0,
                lives: settings.starting_lives,
            },
            fruits: Vec::new(),
            basket: Basket::new(
                playfield.width,
                settings.basket_width,
                settings.basket_height,
                settings.basket_y,
            ),
            spawner: Spawner::new(settings.spawn_tuning()),
            gravity: settings.gravity,
            spawn_height_gap: settings.spawn_height_gap,
            time_ticks: 0,
        };

        let spawn_y = state.spawn_y();
        for _ in 0..settings.seed_fruits {
            let fruit = state.spawner.spawn(0, playfield.width, spawn_y, rng);
            state.fruits.push(fruit);
        }

        state
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.player_name
    }

    pub fn score(&self) -> u64 {
        self.scoreboard.score
    }

    pub fn lives(&self) -> u8 {
        self.scoreboard.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Height new fruit appears at: just above the basket
    pub fn spawn_y(&self) -> f32 {
        self.basket.top() + self.spawn_height_gap
    }

    /// Current difficulty multiplier on launch speed
    pub fn difficulty(&self) -> f32 {
        crate::difficulty_factor(self.scoreboard.score, self.spawner.tuning().difficulty_divisor)
    }
}
