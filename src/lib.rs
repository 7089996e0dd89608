//! Fruit Fly - catch falling fruit in a basket
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (spawning, kinematics, collisions, game state)
//! - `game`: The game loop that owns a run and talks to the leaderboard
//! - `highscores`: Leaderboard port and in-memory leaderboard
//! - `persistence`: File-backed leaderboard
//! - `settings`: Tunable game parameters

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use game::{GameLoop, Hud};
pub use highscores::{HighScores, LeaderboardError, LeaderboardPort, PlayerName, ScoreRecord};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed frame step used by the headless host (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Downward acceleration applied to every fruit (units/s²)
    pub const GRAVITY: f32 = 800.0;

    /// Spawn timing (seconds)
    pub const INITIAL_SPAWN_INTERVAL: f32 = 1.0;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.4;
    /// Interval reduction per caught fruit
    pub const SPAWN_INTERVAL_STEP: f32 = 0.02;

    /// Fruit defaults
    pub const FRUIT_SIZE: f32 = 48.0;
    /// Fraction of the playfield width fruit may spawn in (centered)
    pub const SPAWN_BAND: f32 = 0.6;
    /// Gap between basket top and spawn height
    pub const SPAWN_HEIGHT_GAP: f32 = 10.0;
    /// Launch speed = (BASE + uniform(0, EXTRA)) * difficulty
    pub const BASE_LAUNCH_SPEED: f32 = 300.0;
    pub const EXTRA_LAUNCH_SPEED: f32 = 120.0;
    /// Horizontal drift is uniform in [-MAX, MAX]
    pub const MAX_DRIFT_SPEED: f32 = 70.0;
    /// difficulty = 1 + score / DIFFICULTY_DIVISOR
    pub const DIFFICULTY_DIVISOR: f32 = 150.0;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 120.0;
    pub const BASKET_HEIGHT: f32 = 60.0;
    pub const BASKET_Y: f32 = 40.0;

    /// Run defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const SEED_FRUITS: usize = 3;

    /// Name used when the player enters nothing or cancels
    pub const DEFAULT_PLAYER_NAME: &str = "Player";
    pub const MAX_PLAYER_NAME_LEN: usize = 20;

    /// Leaderboard rows shown by the menu
    pub const LEADERBOARD_SIZE: usize = 10;
}

/// Difficulty multiplier for a given score: `1 + score / 150`, uncapped
#[inline]
pub fn difficulty_factor(score: u64, divisor: f32) -> f32 {
    1.0 + score as f32 / divisor
}
