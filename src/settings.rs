//! Game settings
//!
//! Tuning for the simulation plus a few host options, stored as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SpawnTuning;

/// Tunable parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,

    // === Spawning ===
    pub initial_spawn_interval: f32,
    /// Floor the interval never drops below
    pub min_spawn_interval: f32,
    /// Interval reduction per catch
    pub spawn_interval_step: f32,
    pub fruit_size: f32,
    /// Fraction of the width fruit may spawn in
    pub spawn_band: f32,
    pub spawn_height_gap: f32,
    pub base_launch_speed: f32,
    pub extra_launch_speed: f32,
    pub max_drift_speed: f32,
    pub difficulty_divisor: f32,

    // === Basket ===
    pub basket_width: f32,
    pub basket_height: f32,
    pub basket_y: f32,

    // === Run ===
    pub starting_lives: u8,
    /// Fruit already in flight when a run starts
    pub seed_fruits: usize,

    // === Host ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub leaderboard_path: PathBuf,
    /// Rows shown on the leaderboard
    pub leaderboard_size: usize,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
    /// Headless runs stop after this many ticks
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,

            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            fruit_size: FRUIT_SIZE,
            spawn_band: SPAWN_BAND,
            spawn_height_gap: SPAWN_HEIGHT_GAP,
            base_launch_speed: BASE_LAUNCH_SPEED,
            extra_launch_speed: EXTRA_LAUNCH_SPEED,
            max_drift_speed: MAX_DRIFT_SPEED,
            difficulty_divisor: DIFFICULTY_DIVISOR,

            basket_width: BASKET_WIDTH,
            basket_height: BASKET_HEIGHT,
            basket_y: BASKET_Y,

            starting_lives: STARTING_LIVES,
            seed_fruits: SEED_FRUITS,

            screen_width: 800.0,
            screen_height: 480.0,
            leaderboard_path: PathBuf::from("fruit_fly_leaderboard.json"),
            leaderboard_size: LEADERBOARD_SIZE,
            seed: None,
            // Ten minutes at 60 Hz
            max_ticks: 36_000,
        }
    }
}

impl Settings {
    /// Spawner parameters
    pub fn spawn_tuning(&self) -> SpawnTuning {
        SpawnTuning {
            fruit_size: self.fruit_size,
            band: self.spawn_band,
            base_launch_speed: self.base_launch_speed,
            extra_launch_speed: self.extra_launch_speed,
            max_drift_speed: self.max_drift_speed,
            difficulty_divisor: self.difficulty_divisor,
            initial_interval: self.initial_spawn_interval,
            min_interval: self.min_spawn_interval,
            interval_step: self.spawn_interval_step,
        }
    }

    /// Replace values the simulation cannot run with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn positive(value: f32, fallback: f32) -> f32 {
            if value.is_finite() && value > 0.0 { value } else { fallback }
        }

        self.gravity = positive(self.gravity, defaults.gravity);
        self.initial_spawn_interval =
            positive(self.initial_spawn_interval, defaults.initial_spawn_interval);
        self.min_spawn_interval = positive(self.min_spawn_interval, defaults.min_spawn_interval);
        if self.min_spawn_interval > self.initial_spawn_interval {
            self.min_spawn_interval = self.initial_spawn_interval;
        }
        if !self.spawn_interval_step.is_finite() || self.spawn_interval_step < 0.0 {
            self.spawn_interval_step = defaults.spawn_interval_step;
        }
        self.fruit_size = positive(self.fruit_size, defaults.fruit_size);
        if !(self.spawn_band > 0.0 && self.spawn_band <= 1.0) {
            self.spawn_band = defaults.spawn_band;
        }
        self.difficulty_divisor = positive(self.difficulty_divisor, defaults.difficulty_divisor);
        self.basket_width = positive(self.basket_width, defaults.basket_width);
        self.basket_height = positive(self.basket_height, defaults.basket_height);
        self.screen_width = positive(self.screen_width, defaults.screen_width);
        self.screen_height = positive(self.screen_height, defaults.screen_height);
        if self.starting_lives == 0 {
            self.starting_lives = defaults.starting_lives;
        }
        self.starting_lives = self.starting_lives.min(STARTING_LIVES);
        if self.leaderboard_size == 0 {
            self.leaderboard_size = defaults.leaderboard_size;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {e}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Malformed settings {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
