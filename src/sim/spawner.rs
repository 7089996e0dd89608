//! Timer-driven fruit spawning
//!
//! Fruit is launched upward from just above the basket inside the middle
//! band of the playfield. Launch speed scales with the score, and every catch
//! shortens the spawn interval down to a floor.

use glam::Vec2;

use super::fruit::{Fruit, FruitKind};
use super::rng::RandomSource;
use crate::consts::*;
use crate::difficulty_factor;

/// Spawn parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTuning {
    pub fruit_size: f32,
    /// Fraction of the playfield width used for spawning, centered
    pub band: f32,
    /// Launch speed before difficulty scaling: base + uniform(0, extra)
    pub base_launch_speed: f32,
    pub extra_launch_speed: f32,
    pub max_drift_speed: f32,
    pub difficulty_divisor: f32,
    pub initial_interval: f32,
    pub min_interval: f32,
    pub interval_step: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            fruit_size: FRUIT_SIZE,
            band: SPAWN_BAND,
            base_launch_speed: BASE_LAUNCH_SPEED,
            extra_launch_speed: EXTRA_LAUNCH_SPEED,
            max_drift_speed: MAX_DRIFT_SPEED,
            difficulty_divisor: DIFFICULTY_DIVISOR,
            initial_interval: INITIAL_SPAWN_INTERVAL,
            min_interval: MIN_SPAWN_INTERVAL,
            interval_step: SPAWN_INTERVAL_STEP,
        }
    }
}

/// Decides when and where fruit appears
#[derive(Debug, Clone)]
pub struct Spawner {
    tuning: SpawnTuning,
    timer: f32,
    interval: f32,
    next_id: u32,
}

impl Spawner {
    pub fn new(tuning: SpawnTuning) -> Self {
        Self {
            tuning,
            timer: 0.0,
            interval: tuning.initial_interval,
            next_id: 1,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn tuning(&self) -> &SpawnTuning {
        &self.tuning
    }

    /// Horizontal spawn range `[min_x, max_x]` for a playfield width
    pub fn spawn_range(&self, width: f32) -> (f32, f32) {
        let band = width * self.tuning.band;
        let min_x = (width - band) / 2.0;
        let span = (band - self.tuning.fruit_size).max(0.0);
        (min_x, min_x + span)
    }

    /// Accumulate `dt` and spawn once the interval has elapsed
    pub fn maybe_spawn(
        &mut self,
        score: u64,
        dt: f32,
        width: f32,
        spawn_y: f32,
        rng: &mut dyn RandomSource,
    ) -> Option<Fruit> {
        self.timer += dt;
        if self.timer < self.interval {
            return None;
        }
        self.timer = 0.0;
        Some(self.spawn(score, width, spawn_y, rng))
    }

    /// Create one fruit immediately, ignoring the timer
    pub fn spawn(
        &mut self,
        score: u64,
        width: f32,
        spawn_y: f32,
        rng: &mut dyn RandomSource,
    ) -> Fruit {
        let t = &self.tuning;
        let (min_x, max_x) = self.spawn_range(width);
        let x = rng.range_f32(min_x, max_x);

        let vx = rng.range_f32(-t.max_drift_speed, t.max_drift_speed);
        let difficulty = difficulty_factor(score, t.difficulty_divisor);
        let vy = (t.base_launch_speed + rng.next_f32() * t.extra_launch_speed) * difficulty;

        let kind = FruitKind::from_roll(rng.next_index(FruitKind::ALL.len()));

        let id = self.next_id;
        self.next_id += 1;

        log::debug!(
            "Spawned fruit {} ({:?}) at x={:.1} vel=({:.1}, {:.1}) difficulty={:.2}",
            id,
            kind,
            x,
            vx,
            vy,
            difficulty
        );

        Fruit::new(
            id,
            Vec2::new(x, spawn_y),
            Vec2::splat(t.fruit_size),
            Vec2::new(vx, vy),
            kind,
        )
    }

    /// Shorten the spawn interval after a catch, never below the floor
    pub fn tighten(&mut self) {
        self.interval = (self.interval - self.tuning.interval_step).max(self.tuning.min_interval);
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SpawnTuning::default())
    }
}
