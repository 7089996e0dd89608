// Shared fixtures for the integration tests.
#![allow(dead_code)]

use fruit_fly::sim::{FixedRandom, Playfield};
use fruit_fly::{GameLoop, LeaderboardError, LeaderboardPort, PlayerName, ScoreRecord, Settings};

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 480.0;

// Leaderboard that remembers every call made to it.
#[derive(Debug, Default)]
pub struct RecordingLeaderboard {
    pub records: Vec<ScoreRecord>,
}

impl LeaderboardPort for RecordingLeaderboard {
    fn record_score(&mut self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(limit);
        Ok(sorted)
    }
}

// Random values for one spawn, in draw order: x, drift, launch, kind.
// 0.5 / 0.5 / 0.0 / 0.4 puts a grape at x = 376 with no drift, launched at 300.
pub fn rare_fruit_rng() -> FixedRandom {
    FixedRandom::new(vec![0.5, 0.5, 0.0, 0.4])
}

// Settings with a single seed fruit.
pub fn one_fruit_settings(lives: u8) -> Settings {
    Settings {
        seed_fruits: 1,
        starting_lives: lives,
        ..Settings::default()
    }
}

pub fn start(
    settings: &Settings,
    rng: FixedRandom,
    leaderboard: RecordingLeaderboard,
) -> GameLoop<RecordingLeaderboard, FixedRandom> {
    GameLoop::new(
        PlayerName::new("tester"),
        Playfield::new(WIDTH, HEIGHT),
        settings,
        rng,
        leaderboard,
    )
}
