//! Game loop: one run of the game, driven by the host once per frame
//!
//! Owns the simulation state, its random source and the leaderboard port.
//! The final score is handed to the leaderboard exactly once, when the run
//! ends; a failing leaderboard is logged and otherwise ignored.

use crate::highscores::{LeaderboardPort, PlayerName, ScoreRecord};
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameState, PcgRandom, Playfield, RandomSource, TickInput,
    autopilot_target, tick,
};

/// What a host needs to draw the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
}

/// A single run from start to game over
pub struct GameLoop<L: LeaderboardPort, R: RandomSource = PcgRandom> {
    state: GameState,
    rng: R,
    leaderboard: L,
    score_recorded: bool,
}

impl<L: LeaderboardPort, R: RandomSource> GameLoop<L, R> {
    /// Start a run; seed fruit are launched immediately
    pub fn new(
        player_name: PlayerName,
        playfield: Playfield,
        settings: &Settings,
        mut rng: R,
        leaderboard: L,
    ) -> Self {
        let state = GameState::new(player_name, playfield, settings, &mut rng);
        log::info!(
            "Game started for {} on a {}x{} playfield",
            state.player_name(),
            playfield.width,
            playfield.height
        );
        Self {
            state,
            rng,
            leaderboard,
            score_recorded: false,
        }
    }

    /// Advance one frame with the basket aimed at `target_x`
    ///
    /// A no-op once the game is over.
    pub fn step(&mut self, dt: f32, target_x: f32) -> Vec<GameEvent> {
        let input = TickInput { target_x };
        let events = tick(&mut self.state, &input, dt, &mut self.rng);

        if self.state.is_game_over() && !self.score_recorded {
            self.score_recorded = true;
            let record = ScoreRecord::new(self.state.player_name().clone(), self.state.score());
            if let Err(e) = self.leaderboard.record_score(&record) {
                log::warn!("Could not record score for {}: {e}", record.player_name);
            }
        }

        events
    }

    /// Advance one frame letting the autopilot steer
    pub fn step_autopilot(&mut self, dt: f32) -> Vec<GameEvent> {
        let target_x = autopilot_target(&self.state);
        self.step(dt, target_x)
    }

    /// The host window changed size; applies to later frames
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.playfield = Playfield::new(width, height);
        let center = self.state.basket.center_x();
        self.state.basket.update(center, width);
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.state.score(),
            lives: self.state.lives(),
            phase: self.state.phase,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn leaderboard(&self) -> &L {
        &self.leaderboard
    }

    /// End the run and hand back the leaderboard
    pub fn into_leaderboard(self) -> L {
        self.leaderboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::{HighScores, LeaderboardError};
    use crate::sim::{FixedRandom, Fruit, FruitKind};
    use glam::Vec2;

    fn new_loop(lives: u8) -> GameLoop<HighScores, FixedRandom> {
        let settings = Settings {
            seed_fruits: 0,
            starting_lives: lives,
            ..Settings::default()
        };
        GameLoop::new(
            PlayerName::new("kai"),
            Playfield::new(800.0, 480.0),
            &settings,
            FixedRandom::constant(0.5),
            HighScores::new(),
        )
    }

    fn sinking_fruit(id: u32) -> Fruit {
        Fruit::new(
            id,
            Vec2::new(10.0, -100.0),
            Vec2::splat(48.0),
            Vec2::ZERO,
            FruitKind::Common,
        )
    }

    #[test]
    fn test_fresh_loop() {
        let settings = Settings::default();
        let game = GameLoop::new(
            PlayerName::default(),
            Playfield::new(800.0, 480.0),
            &settings,
            PcgRandom::new(3),
            HighScores::new(),
        );
        assert_eq!(
            game.hud(),
            Hud {
                score: 0,
                lives: 3,
                phase: GamePhase::Playing
            }
        );
        assert_eq!(game.state().fruits.len(), 3);
    }

    #[test]
    fn test_game_over_records_once() {
        let mut game = new_loop(1);
        game.state.fruits.push(sinking_fruit(1));
        game.state.scoreboard.score = 45;

        game.step(0.0, 400.0);
        assert!(game.is_game_over());
        assert_eq!(game.leaderboard().len(), 1);

        for _ in 0..10 {
            assert!(game.step(1.0 / 60.0, 0.0).is_empty());
        }
        let board = game.into_leaderboard();
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries[0], ScoreRecord::new(PlayerName::new("kai"), 45));
    }

    #[test]
    fn test_leaderboard_can_be_borrowed() {
        let mut board = HighScores::new();
        {
            let settings = Settings {
                seed_fruits: 0,
                starting_lives: 1,
                ..Settings::default()
            };
            let mut game = GameLoop::new(
                PlayerName::new("lee"),
                Playfield::new(800.0, 480.0),
                &settings,
                FixedRandom::constant(0.5),
                &mut board,
            );
            game.state.fruits.push(sinking_fruit(1));
            game.step(0.0, 400.0);
        }
        assert_eq!(board.top_score(), Some(0));
    }

    struct FailingStore {
        attempts: u32,
    }

    impl LeaderboardPort for FailingStore {
        fn record_score(&mut self, _record: &ScoreRecord) -> Result<(), LeaderboardError> {
            self.attempts += 1;
            Err(LeaderboardError::Unavailable("db down".into()))
        }

        fn top_scores(&self, _limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
            Err(LeaderboardError::Unavailable("db down".into()))
        }
    }

    #[test]
    fn test_failing_leaderboard_does_not_disturb_run() {
        let settings = Settings {
            seed_fruits: 0,
            starting_lives: 1,
            ..Settings::default()
        };
        let mut game = GameLoop::new(
            PlayerName::new("max"),
            Playfield::new(800.0, 480.0),
            &settings,
            FixedRandom::constant(0.5),
            FailingStore { attempts: 0 },
        );
        game.state.fruits.push(sinking_fruit(1));

        game.step(0.0, 400.0);
        game.step(0.0, 400.0);

        assert!(game.is_game_over());
        assert_eq!(game.hud().lives, 0);
        assert_eq!(game.leaderboard().attempts, 1);
    }

    #[test]
    fn test_zero_lives_setting_still_ends_the_run() {
        let settings = Settings {
            seed_fruits: 0,
            starting_lives: 0,
            fruit_size: 0.0,
            ..Settings::default()
        };
        let mut game = GameLoop::new(
            PlayerName::new("zed"),
            Playfield::new(800.0, 480.0),
            &settings,
            FixedRandom::constant(0.5),
            HighScores::new(),
        );
        assert_eq!(game.hud().lives, 3);

        for id in 1..=3 {
            game.state.fruits.push(sinking_fruit(id));
        }
        game.step(0.0, 400.0);

        assert!(game.is_game_over());
        assert_eq!(game.hud().lives, 0);
        assert_eq!(game.leaderboard().len(), 1);
    }

    #[test]
    fn test_resize_reclamps_basket() {
        let mut game = new_loop(3);
        game.step(0.0, 10_000.0);
        assert_eq!(game.state().basket.x(), 680.0);

        game.resize(400.0, 300.0);
        assert_eq!(game.state().basket.x(), 280.0);
        game.step(0.0, 10_000.0);
        assert_eq!(game.state().basket.x(), 280.0);
    }

    #[test]
    fn test_autopilot_runs_until_game_over() {
        let settings = Settings::default();
        let mut game = GameLoop::new(
            PlayerName::new("bot"),
            Playfield::new(800.0, 480.0),
            &settings,
            PcgRandom::new(11),
            HighScores::new(),
        );

        let mut ticks = 0;
        while !game.is_game_over() && ticks < 200_000 {
            game.step_autopilot(crate::consts::FRAME_DT);
            ticks += 1;
        }

        // Whatever happened, lives stay within bounds and at most one record exists
        assert!(game.hud().lives <= 3);
        assert!(game.leaderboard().len() <= 1);
        if game.is_game_over() {
            assert_eq!(game.leaderboard().len(), 1);
        }
    }
}
