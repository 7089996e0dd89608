mod support;

use proptest::prelude::*;

use fruit_fly::difficulty_factor;
use fruit_fly::sim::{Basket, GameEvent, GamePhase, PcgRandom, Playfield, SpawnTuning, Spawner};
use fruit_fly::{GameLoop, PlayerName, Settings};

use support::RecordingLeaderboard;

proptest! {
    #[test]
    fn basket_stays_on_screen(
        screen_width in 150.0f32..3000.0,
        targets in prop::collection::vec(-1.0e6f32..1.0e6, 1..50),
    ) {
        let mut basket = Basket::new(screen_width, 120.0, 60.0, 40.0);
        for target in targets {
            basket.update(target, screen_width);
            prop_assert!(basket.x() >= 0.0);
            prop_assert!(basket.x() <= screen_width - basket.width());
        }
    }

    #[test]
    fn spawns_land_in_middle_band(
        seed in any::<u64>(),
        score in 0u64..100_000,
        width in 300.0f32..3000.0,
    ) {
        let mut spawner = Spawner::new(SpawnTuning::default());
        let mut rng = PcgRandom::new(seed);
        for _ in 0..20 {
            let fruit = spawner.spawn(score, width, 110.0, &mut rng);
            let size = fruit.size().x;
            prop_assert!(fruit.pos.x >= 0.2 * width - 1e-3);
            prop_assert!(fruit.pos.x <= 0.8 * width - size + 1e-3);
            prop_assert!(fruit.vel.x.abs() <= 70.0 + 1e-3);
            let difficulty = difficulty_factor(score, 150.0);
            prop_assert!(fruit.vel.y >= 300.0 * difficulty * (1.0 - 1e-5));
            prop_assert!(fruit.vel.y <= 420.0 * difficulty * (1.0 + 1e-5));
        }
    }

    #[test]
    fn spawn_interval_never_below_floor(catches in 0usize..500) {
        let mut spawner = Spawner::new(SpawnTuning::default());
        for _ in 0..catches {
            spawner.tighten();
            prop_assert!(spawner.interval() >= 0.4);
        }
    }

    #[test]
    fn difficulty_is_monotonic(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(difficulty_factor(lo, 150.0) <= difficulty_factor(hi, 150.0));
    }

    #[test]
    fn run_invariants_hold(
        seed in any::<u64>(),
        frames in prop::collection::vec((0.0f32..0.1, -200.0f32..1000.0), 1..400),
    ) {
        let settings = Settings::default();
        let mut game = GameLoop::new(
            PlayerName::new("prop"),
            Playfield::new(800.0, 480.0),
            &settings,
            PcgRandom::new(seed),
            RecordingLeaderboard::default(),
        );

        let mut last_lives = game.hud().lives;
        let mut last_score = game.hud().score;
        let mut game_overs = 0;

        for (dt, target) in frames {
            let was_over = game.is_game_over();
            let before = game.state().fruits.clone();
            let events = game.step(dt, target);
            let hud = game.hud();

            prop_assert!(hud.lives <= 3);
            prop_assert!(hud.lives <= last_lives);
            prop_assert!(hud.score >= last_score);
            game_overs += events
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();

            if was_over {
                prop_assert!(events.is_empty());
                prop_assert_eq!(&game.state().fruits, &before);
                prop_assert_eq!(hud.score, last_score);
            }
            prop_assert_eq!(hud.phase == GamePhase::GameOver, hud.lives == 0);

            last_lives = hud.lives;
            last_score = hud.score;
        }

        prop_assert!(game_overs <= 1);
        let recorded = game.leaderboard().records.len();
        prop_assert_eq!(recorded, usize::from(game.is_game_over()));
        prop_assert!(game.state().spawner.interval() >= 0.4);
    }
}
