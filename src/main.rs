//! Fruit Fly headless host
//!
//! Runs one game with the autopilot steering the basket, records the result
//! on the leaderboard and prints the top scores.
//!
//! Usage: `fruit-fly [PLAYER_NAME] [--settings PATH]`

use std::path::PathBuf;

use fruit_fly::consts::FRAME_DT;
use fruit_fly::highscores::{format_ranked, top_scores_or_empty};
use fruit_fly::persistence::JsonLeaderboard;
use fruit_fly::sim::{GameEvent, PcgRandom, Playfield};
use fruit_fly::{GameLoop, HighScores, LeaderboardPort, PlayerName, Settings};

const DEFAULT_SETTINGS_PATH: &str = "fruit_fly_settings.json";

struct Args {
    player_name: PlayerName,
    settings_path: PathBuf,
}

fn parse_args() -> Args {
    let mut player_name = None;
    let mut settings_path = PathBuf::from(DEFAULT_SETTINGS_PATH);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => match args.next() {
                Some(path) => settings_path = PathBuf::from(path),
                None => log::warn!("--settings needs a path, keeping {}", settings_path.display()),
            },
            _ => player_name = Some(arg),
        }
    }

    Args {
        player_name: player_name
            .map(|name| PlayerName::new(&name))
            .unwrap_or_else(PlayerName::cancelled),
        settings_path,
    }
}

fn open_leaderboard(settings: &Settings) -> Box<dyn LeaderboardPort> {
    match JsonLeaderboard::open(&settings.leaderboard_path) {
        Ok(board) => Box::new(board),
        Err(e) => {
            log::warn!("Leaderboard unavailable ({e}), scores will not be kept");
            Box::new(HighScores::new())
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Fruit Fly (headless) starting...");

    let args = parse_args();
    let settings = Settings::load_from(&args.settings_path);

    let rng = match settings.seed {
        Some(seed) => PcgRandom::new(seed),
        None => PcgRandom::from_entropy(),
    };
    log::info!("Using seed {}", rng.seed());

    let playfield = Playfield::new(settings.screen_width, settings.screen_height);
    let mut game = GameLoop::new(
        args.player_name,
        playfield,
        &settings,
        rng,
        open_leaderboard(&settings),
    );

    let mut ticks = 0u64;
    let mut caught = 0u32;
    while !game.is_game_over() && ticks < settings.max_ticks {
        for event in game.step_autopilot(FRAME_DT) {
            if let GameEvent::Caught { .. } = event {
                caught += 1;
            }
        }
        ticks += 1;
    }

    let hud = game.hud();
    if game.is_game_over() {
        println!(
            "GAME OVER - {} scored {} ({} fruit caught in {:.1}s)",
            game.state().player_name(),
            hud.score,
            caught,
            ticks as f32 * FRAME_DT
        );
    } else {
        println!(
            "Stopped after {} ticks - score {}, {} lives left",
            ticks, hud.score, hud.lives
        );
    }

    let leaderboard = game.into_leaderboard();
    println!("\nLeaderboard");
    for line in format_ranked(&top_scores_or_empty(&*leaderboard, settings.leaderboard_size)) {
        println!("{line}");
    }
}
