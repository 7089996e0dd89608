//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - `dt` comes from the host; there is no internal clock
//! - Randomness only through an injected [`RandomSource`]
//! - No rendering, input device or storage dependencies

pub mod basket;
pub mod collision;
pub mod fruit;
pub mod rect;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use basket::Basket;
pub use collision::resolve;
pub use fruit::{Fruit, FruitKind, Sprite};
pub use rect::Rect;
pub use rng::{FixedRandom, PcgRandom, RandomSource};
pub use spawner::{SpawnTuning, Spawner};
pub use state::{GameEvent, GamePhase, GameState, Playfield, Scoreboard};
pub use tick::{TickInput, autopilot_target, tick};
