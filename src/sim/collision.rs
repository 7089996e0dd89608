//! Collision resolution against the basket and the floor
//!
//! Runs once per tick after every fruit has moved. Fruit are visited from the
//! last index to the first so removals never shift an unvisited fruit. Each
//! fruit gets at most one outcome, and the floor check wins over the basket.

use super::fruit::Fruit;
use super::rect::Rect;
use super::state::{GameEvent, Scoreboard};

/// Resolve floor crossings and catches, removing resolved fruit
///
/// A floor crossing costs a life; the one that takes lives to zero emits
/// [`GameEvent::GameOver`] and stops the pass, leaving the remaining fruit
/// untouched. A catch adds the fruit's points. Interval tightening for
/// catches is left to the caller via [`GameEvent::Caught`].
pub fn resolve(
    fruits: &mut Vec<Fruit>,
    basket: &Rect,
    scoreboard: &mut Scoreboard,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if scoreboard.lives == 0 {
        return events;
    }

    for i in (0..fruits.len()).rev() {
        let bounds = fruits[i].bounds();

        if bounds.below_floor() {
            let fruit = fruits.remove(i);
            scoreboard.lives = scoreboard.lives.saturating_sub(1);
            log::debug!("Fruit {} dropped, {} lives left", fruit.id, scoreboard.lives);
            events.push(GameEvent::Dropped {
                id: fruit.id,
                lives_left: scoreboard.lives,
            });

            if scoreboard.lives == 0 {
                events.push(GameEvent::GameOver {
                    score: scoreboard.score,
                });
                break;
            }
            continue;
        }

        if bounds.overlaps(basket) {
            let fruit = fruits.remove(i);
            let points = fruit.points();
            scoreboard.score += u64::from(points);
            log::debug!("Caught fruit {} for {} points", fruit.id, points);
            events.push(GameEvent::Caught {
                id: fruit.id,
                kind: fruit.kind(),
                points,
            });
        }
    }

    events
}
