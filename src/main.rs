//! Neon Snake entry point
//!
//! Headless native runner: drives the engine on the fixed tick period with
//! a simple autopilot, logging state as it goes. A graphical frontend would
//! replace the autopilot with real key/swipe events and draw the snapshot.

use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use neon_snake::sim::{Direction, GamePhase, Position};
use neon_snake::{Engine, GridConfig, Snapshot};

/// Ticks before the demo gives up on a run
const MAX_DEMO_TICKS: u32 = 2000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let start_level: u32 = args
        .next()
        .and_then(|a| a.parse().ok())
        .filter(|&l| l >= 1)
        .unwrap_or(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Neon Snake demo: level {start_level}, seed {seed}");

    let mut engine = Engine::new(GridConfig::default(), seed);
    if let Err(err) = engine.start(start_level) {
        log::error!("could not start: {err}");
        return;
    }

    let mut ticks = 0;
    while ticks < MAX_DEMO_TICKS {
        // Timer is armed only while the game runs
        while engine.is_running() && ticks < MAX_DEMO_TICKS {
            let snapshot = engine.snapshot();
            if let Some(direction) = choose_direction(&snapshot) {
                engine.on_key(direction);
            }
            engine.tick();
            ticks += 1;
            thread::sleep(Engine::TICK_INTERVAL);
        }

        let snapshot = engine.snapshot();
        match snapshot.phase {
            GamePhase::LevelComplete => {
                log::info!(
                    "level {} complete ({}/{}), advancing",
                    snapshot.level,
                    snapshot.score,
                    snapshot.required_score
                );
                engine.advance_level();
            }
            GamePhase::GameOver => {
                log::info!(
                    "game over on level {} with score {}/{}",
                    snapshot.level,
                    snapshot.score,
                    snapshot.required_score
                );
                break;
            }
            _ => break,
        }
    }

    if let Ok(json) = engine.snapshot().to_json() {
        println!("{json}");
    }
}

/// Greedy autopilot: close in on the food without stepping into anything
///
/// Scores each survivable direction by Manhattan distance from the
/// resulting head cell to the food and presses the best one. The input
/// director still applies the axis rule, so same-axis suggestions fall
/// through to the current heading.
fn choose_direction(snapshot: &Snapshot) -> Option<Direction> {
    let head = snapshot.snake[0];
    let grid_size = snapshot.grid.grid_size;
    let wraps = snapshot.level <= 2;

    let survives = |pos: &Position| {
        !snapshot.walls.contains(pos) && !snapshot.snake.contains(pos) && pos.in_bounds(grid_size)
    };

    [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]
    .into_iter()
    .filter_map(|dir| {
        let mut next = head.step(dir);
        if wraps {
            next = next.wrapped(grid_size);
        }
        survives(&next).then(|| (dir, next.manhattan(snapshot.food)))
    })
    .min_by_key(|&(_, dist)| dist)
    .map(|(dir, _)| dir)
}
