//! Randomized placement searches: snake spawn and food cells
//!
//! Both searches take the RNG as a parameter so callers (and tests) control
//! the sequence exactly. The engine feeds them a seeded `Pcg32`.

use std::collections::{HashSet, VecDeque};

use rand::Rng;

use super::grid::Position;
use crate::consts::{SPAWN_ATTEMPTS, SPAWN_PADDING, SPAWN_SAFE_DISTANCE};

/// Find a start cell clear of walls
///
/// Draws up to [`SPAWN_ATTEMPTS`] candidates from the padded interior,
/// rejecting any within Manhattan distance [`SPAWN_SAFE_DISTANCE`] of a wall.
/// After exhausting the attempts, falls back to the exact grid center; on a
/// degenerate layout that cell can itself be a wall.
pub fn find_safe_start<R: Rng>(
    walls: &HashSet<Position>,
    grid_size: i32,
    rng: &mut R,
) -> Position {
    for _ in 0..SPAWN_ATTEMPTS {
        let candidate = Position::new(
            rng.random_range(SPAWN_PADDING..grid_size - SPAWN_PADDING),
            rng.random_range(SPAWN_PADDING..grid_size - SPAWN_PADDING),
        );

        let safe = walls
            .iter()
            .all(|wall| wall.manhattan(candidate) >= SPAWN_SAFE_DISTANCE);
        if safe {
            return candidate;
        }
    }

    let center = Position::new(grid_size / 2, grid_size / 2);
    log::debug!("no safe spawn after {SPAWN_ATTEMPTS} attempts, using center {center:?}");
    center
}

/// Place food on a cell free of snake and walls
///
/// Rejection-samples the full grid for up to `grid_size²` draws, then picks
/// uniformly from the enumerated free cells. Returns `None` only when the
/// board is saturated.
pub fn place_food<R: Rng>(
    snake: &VecDeque<Position>,
    walls: &HashSet<Position>,
    grid_size: i32,
    rng: &mut R,
) -> Option<Position> {
    let occupied = |pos: &Position| snake.contains(pos) || walls.contains(pos);

    let max_attempts = (grid_size * grid_size) as u32;
    for _ in 0..max_attempts {
        let candidate = Position::new(
            rng.random_range(0..grid_size),
            rng.random_range(0..grid_size),
        );
        if !occupied(&candidate) {
            return Some(candidate);
        }
    }

    // Sampling ran dry; enumerate what is actually free
    let free: Vec<Position> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position::new(x, y)))
        .filter(|pos| !occupied(pos))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}
