//! Procedural wall layouts, one per level
//!
//! Layout construction is fully deterministic: the same level and grid size
//! always produce the same wall set. Randomness is confined to the spawn and
//! food searches in `spawn`.
//!
//! Levels 1-2 play on an open (wrapping) board; every level from 3 up starts
//! from a full perimeter ring and adds interior obstacles. From level 12 on
//! the layout stops escalating and repeats the final arrangement.

use std::collections::HashSet;

use super::grid::Position;

/// Fractional grid coordinate, floored (matches display-fraction anchoring)
#[inline]
fn frac(grid_size: i32, f: f64) -> i32 {
    (grid_size as f64 * f).floor() as i32
}

/// Border ring: every cell with x or y on the grid edge
fn add_perimeter(walls: &mut HashSet<Position>, grid_size: i32) {
    let max = grid_size - 1;
    for i in 0..grid_size {
        walls.insert(Position::new(0, i));
        walls.insert(Position::new(max, i));
        walls.insert(Position::new(i, 0));
        walls.insert(Position::new(i, max));
    }
}

/// Horizontal run of cells at row `y`, columns `x_start..x_end`
fn add_hbar(walls: &mut HashSet<Position>, y: i32, x_start: i32, x_end: i32) {
    for x in x_start..x_end {
        walls.insert(Position::new(x, y));
    }
}

/// Vertical run of cells at column `x`, rows `y_start..y_end`
fn add_vbar(walls: &mut HashSet<Position>, x: i32, y_start: i32, y_end: i32) {
    for y in y_start..y_end {
        walls.insert(Position::new(x, y));
    }
}

/// Single cells at the four quarter/three-quarter intersections
fn add_quarter_cells(walls: &mut HashSet<Position>, grid_size: i32) {
    let quarter = grid_size / 4;
    let three_quarter = 3 * grid_size / 4;
    walls.insert(Position::new(quarter, quarter));
    walls.insert(Position::new(three_quarter, quarter));
    walls.insert(Position::new(quarter, three_quarter));
    walls.insert(Position::new(three_quarter, three_quarter));
}

/// Generate the wall set for a level
///
/// Pure and deterministic. Duplicate cells from overlapping shapes collapse
/// via set semantics.
pub fn generate_walls(level: u32, grid_size: i32) -> HashSet<Position> {
    let mut walls = HashSet::new();
    let max = grid_size - 1;

    match level {
        0 | 1 => {}

        2 => {
            // Partial brackets on all four corners, open edges elsewhere
            let corner_size = frac(grid_size, 0.15).max(2);
            for i in 0..corner_size {
                walls.insert(Position::new(i, 0));
                walls.insert(Position::new(max - i, 0));
                walls.insert(Position::new(0, i));
                walls.insert(Position::new(max, i));
                walls.insert(Position::new(i, max));
                walls.insert(Position::new(max - i, max));
                walls.insert(Position::new(0, max - i));
                walls.insert(Position::new(max, max - i));
            }
        }

        3 => {
            add_perimeter(&mut walls, grid_size);
        }

        4 => {
            // Solid square anchored at the center, extending up-left
            add_perimeter(&mut walls, grid_size);
            let center = grid_size / 2;
            let obstacle_size = frac(grid_size, 0.1).max(1);
            for i in 0..obstacle_size {
                for j in 0..obstacle_size {
                    walls.insert(Position::new(center - i, center - j));
                }
            }
        }

        5 => {
            add_perimeter(&mut walls, grid_size);
            add_quarter_cells(&mut walls, grid_size);
        }

        6 => {
            // Two rows of paired horizontal bars with a central gap
            add_perimeter(&mut walls, grid_size);
            let bar_y1 = frac(grid_size, 0.3);
            let bar_y2 = frac(grid_size, 0.65);
            for y in [bar_y1, bar_y2] {
                add_hbar(&mut walls, y, frac(grid_size, 0.15), frac(grid_size, 0.35));
                add_hbar(&mut walls, y, frac(grid_size, 0.65), frac(grid_size, 0.85));
            }
        }

        7 => {
            // Level 6 mirrored into vertical bars
            add_perimeter(&mut walls, grid_size);
            let bar_x1 = frac(grid_size, 0.3);
            let bar_x2 = frac(grid_size, 0.65);
            for x in [bar_x1, bar_x2] {
                add_vbar(&mut walls, x, frac(grid_size, 0.15), frac(grid_size, 0.35));
                add_vbar(&mut walls, x, frac(grid_size, 0.65), frac(grid_size, 0.85));
            }
        }

        8 => {
            // Centered plus with a hollow middle, plus the quarter cells
            add_perimeter(&mut walls, grid_size);
            let center = grid_size / 2;
            let arm_length = frac(grid_size, 0.15);
            for i in (center - arm_length)..(center + arm_length) {
                if i >= 0 && i < grid_size && (i - center).abs() > 2 {
                    walls.insert(Position::new(i, center));
                    walls.insert(Position::new(center, i));
                }
            }
            add_quarter_cells(&mut walls, grid_size);
        }

        9 => {
            add_perimeter(&mut walls, grid_size);
            let bar_y1 = frac(grid_size, 0.35);
            let bar_y2 = frac(grid_size, 0.6);
            for y in [bar_y1, bar_y2] {
                add_hbar(&mut walls, y, frac(grid_size, 0.2), frac(grid_size, 0.4));
                add_hbar(&mut walls, y, frac(grid_size, 0.6), frac(grid_size, 0.8));
            }
            // Two-cell nubs on the vertical centerline
            let center = grid_size / 2;
            let top_y = frac(grid_size, 0.2);
            let bottom_y = frac(grid_size, 0.75);
            for y in [top_y, bottom_y] {
                walls.insert(Position::new(center, y));
                walls.insert(Position::new(center - 1, y));
            }
        }

        10 => {
            add_perimeter(&mut walls, grid_size);
            let bar_y1 = frac(grid_size, 0.3);
            let bar_y2 = frac(grid_size, 0.65);
            for y in [bar_y1, bar_y2] {
                add_hbar(&mut walls, y, frac(grid_size, 0.2), frac(grid_size, 0.4));
                add_hbar(&mut walls, y, frac(grid_size, 0.6), frac(grid_size, 0.8));
            }
            // Two lone cells splitting the middle corridor
            let center = grid_size / 2;
            walls.insert(Position::new(center, frac(grid_size, 0.4)));
            walls.insert(Position::new(center, frac(grid_size, 0.55)));
        }

        11 => {
            // Four inset L brackets and a bar through the vertical center
            add_perimeter(&mut walls, grid_size);
            let corner_dist = frac(grid_size, 0.2);
            let corner_len = frac(grid_size, 0.15);

            // Top-left
            for i in corner_dist..(corner_dist + corner_len) {
                walls.insert(Position::new(i, corner_dist));
                walls.insert(Position::new(corner_dist, i));
            }
            // Top-right
            for i in (max - corner_dist - corner_len)..(max - corner_dist) {
                walls.insert(Position::new(i, corner_dist));
                walls.insert(Position::new(max - corner_dist, i));
            }
            // Bottom-left
            for i in corner_dist..(corner_dist + corner_len) {
                walls.insert(Position::new(corner_dist, max - i));
                walls.insert(Position::new(i, max - corner_dist));
            }
            // Bottom-right
            for i in (max - corner_dist - corner_len)..(max - corner_dist) {
                walls.insert(Position::new(
                    max - corner_dist,
                    max - (i - (max - corner_dist - corner_len)) - corner_dist,
                ));
                walls.insert(Position::new(i, max - corner_dist));
            }

            let center = grid_size / 2;
            add_hbar(&mut walls, center, frac(grid_size, 0.3), frac(grid_size, 0.7));
        }

        // Final layout, reused for every level from 12 up
        _ => {
            add_perimeter(&mut walls, grid_size);

            let top_y = frac(grid_size, 0.2);
            add_hbar(&mut walls, top_y, frac(grid_size, 0.2), frac(grid_size, 0.8));

            let mid_y1 = frac(grid_size, 0.4);
            let mid_y2 = frac(grid_size, 0.6);
            for y in [mid_y1, mid_y2] {
                add_hbar(&mut walls, y, frac(grid_size, 0.2), frac(grid_size, 0.45));
                add_hbar(&mut walls, y, frac(grid_size, 0.55), frac(grid_size, 0.8));
            }

            let bottom_y = frac(grid_size, 0.75);
            add_hbar(&mut walls, bottom_y, frac(grid_size, 0.2), frac(grid_size, 0.8));
        }
    }

    walls
}

/// Whether a level wraps at the board edges instead of walling them off
#[inline]
pub fn level_wraps(level: u32) -> bool {
    level <= 2
}
