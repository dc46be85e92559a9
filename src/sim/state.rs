//! Game state and level lifecycle
//!
//! All simulation state lives here, owned exclusively by the engine. Snake,
//! food, walls and score are rebuilt on every level entry; phase transitions
//! happen only in `tick` or through the explicit lifecycle calls.

use std::collections::{HashSet, VecDeque};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Position;
use super::layout::generate_walls;
use super::spawn::{find_safe_start, place_food};
use crate::required_score;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// On the menu, nothing ticking yet
    NotStarted,
    /// Active gameplay; the only phase that ticks
    Running,
    /// Target score reached, awaiting advance or reset
    LevelComplete,
    /// Run ended, awaiting reset
    GameOver,
}

/// Complete game state (deterministic given seed and inputs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Cells per board side
    pub grid_size: i32,
    /// Current level (1-based)
    pub level: u32,
    /// Food eaten this level
    pub score: u32,
    /// Snake segments, head at the front; never empty
    pub snake: VecDeque<Position>,
    /// The single food cell
    pub food: Position,
    /// Wall cells for the current level
    pub walls: HashSet<Position>,
    /// Current phase
    pub phase: GamePhase,
}

impl GameState {
    /// Create a fresh, not-yet-started state
    pub fn new(seed: u64, grid_size: i32) -> Self {
        let mut state = Self {
            seed,
            grid_size,
            level: 1,
            score: 0,
            snake: VecDeque::new(),
            food: Position::new(0, 0),
            walls: HashSet::new(),
            phase: GamePhase::NotStarted,
        };
        state.apply_menu_defaults();
        state
    }

    /// Snake head cell
    #[inline]
    pub fn head(&self) -> Position {
        // Invariant: snake is never empty
        self.snake[0]
    }

    /// Food needed to clear the current level
    #[inline]
    pub fn required_score(&self) -> u32 {
        required_score(self.level)
    }

    /// Enter a level: regenerate walls, spawn and food, reset the score
    ///
    /// The single explicit hook for level and grid changes; `start`,
    /// `advance_level` and display resizing all route through here.
    pub fn enter_level<R: Rng>(&mut self, level: u32, rng: &mut R) {
        self.level = level;
        self.score = 0;
        self.walls = generate_walls(level, self.grid_size);

        let start = find_safe_start(&self.walls, self.grid_size, rng);
        self.snake.clear();
        self.snake.push_front(start);

        match place_food(&self.snake, &self.walls, self.grid_size, rng) {
            Some(food) => self.food = food,
            None => {
                log::warn!("no free cell for food on level {level} entry");
                self.food = start;
            }
        }

        self.phase = GamePhase::Running;
        log::info!(
            "level {level} started: {} walls, spawn {start:?}, food {:?}",
            self.walls.len(),
            self.food
        );
    }

    /// Return to the menu state: level 1, empty board, default placements
    pub fn reset(&mut self) {
        self.level = 1;
        self.score = 0;
        self.walls.clear();
        self.apply_menu_defaults();
        self.phase = GamePhase::NotStarted;
    }

    /// Placeholder snake/food shown before a run starts
    fn apply_menu_defaults(&mut self) {
        let center = self.grid_size / 2;
        self.snake.clear();
        self.snake.push_front(Position::new(center, center));
        self.food = Position::new(3 * self.grid_size / 4, 3 * self.grid_size / 4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(1, 20);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.head(), Position::new(10, 10));
        assert_eq!(state.food, Position::new(15, 15));
        assert!(state.walls.is_empty());
    }

    #[test]
    fn test_required_score_formula() {
        let mut state = GameState::new(1, 20);
        assert_eq!(state.required_score(), 5);
        state.level = 5;
        assert_eq!(state.required_score(), 13);
        state.level = 12;
        assert_eq!(state.required_score(), 27);
    }

    #[test]
    fn test_enter_level_rebuilds_board() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = GameState::new(9, 20);
        state.score = 4;

        state.enter_level(3, &mut rng);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.level, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.walls.len(), 76);
        assert_eq!(state.snake.len(), 1);
        assert!(!state.walls.contains(&state.head()));
        assert!(!state.walls.contains(&state.food));
        assert_ne!(state.food, state.head());
    }

    #[test]
    fn test_reset_returns_to_menu() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = GameState::new(9, 20);
        state.enter_level(6, &mut rng);
        state.score = 3;

        state.reset();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!(state.walls.is_empty());
        assert_eq!(state.head(), Position::new(10, 10));
    }
}
