//! Fixed timestep simulation tick
//!
//! Advances the snake one cell and resolves collisions, growth and level
//! completion. Check order is load-bearing: walls are tested on the raw
//! head before wrap is applied, so on walled levels the perimeter stops the
//! snake before any out-of-bounds coordinate can appear. Self-collision is
//! tested against the pre-move body, tail cell included — moving onto the
//! cell the tail is about to vacate still ends the run.

use rand::Rng;

use super::grid::Direction;
use super::layout::level_wraps;
use super::spawn::place_food;
use super::state::{GamePhase, GameState};

/// Advance the game by one tick in `direction`
///
/// No-op unless the state is `Running`.
pub fn tick<R: Rng>(state: &mut GameState, direction: Direction, rng: &mut R) {
    if state.phase != GamePhase::Running {
        return;
    }

    let mut new_head = state.head().step(direction);

    if state.walls.contains(&new_head) {
        log::info!("hit wall at {new_head:?}, level {} over", state.level);
        state.phase = GamePhase::GameOver;
        return;
    }

    if level_wraps(state.level) {
        new_head = new_head.wrapped(state.grid_size);
    }

    if state.snake.contains(&new_head) {
        log::info!("ran into itself at {new_head:?}, level {} over", state.level);
        state.phase = GamePhase::GameOver;
        return;
    }

    state.snake.push_front(new_head);

    if new_head == state.food {
        state.score += 1;

        if state.score >= state.required_score() {
            log::info!(
                "level {} complete with score {}, snake length {}",
                state.level,
                state.score,
                state.snake.len()
            );
            state.phase = GamePhase::LevelComplete;
            return;
        }

        match place_food(&state.snake, &state.walls, state.grid_size, rng) {
            Some(food) => state.food = food,
            None => {
                // Board saturated: nothing left to eat
                log::info!("board full on level {}, treating as complete", state.level);
                state.phase = GamePhase::LevelComplete;
            }
        }
    } else {
        state.snake.pop_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Position;
    use crate::sim::layout::generate_walls;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::VecDeque;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(1234)
    }

    /// Running state with explicit board contents, bypassing the spawn search
    fn running_state(
        level: u32,
        grid_size: i32,
        snake: &[Position],
        food: Position,
    ) -> GameState {
        let mut state = GameState::new(0, grid_size);
        state.level = level;
        state.walls = generate_walls(level, grid_size);
        state.snake = VecDeque::from_iter(snake.iter().copied());
        state.food = food;
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_straight_run_reaches_column_15() {
        // Five ticks moving right from (10,10); food at (15,15) stays uneaten
        let mut state = running_state(1, 20, &[Position::new(10, 10)], Position::new(15, 15));
        for _ in 0..5 {
            tick(&mut state, Direction::Right, &mut rng());
        }
        assert_eq!(state.head(), Position::new(15, 10));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut state = running_state(1, 20, &[Position::new(10, 10)], Position::new(11, 10));
        tick(&mut state, Direction::Right, &mut rng());
        assert_eq!(state.head(), Position::new(11, 10));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 1);
        assert_ne!(state.food, Position::new(11, 10));
    }

    #[test]
    fn test_non_food_move_keeps_length() {
        let snake = [
            Position::new(10, 10),
            Position::new(9, 10),
            Position::new(8, 10),
        ];
        let mut state = running_state(1, 20, &snake, Position::new(15, 15));
        tick(&mut state, Direction::Right, &mut rng());
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.head(), Position::new(11, 10));
        assert!(!state.snake.contains(&Position::new(8, 10)));
    }

    #[test]
    fn test_wrap_on_open_levels() {
        let mut state = running_state(1, 20, &[Position::new(19, 10)], Position::new(5, 5));
        tick(&mut state, Direction::Right, &mut rng());
        assert_eq!(state.head(), Position::new(0, 10));

        let mut state = running_state(2, 20, &[Position::new(10, 0)], Position::new(5, 5));
        tick(&mut state, Direction::Up, &mut rng());
        assert_eq!(state.head(), Position::new(10, 19));
    }

    #[test]
    fn test_bracket_cell_fatal_on_wrapping_level() {
        // Level 2 wraps at open edges, but its corner bracket cells are
        // still walls and still end the run
        let mut state = running_state(2, 20, &[Position::new(17, 1)], Position::new(5, 5));
        tick(&mut state, Direction::Up, &mut rng());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.head(), Position::new(17, 1));
    }

    #[test]
    fn test_perimeter_is_fatal() {
        let mut state = running_state(3, 20, &[Position::new(1, 10)], Position::new(5, 5));
        tick(&mut state, Direction::Left, &mut rng());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_self_collision_is_fatal() {
        let snake = [
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(7, 5),
            Position::new(7, 6),
        ];
        let mut state = running_state(1, 20, &snake, Position::new(15, 15));
        tick(&mut state, Direction::Right, &mut rng());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_moving_onto_vacating_tail_is_fatal() {
        // Head chasing its own tail around a 2x2 loop: the tail cell would
        // be vacated this tick, but the rule makes no exception for it
        let snake = [
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
        ];
        let mut state = running_state(1, 20, &snake, Position::new(15, 15));
        tick(&mut state, Direction::Right, &mut rng());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_level_completes_on_the_eating_tick() {
        let mut state = running_state(1, 20, &[Position::new(10, 10)], Position::new(11, 10));
        state.score = 4; // required for level 1 is 5
        let food = state.food;
        tick(&mut state, Direction::Right, &mut rng());
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.score, 5);
        // Snake keeps the grown length; no replacement food is placed
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.food, food);
    }

    #[test]
    fn test_saturated_board_completes_level() {
        let snake = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ];
        let mut state = running_state(1, 2, &snake, Position::new(1, 0));
        tick(&mut state, Direction::Right, &mut rng());
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_only_running_ticks() {
        for phase in [GamePhase::NotStarted, GamePhase::LevelComplete, GamePhase::GameOver] {
            let mut state = running_state(1, 20, &[Position::new(10, 10)], Position::new(15, 15));
            state.phase = phase;
            tick(&mut state, Direction::Right, &mut rng());
            assert_eq!(state.head(), Position::new(10, 10));
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_open_level_head_stays_in_bounds() {
        // Walk the full wrap cycle on both axes
        let mut state = running_state(1, 20, &[Position::new(0, 0)], Position::new(9, 9));
        for _ in 0..45 {
            tick(&mut state, Direction::Left, &mut rng());
            assert!(state.head().in_bounds(20));
        }
        for _ in 0..45 {
            tick(&mut state, Direction::Up, &mut rng());
            assert!(state.head().in_bounds(20));
        }
    }
}
