//! External interface for an embedding UI layer
//!
//! The engine owns the simulation state, the input director and the seeded
//! RNG. A UI drives it with the lifecycle calls and direction events, ticks
//! it at [`Engine::TICK_INTERVAL`] while running, and pulls an immutable
//! [`Snapshot`] after every tick or transition. The timer belongs to the
//! caller: arm it on entering `Running`, tear it down on leaving.

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::{ConfigError, GridConfig};
use crate::consts::TICK_MS;
use crate::input::InputDirector;
use crate::sim::{self, Direction, GamePhase, GameState, Position};

/// The game engine: simulation state plus input plumbing
#[derive(Debug)]
pub struct Engine {
    state: GameState,
    director: InputDirector,
    rng: Pcg32,
    config: GridConfig,
}

/// Read-only view of the game for rendering
///
/// Walls are sorted so consumers see a stable order.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub food: Position,
    pub walls: Vec<Position>,
    pub score: u32,
    pub level: u32,
    pub required_score: u32,
    pub phase: GamePhase,
    pub grid: GridConfig,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Engine {
    /// Fixed tick period the embedding timer should use
    pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_MS);

    pub fn new(config: GridConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(seed, config.grid_size),
            director: InputDirector::default(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// Begin a run at `level`, rebuilding the whole board
    pub fn start(&mut self, level: u32) -> Result<(), ConfigError> {
        if level == 0 {
            return Err(ConfigError::LevelZero);
        }
        self.director.reset(Direction::Right);
        self.state.enter_level(level, &mut self.rng);
        Ok(())
    }

    /// Move on to the next level; only valid from `LevelComplete`
    pub fn advance_level(&mut self) {
        if self.state.phase != GamePhase::LevelComplete {
            log::warn!("advance_level ignored in phase {:?}", self.state.phase);
            return;
        }
        let next = self.state.level + 1;
        self.director.reset(Direction::Right);
        self.state.enter_level(next, &mut self.rng);
    }

    /// Back to the menu state
    pub fn reset(&mut self) {
        self.director.reset(Direction::Right);
        self.state.reset();
    }

    /// Directional key event; ignored outside `Running`
    pub fn on_key(&mut self, direction: Direction) {
        if self.state.phase == GamePhase::Running {
            self.director.press(direction);
        }
    }

    /// Swipe gesture event (display-pixel positions); ignored outside `Running`
    pub fn on_swipe(&mut self, start: Vec2, end: Vec2) {
        if self.state.phase == GamePhase::Running {
            let _ = self.director.swipe(start, end);
        }
    }

    /// Apply a new display configuration
    ///
    /// Mid-run the current level is re-entered so walls, spawn and food are
    /// regenerated for the new grid; otherwise only the stored config and
    /// menu placements change.
    pub fn resize(&mut self, config: GridConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.state.grid_size = config.grid_size;
        match self.state.phase {
            GamePhase::Running => {
                let level = self.state.level;
                log::info!("grid resized to {}, regenerating level {level}", config.grid_size);
                self.state.enter_level(level, &mut self.rng);
            }
            _ => self.state.reset(),
        }
    }

    /// Advance one tick if running
    pub fn tick(&mut self) {
        let direction = self.director.pending();
        sim::tick(&mut self.state, direction, &mut self.rng);
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    /// Immutable view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        let mut walls: Vec<Position> = self.state.walls.iter().copied().collect();
        walls.sort();
        Snapshot {
            snake: self.state.snake.iter().copied().collect(),
            food: self.state.food,
            walls,
            score: self.state.score,
            level: self.state.level,
            required_score: self.state.required_score(),
            phase: self.state.phase,
            grid: self.config,
        }
    }
}
