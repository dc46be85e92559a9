//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected by the caller
//! - No rendering or platform dependencies

pub mod grid;
pub mod layout;
pub mod spawn;
pub mod state;
pub mod tick;

pub use grid::{Direction, Position};
pub use layout::generate_walls;
pub use spawn::{find_safe_start, place_food};
pub use state::{GamePhase, GameState};
pub use tick::tick;
