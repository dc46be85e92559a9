//! Grid configuration derived from the display viewport
//!
//! `cell_size` is display-only; `grid_size` bounds all simulation
//! arithmetic, so it is validated at construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DESKTOP_GRID_SIZE, MAX_CELL_SIZE, MOBILE_BREAKPOINT, MOBILE_GRID_SIZE, SPAWN_PADDING,
};

/// Smallest board with a non-empty padded spawn interior
pub const MIN_GRID_SIZE: i32 = 2 * SPAWN_PADDING + 1;

/// Errors raised when validating configuration and lifecycle inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is below the minimum of {MIN_GRID_SIZE}")]
    GridTooSmall(i32),
    #[error("cell size must be positive, got {0}")]
    CellNotPositive(i32),
    #[error("levels are numbered from 1")]
    LevelZero,
}

/// Board dimensions: cells per side and display pixels per cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub grid_size: i32,
    pub cell_size: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: DESKTOP_GRID_SIZE,
            cell_size: MAX_CELL_SIZE,
        }
    }
}

impl GridConfig {
    pub fn new(grid_size: i32, cell_size: i32) -> Result<Self, ConfigError> {
        if grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(grid_size));
        }
        if cell_size <= 0 {
            return Err(ConfigError::CellNotPositive(cell_size));
        }
        Ok(Self {
            grid_size,
            cell_size,
        })
    }

    /// Derive dimensions from a viewport (display pixels)
    ///
    /// Narrow viewports get a 15-cell board; wider ones get 20 cells with
    /// the cell edge capped at [`MAX_CELL_SIZE`]. The margins reserve room
    /// for the surrounding UI chrome.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        let available = (width - 40.0).min(height - 250.0);

        let (grid_size, cell_cap) = if width < MOBILE_BREAKPOINT {
            (MOBILE_GRID_SIZE, i32::MAX)
        } else {
            (DESKTOP_GRID_SIZE, MAX_CELL_SIZE)
        };

        let cell_size = ((available / grid_size as f32).floor() as i32)
            .min(cell_cap)
            .max(1);

        Self {
            grid_size,
            cell_size,
        }
    }

    /// Board edge length in display pixels
    #[inline]
    pub fn board_pixels(&self) -> i32 {
        self.grid_size * self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(GridConfig::new(20, 25).is_ok());
        assert_eq!(GridConfig::new(6, 25), Err(ConfigError::GridTooSmall(6)));
        assert_eq!(GridConfig::new(20, 0), Err(ConfigError::CellNotPositive(0)));
        assert_eq!(
            GridConfig::new(20, -5),
            Err(ConfigError::CellNotPositive(-5))
        );
    }

    #[test]
    fn test_desktop_viewport() {
        let config = GridConfig::from_viewport(1280.0, 900.0);
        assert_eq!(config.grid_size, 20);
        // available = min(1240, 650) = 650; 650/20 = 32 -> capped at 25
        assert_eq!(config.cell_size, 25);
    }

    #[test]
    fn test_mobile_viewport() {
        let config = GridConfig::from_viewport(390.0, 844.0);
        assert_eq!(config.grid_size, 15);
        // available = min(350, 594) = 350; 350/15 = 23 (uncapped on mobile)
        assert_eq!(config.cell_size, 23);
    }

    #[test]
    fn test_tiny_viewport_clamps_cell() {
        let config = GridConfig::from_viewport(100.0, 100.0);
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.cell_size, 1);
    }
}
