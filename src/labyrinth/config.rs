use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::labyrinth::error::{MazeError, Result};

/// Largeur par défaut de la fenêtre, en pixels.
pub const WINDOW_WIDTH: f64 = 800.0;
/// Hauteur par défaut de la fenêtre, en pixels.
pub const WINDOW_HEIGHT: f64 = 600.0;
/// Marge autour du labyrinthe.
pub const MARGIN: f64 = 50.0;
pub const NUM_ROWS: usize = 12;
pub const NUM_COLS: usize = 16;
/// Pause entre deux images de l'animation.
pub const FRAME_DELAY: Duration = Duration::from_millis(50);

/// Paramètres d'un labyrinthe.
///
/// Le port de rendu n'en fait pas partie : il est passé à côté, à
/// `Maze::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub num_rows: usize,
    pub num_cols: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Graine du générateur ; `None` = tirage depuis l'OS.
    pub seed: Option<u64>,
    /// Ignorée quand aucun port de rendu n'est attaché.
    pub frame_delay: Duration,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, MARGIN, NUM_COLS, NUM_ROWS)
    }
}

impl MazeConfig {
    /// Configuration qui remplit une fenêtre `width` x `height` en laissant
    /// `margin` pixels de chaque côté.
    pub fn for_window(width: f64, height: f64, margin: f64, num_cols: usize, num_rows: usize) -> Self {
        let cell_width = (width - 2.0 * margin) / num_cols.max(1) as f64;
        let cell_height = (height - 2.0 * margin) / num_rows.max(1) as f64;
        Self {
            num_rows,
            num_cols,
            origin_x: margin,
            origin_y: margin,
            cell_width,
            cell_height,
            seed: None,
            frame_delay: FRAME_DELAY,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    /// Vérifie les dimensions et la taille des cellules.
    pub fn validate(&self) -> Result<()> {
        if self.num_cols == 0 || self.num_rows == 0 {
            return Err(MazeError::InvalidDimensions {
                num_cols: self.num_cols,
                num_rows: self.num_rows,
            });
        }
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.cell_width) || !valid(self.cell_height) {
            return Err(MazeError::InvalidCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fills_window() {
        let config = MazeConfig::default();
        assert_eq!(config.num_cols, 16);
        assert_eq!(config.num_rows, 12);
        assert_eq!(config.origin_x, 50.0);
        assert_eq!(config.cell_width, 700.0 / 16.0);
        assert_eq!(config.cell_height, 500.0 / 12.0);
        assert_eq!(config.seed, None);
        assert_eq!(config.frame_delay, Duration::from_millis(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let config = MazeConfig::for_window(800.0, 600.0, 50.0, 0, 12);
        assert!(matches!(config.validate(), Err(MazeError::InvalidDimensions { .. })));

        // marge plus grande que la fenêtre
        let config = MazeConfig::for_window(80.0, 60.0, 50.0, 4, 4);
        assert!(matches!(config.validate(), Err(MazeError::InvalidCellSize { .. })));
    }

    #[test]
    fn test_config_json() {
        let config = MazeConfig::default().with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
