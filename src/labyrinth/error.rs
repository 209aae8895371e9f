use thiserror::Error;

/// Erreurs de construction et d'adressage du labyrinthe.
///
/// Un labyrinthe sans solution n'est pas une erreur : le solveur renvoie
/// simplement `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("invalid grid dimensions {num_cols}x{num_rows}: both must be at least 1")]
    InvalidDimensions { num_cols: usize, num_rows: usize },
    #[error("cell ({col}, {row}) is out of range for a {num_cols}x{num_rows} grid")]
    OutOfRange {
        col: usize,
        row: usize,
        num_cols: usize,
        num_rows: usize,
    },
    #[error("maze already generated: carving twice would add cycles")]
    AlreadyGenerated,
    #[error("invalid cell size {width}x{height}: must be finite and positive")]
    InvalidCellSize { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, MazeError>;
