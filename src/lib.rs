use log::{debug, info};

pub mod labyrinth;

pub use labyrinth::cell::{Bounds, Cell};
pub use labyrinth::config::MazeConfig;
pub use labyrinth::direction::Direction;
pub use labyrinth::error::{MazeError, Result};
pub use labyrinth::grid::{Coord, Grid};
pub use labyrinth::render::{Animator, RecordingRenderer, RenderEvent, RenderPort, Stroke, TraceRenderer};
pub use labyrinth::solver::Solution;

use labyrinth::ascii_utils::render_ascii;
use labyrinth::generator::Generator;
use labyrinth::solver::Solver;

// -----------------------------------------------------------------------------
// Maze
// -----------------------------------------------------------------------------

/// Un labyrinthe : la grille, son générateur et son port de rendu.
///
/// Le labyrinthe possède la grille et la prête successivement au
/// générateur puis au solveur ; rien d'autre n'y a accès en écriture.
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    generator: Generator,
    animator: Animator,
    generated: bool,
}

impl Maze {
    /// Crée la grille, la dispose à l'écran et dessine chaque cellule
    /// (colonnes puis lignes).
    pub fn new(config: MazeConfig, renderer: Option<Box<dyn RenderPort>>) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.num_cols, config.num_rows)?;
        grid.layout(config.origin_x, config.origin_y, config.cell_width, config.cell_height);

        let mut animator = Animator::new(renderer, config.frame_delay);
        for coord in grid.coords() {
            animator.draw_cell(&grid[coord]);
        }
        debug!(
            "maze {}x{} laid out at ({}, {}), seed {:?}",
            config.num_cols, config.num_rows, config.origin_x, config.origin_y, config.seed
        );

        Ok(Self {
            generator: Generator::new(config.seed),
            config,
            grid,
            animator,
            generated: false,
        })
    }

    /// Labyrinthe sans rendu ni pause (tests, usage programmatique).
    pub fn headless(config: MazeConfig) -> Result<Self> {
        Self::new(config.with_frame_delay(std::time::Duration::ZERO), None)
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Accès en écriture, pour préparer une grille à la main.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Creuse le labyrinthe depuis l'entrée.
    ///
    /// Une seule fois par labyrinthe : un second creusement ajouterait des
    /// cycles, il est refusé avec `MazeError::AlreadyGenerated`.
    pub fn generate(&mut self) -> Result<()> {
        if self.generated {
            return Err(MazeError::AlreadyGenerated);
        }
        self.generator.generate(&mut self.grid, &mut self.animator)?;
        self.generated = true;
        info!("maze generated ({} cells)", self.grid.len());
        Ok(())
    }

    /// Cherche un chemin de l'entrée à la sortie.
    ///
    /// Les marques de visite sont remises à zéro avant la recherche.
    pub fn solve_path(&mut self) -> Option<Solution> {
        self.grid.reset_visited();
        Solver::new().solve(&mut self.grid, &mut self.animator)
    }

    /// Vrai si un chemin de l'entrée à la sortie existe.
    pub fn solve(&mut self) -> bool {
        self.solve_path().is_some()
    }

    /// Dessin texte de la grille, avec un chemin éventuel.
    pub fn to_ascii(&self, path: &[Coord]) -> String {
        render_ascii(&self.grid, path)
    }
}
