use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::labyrinth::direction::Direction;
use crate::labyrinth::error::Result;
use crate::labyrinth::grid::{Coord, Grid};
use crate::labyrinth::render::Animator;

/// Creuse un labyrinthe parfait par backtracking récursif randomisé.
///
/// Le générateur possède son propre générateur aléatoire : avec une
/// graine, la suite des choix (et donc le labyrinthe) est entièrement
/// déterminée.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Génère le labyrinthe complet : creusement depuis l'entrée, remise à
    /// zéro des visites, puis ouverture de l'entrée et de la sortie.
    pub fn generate(&mut self, grid: &mut Grid, animator: &mut Animator) -> Result<()> {
        let entrance = grid.entrance();
        let carved = self.carve_from(grid, entrance, animator)?;
        debug!("carved {} passages in a {}x{} grid", carved, grid.num_cols(), grid.num_rows());

        grid.reset_visited();
        grid.break_entrance_and_exit();

        let exit = grid.exit();
        animator.draw_cell(&grid[entrance]);
        animator.draw_cell(&grid[exit]);
        Ok(())
    }

    /// Parcours en profondeur depuis `start`.
    ///
    /// La pile explicite remplace la récursion : le sommet est la cellule
    /// courante, on y revient après chaque branche pour tirer une autre
    /// voisine non visitée. Une cellule est dessinée quand elle est
    /// épuisée. Renvoie le nombre de murs creusés.
    pub fn carve_from(&mut self, grid: &mut Grid, start: Coord, animator: &mut Animator) -> Result<usize> {
        grid.get_mut(start.0, start.1)?.visited = true;
        let mut stack = vec![start];
        let mut carved = 0;

        while let Some(&current) = stack.last() {
            let candidates: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&dir| matches!(grid.neighbor(current, dir), Some(next) if !grid[next].visited))
                .collect();

            let Some(&dir) = candidates.choose(&mut self.rng) else {
                // Plus de voisine libre : retour arrière
                animator.draw_cell(&grid[current]);
                stack.pop();
                continue;
            };

            let next = grid.carve(current, dir)?;
            trace!("carve {:?} -> {:?} ({:?})", current, next, dir);
            grid[next].visited = true;
            stack.push(next);
            carved += 1;
        }

        Ok(carved)
    }
}
