use log::{debug, trace, warn};

use crate::labyrinth::direction::Direction;
use crate::labyrinth::grid::{Coord, Grid};
use crate::labyrinth::render::Animator;

/// Chemin trouvé de l'entrée à la sortie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Cellules successives, entrée et sortie comprises.
    pub path: Vec<Coord>,
    /// Nombre de cellules visitées pendant la recherche.
    pub explored: usize,
    /// Nombre de retours arrière signalés.
    pub backtracks: usize,
}

/// Une cellule en cours d'exploration et la prochaine direction à essayer.
struct Frame {
    coord: Coord,
    next_dir: usize,
}

/// Recherche en profondeur de l'entrée vers la sortie.
///
/// Les directions sont essayées dans l'ordre gauche, haut, droite, bas ;
/// le premier chemin trouvé est retenu, pas forcément le plus court.
/// Chaque avancée est signalée par un tracé, chaque impasse par un tracé
/// de retour.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Cherche un chemin de l'entrée à la sortie. `None` si la sortie est
    /// inatteignable (ce qui n'arrive pas sur un labyrinthe généré).
    ///
    /// Les marques de visite de la grille doivent être remises à zéro
    /// avant l'appel ; elles restent posées après.
    pub fn solve(&self, grid: &mut Grid, animator: &mut Animator) -> Option<Solution> {
        let start = grid.entrance();
        let exit = grid.exit();
        debug!("solving from {:?} to {:?}", start, exit);

        grid[start].visited = true;
        let mut explored = 1;
        let mut backtracks = 0;

        if start == exit {
            return Some(Solution {
                path: vec![start],
                explored,
                backtracks,
            });
        }

        let mut stack = vec![Frame { coord: start, next_dir: 0 }];

        while let Some(frame) = stack.last_mut() {
            let current = frame.coord;

            let Some(&dir) = Direction::ALL.get(frame.next_dir) else {
                // Toutes les directions ont échoué : on remonte au parent
                stack.pop();
                if let Some(parent) = stack.last() {
                    trace!("backtrack {:?} -> {:?}", parent.coord, current);
                    animator.draw_move(&grid[parent.coord], &grid[current], true);
                    backtracks += 1;
                }
                continue;
            };
            frame.next_dir += 1;

            let Some(next) = grid.neighbor(current, dir) else {
                continue;
            };
            if grid[next].visited || !grid.is_passable(current, dir) {
                continue;
            }

            trace!("move {:?} -> {:?}", current, next);
            animator.draw_move(&grid[current], &grid[next], false);
            grid[next].visited = true;
            explored += 1;
            stack.push(Frame { coord: next, next_dir: 0 });

            if next == exit {
                let path: Vec<Coord> = stack.iter().map(|f| f.coord).collect();
                debug!(
                    "exit reached: path of {} cells, {} explored, {} backtracks",
                    path.len(),
                    explored,
                    backtracks
                );
                return Some(Solution {
                    path,
                    explored,
                    backtracks,
                });
            }
        }

        warn!("no path from {:?} to {:?} ({} cells explored)", start, exit, explored);
        None
    }
}
