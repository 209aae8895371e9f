/*!
 * # Visualisation ASCII du labyrinthe
 *
 * Convertit une `Grid` en texte : `+` aux intersections, `---` et `|`
 * pour les murs présents, des espaces pour les passages. Les cellules
 * d'un chemin éventuel sont marquées d'un `*`.
 */

use std::collections::HashSet;

use crate::labyrinth::grid::{Coord, Grid};

/// Génère une représentation ASCII de la grille.
///
/// Chaque cellule occupe 3 caractères de large ; la grille fait donc
/// `num_cols * 4 + 1` colonnes et `num_rows * 2 + 1` lignes de texte.
/// Le mur du haut d'une cellule est celui qu'elle porte ; la bordure
/// droite et la bordure basse sont lues sur la dernière colonne / ligne.
///
/// # Arguments
///
/// * `grid` - La grille à dessiner.
/// * `path` - Cellules à marquer (peut être vide).
pub fn render_ascii(grid: &Grid, path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut out = String::new();

    for row in 0..grid.num_rows() {
        // Ligne des murs du haut
        for col in 0..grid.num_cols() {
            out.push('+');
            out.push_str(if grid[(col, row)].walls.top { "---" } else { "   " });
        }
        out.push_str("+\n");

        // Ligne des cellules
        for col in 0..grid.num_cols() {
            let cell = &grid[(col, row)];
            out.push(if cell.walls.left { '|' } else { ' ' });
            out.push_str(if on_path.contains(&(col, row)) { " * " } else { "   " });
        }
        let last = &grid[(grid.num_cols() - 1, row)];
        out.push(if last.walls.right { '|' } else { ' ' });
        out.push('\n');
    }

    // Bordure basse
    let bottom = grid.num_rows() - 1;
    for col in 0..grid.num_cols() {
        out.push('+');
        out.push_str(if grid[(col, bottom)].walls.bottom { "---" } else { "   " });
    }
    out.push_str("+\n");
    out
}
