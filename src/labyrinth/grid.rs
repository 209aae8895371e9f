use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use crate::labyrinth::cell::{Bounds, Cell};
use crate::labyrinth::direction::Direction;
use crate::labyrinth::error::{MazeError, Result};

/// Position d'une cellule : (colonne, ligne).
pub type Coord = (usize, usize);

/// Grille rectangulaire de cellules.
///
/// Stockée par colonnes : `columns[col][row]`. La grille possède ses
/// cellules ; on y accède par `(col, row)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    num_cols: usize,
    num_rows: usize,
    columns: Vec<Vec<Cell>>,
}

impl Grid {
    /// Crée une grille `num_cols` x `num_rows`, tous murs présents.
    pub fn new(num_cols: usize, num_rows: usize) -> Result<Self> {
        if num_cols == 0 || num_rows == 0 {
            return Err(MazeError::InvalidDimensions { num_cols, num_rows });
        }
        let columns = (0..num_cols)
            .map(|_| (0..num_rows).map(|_| Cell::new()).collect())
            .collect();
        Ok(Self {
            num_cols,
            num_rows,
            columns,
        })
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn len(&self) -> usize {
        self.num_cols * self.num_rows
    }

    /// Toujours faux : `Grid::new` refuse les dimensions nulles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.columns
    }

    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    pub fn exit(&self) -> Coord {
        (self.num_cols - 1, self.num_rows - 1)
    }

    pub fn contains(&self, (col, row): Coord) -> bool {
        col < self.num_cols && row < self.num_rows
    }

    fn check(&self, (col, row): Coord) -> Result<()> {
        if self.contains((col, row)) {
            Ok(())
        } else {
            Err(MazeError::OutOfRange {
                col,
                row,
                num_cols: self.num_cols,
                num_rows: self.num_rows,
            })
        }
    }

    /// Récupère une cellule en lecture seule.
    pub fn get(&self, col: usize, row: usize) -> Result<&Cell> {
        self.check((col, row))?;
        Ok(&self.columns[col][row])
    }

    /// Récupère une cellule en écriture.
    pub fn get_mut(&mut self, col: usize, row: usize) -> Result<&mut Cell> {
        self.check((col, row))?;
        Ok(&mut self.columns[col][row])
    }

    /// Toutes les coordonnées, colonnes à l'extérieur, lignes à l'intérieur
    /// (de gauche à droite, de haut en bas).
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let rows = self.num_rows;
        (0..self.num_cols).flat_map(move |col| (0..rows).map(move |row| (col, row)))
    }

    /// Affecte à chaque cellule son rectangle sur la surface de dessin.
    pub fn layout(&mut self, origin_x: f64, origin_y: f64, cell_width: f64, cell_height: f64) {
        for (col, column) in self.columns.iter_mut().enumerate() {
            for (row, cell) in column.iter_mut().enumerate() {
                let x1 = origin_x + col as f64 * cell_width;
                let y1 = origin_y + row as f64 * cell_height;
                cell.bounds = Some(Bounds {
                    x1,
                    y1,
                    x2: x1 + cell_width,
                    y2: y1 + cell_height,
                });
            }
        }
    }

    /// Voisine dans la direction `dir`, si elle existe.
    pub fn neighbor(&self, (col, row): Coord, dir: Direction) -> Option<Coord> {
        dir.step(col, row, self.num_cols, self.num_rows)
    }

    /// Les voisines dans la grille, dans l'ordre gauche, haut, droite, bas.
    ///
    /// # Panics
    ///
    /// Si `(col, row)` est hors de la grille.
    pub fn neighbors(&self, col: usize, row: usize) -> Vec<Coord> {
        self.assert_in_range((col, row));
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbor((col, row), dir))
            .collect()
    }

    /// Ouvre le mur entre `from` et sa voisine dans la direction `dir`,
    /// des deux côtés. Renvoie la voisine.
    pub fn carve(&mut self, from: Coord, dir: Direction) -> Result<Coord> {
        self.check(from)?;
        let to = self.neighbor(from, dir).ok_or_else(|| {
            let (dc, dr) = dir.offset();
            MazeError::OutOfRange {
                col: from.0.wrapping_add_signed(dc),
                row: from.1.wrapping_add_signed(dr),
                num_cols: self.num_cols,
                num_rows: self.num_rows,
            }
        })?;
        self[from].walls.clear(dir);
        self[to].walls.clear(dir.opposite());
        Ok(to)
    }

    /// Vrai si on peut passer de `from` vers sa voisine `dir` : la voisine
    /// existe et le mur est ouvert des deux côtés.
    pub fn is_passable(&self, from: Coord, dir: Direction) -> bool {
        if !self.contains(from) {
            return false;
        }
        match self.neighbor(from, dir) {
            Some(to) => self[from].walls.is_open(dir) && self[to].walls.is_open(dir.opposite()),
            None => false,
        }
    }

    pub fn reset_visited(&mut self) {
        for cell in self.columns.iter_mut().flatten() {
            cell.visited = false;
        }
    }

    /// Ouvre le mur gauche de l'entrée et le mur bas de la sortie.
    pub fn break_entrance_and_exit(&mut self) {
        let entrance = self.entrance();
        let exit = self.exit();
        self[entrance].walls.left = false;
        self[exit].walls.bottom = false;
    }

    /// Nombre de cellules atteignables depuis `from` par les passages ouverts.
    pub fn reachable_count(&self, from: Coord) -> usize {
        if !self.contains(from) {
            return 0;
        }
        let mut seen = vec![vec![false; self.num_rows]; self.num_cols];
        let mut queue = VecDeque::from([from]);
        seen[from.0][from.1] = true;
        let mut count = 0;

        while let Some(current) = queue.pop_front() {
            count += 1;
            for dir in Direction::ALL {
                if !self.is_passable(current, dir) {
                    continue;
                }
                if let Some((c, r)) = self.neighbor(current, dir) {
                    if !seen[c][r] {
                        seen[c][r] = true;
                        queue.push_back((c, r));
                    }
                }
            }
        }
        count
    }

    /// Nombre d'arêtes internes ouvertes (chaque arête comptée une fois).
    pub fn carved_edge_count(&self) -> usize {
        self.coords()
            .map(|coord| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.is_passable(coord, dir))
                    .count()
            })
            .sum()
    }

    /// Vrai si, pour chaque paire de voisines, les deux côtés de l'arête
    /// partagée sont dans le même état.
    pub fn walls_consistent(&self) -> bool {
        self.coords().all(|coord| {
            [Direction::Right, Direction::Down].into_iter().all(|dir| match self.neighbor(coord, dir) {
                Some(to) => self[coord].walls.has(dir) == self[to].walls.has(dir.opposite()),
                None => true,
            })
        })
    }

    /// Labyrinthe parfait : connexe et sans cycle (arbre couvrant).
    pub fn is_perfect(&self) -> bool {
        self.walls_consistent()
            && self.reachable_count(self.entrance()) == self.len()
            && self.carved_edge_count() == self.len() - 1
    }

    fn assert_in_range(&self, coord: Coord) {
        if let Err(e) = self.check(coord) {
            panic!("{}", e);
        }
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        self.assert_in_range(coord);
        &self.columns[coord.0][coord.1]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        self.assert_in_range(coord);
        &mut self.columns[coord.0][coord.1]
    }
}
