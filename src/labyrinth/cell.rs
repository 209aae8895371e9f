use crate::labyrinth::render::{Line, Point};
use crate::labyrinth::walls::Walls;

/// Rectangle occupé par une cellule sur la surface de dessin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Bounds {
    /// Centre du rectangle (utilisé pour tracer les déplacements).
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x2, self.y1)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x1, self.y2)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède une configuration de murs, un état de visite
/// et, une fois la grille disposée, son rectangle à l'écran.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// Marqué par le générateur puis par le solveur.
    pub visited: bool,
    /// `None` tant que `Grid::layout` n'a pas été appelé.
    pub bounds: Option<Bounds>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Crée une nouvelle instance de `Cell`.
    ///
    /// Les quatre murs sont présents et la cellule n'est pas visitée.
    pub fn new() -> Self {
        Self {
            walls: Walls::default(),
            visited: false,
            bounds: None,
        }
    }

    /// Les quatre segments de mur de la cellule avec leur présence,
    /// dans l'ordre droite, gauche, haut, bas.
    ///
    /// Vide si la cellule n'a pas encore de coordonnées.
    pub fn wall_segments(&self) -> Vec<(Line, bool)> {
        let Some(b) = self.bounds else {
            return Vec::new();
        };
        vec![
            (Line::new(b.top_right(), b.bottom_right()), self.walls.right),
            (Line::new(b.top_left(), b.bottom_left()), self.walls.left),
            (Line::new(b.top_left(), b.top_right()), self.walls.top),
            (Line::new(b.bottom_left(), b.bottom_right()), self.walls.bottom),
        ]
    }
}
