/// Les quatre directions de déplacement dans la grille.
///
/// L'ordre de déclaration est l'ordre de préférence utilisé partout
/// (voisins, exploration du solveur) : gauche, haut, droite, bas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Toutes les directions, dans l'ordre de préférence.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Fait demi tour (par ex. Left -> Right)
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Décalage (dcol, drow) d'un pas dans cette direction.
    /// Les lignes croissent vers le bas.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Nouvelle position après un pas, ou `None` si on sort de la grille.
    pub fn step(self, col: usize, row: usize, num_cols: usize, num_rows: usize) -> Option<(usize, usize)> {
        let (dc, dr) = self.offset();
        let c = col.checked_add_signed(dc)?;
        let r = row.checked_add_signed(dr)?;
        if c < num_cols && r < num_rows {
            Some((c, r))
        } else {
            None
        }
    }

    /// Direction qui mène de `from` à `to` si les deux cases sont adjacentes.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        Direction::ALL.into_iter().find(|dir| {
            let (dc, dr) = dir.offset();
            from.0.checked_add_signed(dc) == Some(to.0) && from.1.checked_add_signed(dr) == Some(to.1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_step_stays_in_bounds() {
        // Coin haut-gauche : seules droite et bas sont possibles
        assert_eq!(Direction::Left.step(0, 0, 3, 2), None);
        assert_eq!(Direction::Up.step(0, 0, 3, 2), None);
        assert_eq!(Direction::Right.step(0, 0, 3, 2), Some((1, 0)));
        assert_eq!(Direction::Down.step(0, 0, 3, 2), Some((0, 1)));

        // Coin bas-droit
        assert_eq!(Direction::Right.step(2, 1, 3, 2), None);
        assert_eq!(Direction::Down.step(2, 1, 3, 2), None);
    }

    #[test]
    fn test_between() {
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::Left));
        assert_eq!(Direction::between((1, 1), (1, 2)), Some(Direction::Down));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((0, 0), (0, 0)), None);
    }
}
