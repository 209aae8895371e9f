use crate::labyrinth::direction::Direction;

/// Ensemble des 4 murs d'une cellule.
///
/// `true` = mur présent, `false` = passage ouvert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

impl Walls {
    /// Vrai si le mur est présent du côté `dir`.
    pub fn has(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
        }
    }

    /// Ouvre le mur du côté `dir`. Un mur ouvert n'est jamais refermé.
    pub fn clear(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.left = false,
            Direction::Up => self.top = false,
            Direction::Right => self.right = false,
            Direction::Down => self.bottom = false,
        }
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        !self.has(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        let walls = Walls::default();
        for dir in Direction::ALL {
            assert!(walls.has(dir));
        }
    }

    #[test]
    fn test_clear_only_touches_one_side() {
        let mut walls = Walls::default();
        walls.clear(Direction::Up);
        assert!(walls.is_open(Direction::Up));
        assert!(!walls.top);
        assert!(walls.bottom && walls.left && walls.right);

        // idempotent
        walls.clear(Direction::Up);
        assert!(walls.is_open(Direction::Up));
    }
}
