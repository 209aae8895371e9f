use std::time::Duration;

use rusty_maze::{Coord, Direction, Grid, Maze, MazeConfig, RecordingRenderer, Stroke};

fn config(num_cols: usize, num_rows: usize, seed: u64) -> MazeConfig {
    MazeConfig {
        num_cols,
        num_rows,
        origin_x: 0.0,
        origin_y: 0.0,
        cell_width: 10.0,
        cell_height: 10.0,
        seed: Some(seed),
        frame_delay: Duration::ZERO,
    }
}

fn generated(num_cols: usize, num_rows: usize, seed: u64) -> Maze {
    let mut maze = Maze::headless(config(num_cols, num_rows, seed)).unwrap();
    maze.generate().unwrap();
    maze
}

/// Matrice des murs (haut, bas, gauche, droite) par cellule.
fn wall_matrix(grid: &Grid) -> Vec<[bool; 4]> {
    grid.coords()
        .map(|c| {
            let w = grid[c].walls;
            [w.top, w.bottom, w.left, w.right]
        })
        .collect()
}

fn assert_connected_path(grid: &Grid, path: &[Coord]) {
    assert_eq!(path.first(), Some(&grid.entrance()));
    assert_eq!(path.last(), Some(&grid.exit()));
    for pair in path.windows(2) {
        let dir = Direction::between(pair[0], pair[1]).expect("path cells must be adjacent");
        assert!(grid.is_passable(pair[0], dir));
    }
}

const SIZES: [(usize, usize); 6] = [(1, 1), (1, 7), (7, 1), (2, 2), (12, 10), (25, 3)];

#[test]
fn test_grid_shape() {
    for (cols, rows) in SIZES {
        let maze = Maze::headless(config(cols, rows, 0)).unwrap();
        assert_eq!(maze.grid().columns().len(), cols);
        assert!(maze.grid().columns().iter().all(|column| column.len() == rows));
    }
}

#[test]
fn test_layout_bounds() {
    let mut cfg = config(6, 4, 0);
    cfg.origin_x = 50.0;
    cfg.origin_y = 25.0;
    cfg.cell_width = 20.0;
    cfg.cell_height = 30.0;
    let maze = Maze::headless(cfg).unwrap();

    for (i, j) in maze.grid().coords() {
        let b = maze.grid()[(i, j)].bounds.unwrap();
        assert_eq!(
            (b.x1, b.y1, b.x2, b.y2),
            (
                50.0 + i as f64 * 20.0,
                25.0 + j as f64 * 30.0,
                50.0 + (i + 1) as f64 * 20.0,
                25.0 + (j + 1) as f64 * 30.0
            )
        );
    }
}

#[test]
fn test_boundary_openness() {
    for (cols, rows) in SIZES {
        let maze = generated(cols, rows, 5);
        let grid = maze.grid();
        assert!(!grid[(0, 0)].walls.left);
        assert!(!grid[(cols - 1, rows - 1)].walls.bottom);
    }
}

#[test]
fn test_spanning_tree() {
    for (cols, rows) in SIZES {
        for seed in 0..5 {
            let maze = generated(cols, rows, seed);
            let grid = maze.grid();
            assert_eq!(grid.reachable_count((0, 0)), cols * rows);
            assert_eq!(grid.carved_edge_count(), cols * rows - 1);
            assert!(grid.walls_consistent());
        }
    }
}

#[test]
fn test_bidirectional_walls_exhaustive() {
    let maze = generated(20, 15, 99);
    let grid = maze.grid();
    for (col, row) in grid.coords() {
        if col + 1 < grid.num_cols() {
            assert_eq!(grid[(col, row)].walls.right, grid[(col + 1, row)].walls.left);
        }
        if row + 1 < grid.num_rows() {
            assert_eq!(grid[(col, row)].walls.bottom, grid[(col, row + 1)].walls.top);
        }
    }
}

#[test]
fn test_seed_determinism() {
    let a = generated(16, 12, 1234);
    let b = generated(16, 12, 1234);
    assert_eq!(wall_matrix(a.grid()), wall_matrix(b.grid()));
}

#[test]
fn test_solve_generated() {
    for (cols, rows) in SIZES {
        for seed in 0..5 {
            let mut maze = generated(cols, rows, seed);
            let solution = maze.solve_path().expect("generated maze must be solvable");
            assert_connected_path(maze.grid(), &solution.path);
        }
    }
}

#[test]
fn test_solve_unsolvable() {
    let mut maze = Maze::headless(config(4, 3, 0)).unwrap();
    // Aucun mur creusé : l'entrée est isolée
    assert!(!maze.solve());

    // Deux moitiés reliées en interne, mais séparées par la colonne 1/2
    let grid = maze.grid_mut();
    for row in 0..3 {
        for col in [0, 2] {
            grid.carve((col, row), Direction::Right).unwrap();
        }
        if row + 1 < 3 {
            for col in 0..4 {
                grid.carve((col, row), Direction::Down).unwrap();
            }
        }
    }
    assert!(!maze.solve());
}

#[test]
fn test_reference_scenario() {
    let run = || {
        let cfg = MazeConfig::for_window(800.0, 600.0, 50.0, 16, 12)
            .with_seed(42)
            .with_frame_delay(Duration::ZERO);
        assert_eq!(cfg.cell_width, (800.0 - 100.0) / 16.0);
        assert_eq!(cfg.cell_height, (600.0 - 100.0) / 12.0);

        let mut maze = Maze::headless(cfg).unwrap();
        maze.generate().unwrap();
        let solution = maze.solve_path().unwrap();
        assert_connected_path(maze.grid(), &solution.path);
        (wall_matrix(maze.grid()), solution.path)
    };

    let (walls_a, path_a) = run();
    let (walls_b, path_b) = run();
    assert_eq!(walls_a, walls_b);
    assert_eq!(path_a, path_b);
}

#[test]
fn test_rendered_run() {
    let rec = RecordingRenderer::new();
    let cfg = config(5, 4, 8);
    let mut maze = Maze::new(cfg, Some(Box::new(rec.clone()))).unwrap();
    maze.generate().unwrap();
    let solution = maze.solve_path().unwrap();

    // Les murs creusés sont effacés à l'écran
    assert!(!rec.lines(Stroke::Erase).is_empty());
    // Un tracé avant par cellule explorée (sauf l'entrée), un tracé de
    // retour par impasse
    assert_eq!(rec.lines(Stroke::Path).len(), solution.explored - 1);
    assert_eq!(rec.lines(Stroke::Backtrack).len(), solution.backtracks);
}
