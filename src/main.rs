use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use rusty_maze::labyrinth::config::{MARGIN, NUM_COLS, NUM_ROWS, WINDOW_HEIGHT, WINDOW_WIDTH};
use rusty_maze::{Maze, MazeConfig, RenderPort, TraceRenderer};

/// Génère un labyrinthe parfait puis le résout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Nombre de colonnes
    #[arg(long, default_value_t = NUM_COLS)]
    cols: usize,

    /// Nombre de lignes
    #[arg(long, default_value_t = NUM_ROWS)]
    rows: usize,

    /// Largeur de la surface de dessin, en pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: f64,

    /// Hauteur de la surface de dessin, en pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: f64,

    /// Marge autour du labyrinthe
    #[arg(long, default_value_t = MARGIN)]
    margin: f64,

    /// Graine du générateur aléatoire
    #[arg(long)]
    seed: Option<u64>,

    /// Pause entre deux images quand --trace est actif
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Écrit les tracés (une ligne JSON par événement) sur la sortie standard
    #[arg(long)]
    trace: bool,

    /// N'affiche pas le labyrinthe final en ASCII
    #[arg(long)]
    no_ascii: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = MazeConfig::for_window(args.width, args.height, args.margin, args.cols, args.rows)
        .with_frame_delay(Duration::from_millis(args.delay_ms));
    config.seed = args.seed;

    let renderer: Option<Box<dyn RenderPort>> = if args.trace {
        Some(Box::new(TraceRenderer::new(io::stdout())))
    } else {
        None
    };

    let mut maze = Maze::new(config, renderer)?;
    maze.generate()?;
    info!("perfect maze: {}", maze.grid().is_perfect());

    let solution = maze.solve_path();
    match &solution {
        Some(s) => info!(
            "path found: {} cells ({} explored, {} backtracks)",
            s.path.len(),
            s.explored,
            s.backtracks
        ),
        None => warn!("no path found"),
    }

    // La trace occupe stdout : le dessin ASCII irait s'y mélanger
    if !args.no_ascii && !args.trace {
        let path = solution.as_ref().map(|s| s.path.as_slice()).unwrap_or_default();
        print!("{}", maze.to_ascii(path));
    }

    Ok(if solution.is_some() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
