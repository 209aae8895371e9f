pub mod ascii_utils;
pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
pub mod solver;
pub mod walls;
