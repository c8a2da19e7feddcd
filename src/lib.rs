// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod formatter;
pub mod moves;
pub mod parser;
pub mod problem;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;

use crate::config::Config;
use crate::problem::Problem;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadProblem {
    fn load_problem(&self) -> Result<Problem, Box<dyn Error>>;

    /// `default_size` is used when the header line doesn't specify the rink size.
    fn load_problem_with_size(&self, default_size: u8) -> Result<Problem, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr>;
}
