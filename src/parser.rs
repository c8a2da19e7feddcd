use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::warn;

use crate::data::{Pos, DEFAULT_SIZE, MAX_SIZE};
use crate::problem::Problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    MissingStart,
    BadSize(usize),
    /// 1-based line number
    Line(usize),
    OutOfBounds { line: usize, r: usize, c: usize },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty input"),
            ParserErr::MissingStart => write!(f, "No start position"),
            ParserErr::BadSize(size) => {
                write!(f, "Rink size {} is not between 1 and {}", size, MAX_SIZE)
            }
            ParserErr::Line(line) => write!(f, "Expected two numbers on line {}", line),
            ParserErr::OutOfBounds { line, r, c } => {
                write!(f, "Position [{}, {}] on line {} is outside the rink", r, c, line)
            }
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Problem {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, DEFAULT_SIZE)
    }
}

/// Parses a problem. The first line is a header - if it holds `N M`, `N` is the rink size,
/// otherwise it's ignored and `default_size` is used.
pub fn parse(input: &str, default_size: u8) -> Result<Problem, ParserErr> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|&(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(ParserErr::Empty)?;
    let (size, expected_cnt) = match parse_pair(header) {
        Some((n, m)) => {
            if n == 0 || n > MAX_SIZE {
                return Err(ParserErr::BadSize(n));
            }
            (n as u8, Some(m.saturating_sub(1)))
        }
        None => (default_size, None),
    };

    let (line, start) = lines.next().ok_or(ParserErr::MissingStart)?;
    let start = parse_pos(line, start, size)?;

    let mut destinations = Vec::new();
    for (line, text) in lines {
        destinations.push(parse_pos(line, text, size)?);
    }

    if let Some(expected_cnt) = expected_cnt {
        if expected_cnt != destinations.len() {
            warn!(
                "Header announces {} destinations, found {}",
                expected_cnt,
                destinations.len()
            );
        }
    }

    Ok(Problem::new(size, start, destinations))
}

fn parse_pair(text: &str) -> Option<(usize, usize)> {
    let mut parts = text.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(a)), Some(Ok(b)), None) => Some((a, b)),
        _ => None,
    }
}

fn parse_pos(line: usize, text: &str, size: u8) -> Result<Pos, ParserErr> {
    let (r, c) = parse_pair(text).ok_or(ParserErr::Line(line))?;
    if r >= usize::from(size) || c >= usize::from(size) {
        return Err(ParserErr::OutOfBounds { line, r, c });
    }
    Ok(Pos::new(r as u8, c as u8))
}
