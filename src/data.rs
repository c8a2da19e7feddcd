use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_SIZE: u8 = 20;
pub const MAX_SIZE: usize = 255;
pub const MAX_ACTIONS: usize = 1600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// The neighboring cell in `dir` or `None` when it would leave a `size`×`size` rink.
    pub fn step(self, dir: Dir, size: u8) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = i32::from(self.r) + dr;
        let c = i32::from(self.c) + dc;
        if r < 0 || c < 0 || r >= i32::from(size) || c >= i32::from(size) {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "U"),
            Dir::Down => write!(f, "D"),
            Dir::Left => write!(f, "L"),
            Dir::Right => write!(f, "R"),
        }
    }
}

impl FromStr for Dir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Dir::Up),
            "D" => Ok(Dir::Down),
            "L" => Ok(Dir::Left),
            "R" => Ok(Dir::Right),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}
