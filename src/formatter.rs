use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::state::State;

/// Draws a rink as text: `@` agent, `*` next destination, `o` later destinations,
/// `#` obstacle, `.` free cell.
pub struct RinkFormatter<'a> {
    state: &'a State,
}

impl<'a> RinkFormatter<'a> {
    pub fn new(state: &'a State) -> Self {
        Self { state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.state.grid();
        let mut chars = grid.scratchpad_with_default('.');
        for pos in grid.positions() {
            if grid[pos] {
                chars[pos] = '#';
            }
        }
        let remaining = &self.state.destinations()[self.state.visited()..];
        // later destinations first so the target and agent end up on top
        for &dest in remaining.iter().rev() {
            chars[dest] = 'o';
        }
        if let Some(target) = self.state.target() {
            chars[target] = '*';
        }
        chars[self.state.pos()] = '@';

        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                write!(f, "{}", chars[Pos::new(r, c)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Display for RinkFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for RinkFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
