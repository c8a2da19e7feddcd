use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::formatter::RinkFormatter;
use crate::state::State;

/// A parsed input: the rink size, where the agent starts and the destinations to visit in order.
#[derive(Clone, PartialEq, Eq)]
pub struct Problem {
    pub size: u8,
    pub start: Pos,
    pub destinations: Vec<Pos>,
}

impl Problem {
    pub fn new(size: u8, start: Pos, destinations: Vec<Pos>) -> Self {
        Problem {
            size,
            start,
            destinations,
        }
    }

    pub fn initial_state(&self, action_limit: usize) -> State {
        State::with_action_limit(self.size, self.start, self.destinations.clone(), action_limit)
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = State::new(self.size, self.start, self.destinations.clone());
        write!(f, "{}", RinkFormatter::new(&state))
    }
}

impl Debug for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}, start: {}", self.size, self.start)?;
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_problem() {
        let problem: Problem = r"
3 3
1 1
0 2
2 0
"
        .parse()
        .unwrap();
        let expected = r"
..*
.@.
o..
"
        .trim_start_matches('\n');
        assert_eq!(problem.to_string(), expected);
        assert_eq!(
            format!("{:?}", problem),
            format!("size: 3, start: (1, 1)\n{}", expected)
        );
    }

    #[test]
    fn initial_state() {
        let problem = Problem::new(5, Pos::new(2, 2), vec![Pos::new(0, 0)]);
        let state = problem.initial_state(10);
        assert_eq!(state.size(), 5);
        assert_eq!(state.pos(), Pos::new(2, 2));
        assert_eq!(state.action_limit(), 10);
        assert_eq!(state.target(), Some(Pos::new(0, 0)));
    }
}
