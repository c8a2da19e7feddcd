use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::Dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Slide,
    Toggle,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ActionKind::Move => write!(f, "M"),
            ActionKind::Slide => write!(f, "S"),
            ActionKind::Toggle => write!(f, "A"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub kind: ActionKind,
    pub dir: Dir,
}

impl Action {
    pub fn new(kind: ActionKind, dir: Dir) -> Self {
        Action { kind, dir }
    }

    pub fn step(dir: Dir) -> Self {
        Action::new(ActionKind::Move, dir)
    }

    pub fn slide(dir: Dir) -> Self {
        Action::new(ActionKind::Slide, dir)
    }

    pub fn toggle(dir: Dir) -> Self {
        Action::new(ActionKind::Toggle, dir)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.dir)
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let kind = match parts.next() {
            Some("M") => ActionKind::Move,
            Some("S") => ActionKind::Slide,
            Some("A") => ActionKind::Toggle,
            _ => return Err(format!("Unknown action: {}", s)),
        };
        let dir = parts
            .next()
            .ok_or_else(|| format!("Missing direction: {}", s))?
            .parse()?;
        if parts.next().is_some() {
            return Err(format!("Trailing input: {}", s));
        }
        Ok(Action::new(kind, dir))
    }
}

/// Append-only log of applied actions.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Actions(Vec<Action>);

impl Actions {
    pub fn new(actions: Vec<Action>) -> Self {
        Actions(actions)
    }

    pub fn action_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn kind_cnt(&self, kind: ActionKind) -> usize {
        self.0.iter().filter(|a| a.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, action: Action) {
        self.0.push(action);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Action> {
        self.0.iter()
    }
}

impl IntoIterator for Actions {
    type Item = Action;
    type IntoIter = ::std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = ::std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One action per line, the format the judge expects.
impl Display for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for action in self {
            writeln!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl Debug for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.0.iter().map(|a| a.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
