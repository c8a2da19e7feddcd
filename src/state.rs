use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::data::{Dir, Pos, MAX_ACTIONS};
use crate::moves::{Action, ActionKind, Actions};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RinkErr {
    IllegalAction(Action),
    ActionLimit(usize),
}

impl Display for RinkErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            RinkErr::IllegalAction(action) => write!(f, "Invalid or impossible action: {}", action),
            RinkErr::ActionLimit(limit) => write!(f, "Action limit of {} reached", limit),
        }
    }
}

impl Error for RinkErr {}

/// The rink at some point of a solution: obstacles, agent and everything done so far.
///
/// Cloning gives a fully independent branch - the grid and the action log are owned,
/// only the immutable destination list is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    grid: Vec2d<bool>,
    start: Pos,
    pos: Pos,
    destinations: Rc<[Pos]>,
    visited: usize,
    actions: Actions,
    action_limit: usize,
}

impl State {
    pub fn new(size: u8, start: Pos, destinations: Vec<Pos>) -> Self {
        Self::with_action_limit(size, start, destinations, MAX_ACTIONS)
    }

    pub fn with_action_limit(
        size: u8,
        start: Pos,
        destinations: Vec<Pos>,
        action_limit: usize,
    ) -> Self {
        State {
            grid: Vec2d::new(size, size, false),
            start,
            pos: start,
            destinations: destinations.into(),
            visited: 0,
            actions: Actions::default(),
            action_limit,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(grid: Vec2d<bool>, start: Pos, destinations: Vec<Pos>) -> Self {
        State {
            grid,
            start,
            pos: start,
            destinations: destinations.into(),
            visited: 0,
            actions: Actions::default(),
            action_limit: MAX_ACTIONS,
        }
    }

    /// Same start and destinations, clear rink, nothing done yet.
    pub fn pristine(&self) -> Self {
        State {
            grid: Vec2d::new(self.size(), self.size(), false),
            start: self.start,
            pos: self.start,
            destinations: Rc::clone(&self.destinations),
            visited: 0,
            actions: Actions::default(),
            action_limit: self.action_limit,
        }
    }

    pub fn size(&self) -> u8 {
        self.grid.rows()
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn destinations(&self) -> &[Pos] {
        &self.destinations
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    pub fn action_cnt(&self) -> usize {
        self.actions.action_cnt()
    }

    pub fn action_limit(&self) -> usize {
        self.action_limit
    }

    pub fn at_action_limit(&self) -> bool {
        self.action_cnt() >= self.action_limit
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.grid[pos]
    }

    pub(crate) fn grid(&self) -> &Vec2d<bool> {
        &self.grid
    }

    /// The destination to visit next, `None` once all are visited.
    pub fn target(&self) -> Option<Pos> {
        self.destinations.get(self.visited).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.visited == self.destinations.len()
    }

    /// Counts destinations the agent is already standing on without taking any action.
    ///
    /// Covers a first destination equal to the start and repeated consecutive destinations.
    /// Returns how many were claimed.
    pub fn claim_reached(&mut self) -> usize {
        let mut claimed = 0;
        while self.target() == Some(self.pos) {
            self.visited += 1;
            claimed += 1;
        }
        claimed
    }

    pub fn can_apply(&self, action: Action) -> bool {
        match action.kind {
            ActionKind::Move => match self.pos.step(action.dir, self.size()) {
                Some(new_pos) => !self.grid[new_pos],
                None => false,
            },
            ActionKind::Slide => true,
            ActionKind::Toggle => self.pos.step(action.dir, self.size()).is_some(),
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<(), RinkErr> {
        if !self.can_apply(action) {
            return Err(RinkErr::IllegalAction(action));
        }
        if self.at_action_limit() {
            return Err(RinkErr::ActionLimit(self.action_limit));
        }

        match action.kind {
            ActionKind::Move => {
                // checked by can_apply
                if let Some(new_pos) = self.pos.step(action.dir, self.size()) {
                    self.arrive(new_pos);
                }
            }
            ActionKind::Slide => {
                let new_pos = slide_end(&self.grid, self.pos, action.dir);
                self.arrive(new_pos);
            }
            ActionKind::Toggle => {
                if let Some(toggled) = self.pos.step(action.dir, self.size()) {
                    self.grid[toggled] = !self.grid[toggled];
                }
            }
        }
        self.actions.add(action);
        Ok(())
    }

    fn arrive(&mut self, new_pos: Pos) {
        self.pos = new_pos;
        if self.target() == Some(new_pos) {
            self.visited += 1;
        }
    }

    /// Partial solutions score `visited + 1`,
    /// complete ones `M + 2NM - actions` where M is the number of destinations plus one.
    pub fn score(&self) -> i64 {
        if !self.is_complete() {
            return self.visited as i64 + 1;
        }
        let m = self.destinations.len() as i64 + 1;
        let n = i64::from(self.size());
        m + 2 * n * m - self.action_cnt() as i64
    }
}

/// Where a slide from `from` in `dir` stops - the last free cell before an obstacle or the border.
pub(crate) fn slide_end(grid: &Vec2d<bool>, from: Pos, dir: Dir) -> Pos {
    let mut pos = from;
    while let Some(next) = pos.step(dir, grid.rows()) {
        if grid[next] {
            break;
        }
        pos = next;
    }
    pos
}
