use std::collections::VecDeque;

use fnv::FnvHashMap;

use crate::data::{Pos, DIRECTIONS};
use crate::moves::{Action, Actions};
use crate::solver::SolverErr;
use crate::state::{slide_end, State};
use crate::vec2d::Vec2d;

/// How the agent got to a cell. Part of the search node so reaching the same cell
/// by a move and by a slide are explored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Arrival {
    Move,
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchNode {
    pos: Pos,
    arrival: Arrival,
}

impl SearchNode {
    fn new(pos: Pos, arrival: Arrival) -> Self {
        SearchNode { pos, arrival }
    }
}

/// Fewest moves and slides taking the agent from its current position to `target`
/// with the obstacles left as they are.
///
/// Every action costs one no matter how far a slide goes so a plain BFS gives
/// the true minimum. Returns an empty path when already standing on `target`.
pub fn find_path(state: &State, target: Pos) -> Result<Actions, SolverErr> {
    shortest_path(state.grid(), state.pos(), target)
}

pub(crate) fn shortest_path(grid: &Vec2d<bool>, src: Pos, target: Pos) -> Result<Actions, SolverErr> {
    if src == target {
        return Ok(Actions::default());
    }

    for &dir in &DIRECTIONS {
        if slide_end(grid, src, dir) == target {
            return Ok(Actions::new(vec![Action::slide(dir)]));
        }
    }

    let start = SearchNode::new(src, Arrival::Slide);
    let mut prevs = FnvHashMap::default();
    let mut to_visit = VecDeque::new();
    to_visit.push_back(start);

    while let Some(cur) = to_visit.pop_front() {
        for (next, action) in expand(grid, cur.pos) {
            if next == start || prevs.contains_key(&next) {
                continue;
            }
            prevs.insert(next, (cur, action));
            if next.pos == target {
                return Ok(backtrack_path(&prevs, start, next));
            }
            to_visit.push_back(next);
        }
    }

    Err(SolverErr::Unreachable { from: src, to: target })
}

/// Moves first, then slides, so a move wins ties at the same depth.
fn expand(grid: &Vec2d<bool>, pos: Pos) -> Vec<(SearchNode, Action)> {
    let mut neighbors = Vec::with_capacity(8);

    for &dir in &DIRECTIONS {
        if let Some(new_pos) = pos.step(dir, grid.rows()) {
            if !grid[new_pos] {
                neighbors.push((SearchNode::new(new_pos, Arrival::Move), Action::step(dir)));
            }
        }
    }

    for &dir in &DIRECTIONS {
        let new_pos = slide_end(grid, pos, dir);
        // zero length slides are legal but never get us anywhere
        if new_pos != pos {
            neighbors.push((SearchNode::new(new_pos, Arrival::Slide), Action::slide(dir)));
        }
    }

    neighbors
}

fn backtrack_path(
    prevs: &FnvHashMap<SearchNode, (SearchNode, Action)>,
    start: SearchNode,
    end: SearchNode,
) -> Actions {
    let mut path = Vec::new();
    let mut node = end;
    while node != start {
        let (prev, action) = prevs[&node];
        path.push(action);
        node = prev;
    }
    path.reverse();
    Actions::new(path)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::data::Dir;

    fn rink(size: u8, start: Pos, target: Pos, obstacles: &[Pos]) -> State {
        let mut grid = Vec2d::new(size, size, false);
        for &o in obstacles {
            grid[o] = true;
        }
        State::from_parts(grid, start, vec![target])
    }

    /// Plain cell BFS, only used to check path lengths.
    fn brute_force_len(grid: &Vec2d<bool>, src: Pos, target: Pos) -> Option<usize> {
        let mut dists = grid.scratchpad_with_default(None);
        dists[src] = Some(0);
        let mut to_visit = VecDeque::new();
        to_visit.push_back(src);
        while let Some(cur) = to_visit.pop_front() {
            let d = dists[cur].unwrap();
            if cur == target {
                return Some(d);
            }
            let mut nexts = Vec::new();
            for &dir in &DIRECTIONS {
                if let Some(n) = cur.step(dir, grid.rows()) {
                    if !grid[n] {
                        nexts.push(n);
                    }
                }
                nexts.push(slide_end(grid, cur, dir));
            }
            for n in nexts {
                if dists[n].is_none() {
                    dists[n] = Some(d + 1);
                    to_visit.push_back(n);
                }
            }
        }
        None
    }

    #[test]
    fn single_slide_across_empty_rink() {
        let state = rink(3, Pos::new(0, 0), Pos::new(0, 2), &[]);
        let path = find_path(&state, Pos::new(0, 2)).unwrap();
        assert_eq!(path, Actions::new(vec![Action::slide(Dir::Right)]));
    }

    #[test]
    fn routing_around_obstacle() {
        let obstacle = Pos::new(0, 1);
        let target = Pos::new(0, 2);
        let mut state = rink(3, Pos::new(0, 0), target, &[obstacle]);
        let path = find_path(&state, target).unwrap();
        assert_eq!(path.action_cnt(), 3);

        for &action in &path {
            state.apply(action).unwrap();
            assert_ne!(state.pos(), obstacle);
        }
        assert_eq!(state.pos(), target);
        assert!(state.is_complete());
    }

    #[test]
    fn already_there() {
        let state = rink(3, Pos::new(1, 1), Pos::new(1, 1), &[]);
        assert!(find_path(&state, Pos::new(1, 1)).unwrap().is_empty());
    }

    #[test]
    fn walled_off_target() {
        let target = Pos::new(0, 0);
        let state = rink(3, Pos::new(2, 2), target, &[Pos::new(0, 1), Pos::new(1, 0)]);
        assert_eq!(
            find_path(&state, target),
            Err(SolverErr::Unreachable {
                from: Pos::new(2, 2),
                to: target
            })
        );
    }

    #[test]
    fn stopping_in_the_middle_needs_a_move() {
        // nothing to stop a slide at (0, 2) so the last action has to be a move
        let target = Pos::new(0, 2);
        let state = rink(5, Pos::new(0, 0), target, &[]);
        let path = find_path(&state, target).unwrap();
        assert_eq!(path.action_cnt(), 2);
    }

    #[test]
    fn matches_brute_force_on_small_rinks() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let size = 4;
        for _ in 0..500 {
            let mut grid = Vec2d::new(size, size, false);
            for pos in grid.positions().collect::<Vec<_>>() {
                grid[pos] = rng.random_bool(0.25);
            }
            let free: Vec<_> = grid.positions().filter(|&p| !grid[p]).collect();
            if free.len() < 2 {
                continue;
            }
            let src = free[rng.random_range(0..free.len())];
            let target = free[rng.random_range(0..free.len())];

            let expected = brute_force_len(&grid, src, target);
            let state = State::from_parts(grid.clone(), src, vec![target]);
            match find_path(&state, target) {
                Ok(path) => {
                    assert_eq!(Some(path.action_cnt()), expected, "\n{}", grid);

                    let mut replayed = state.clone();
                    for action in path {
                        replayed.apply(action).unwrap();
                    }
                    assert_eq!(replayed.pos(), target, "\n{}", grid);
                }
                Err(err) => {
                    assert_eq!(expected, None, "\n{}", grid);
                    assert_eq!(err, SolverErr::Unreachable { from: src, to: target });
                }
            }
        }
    }
}
