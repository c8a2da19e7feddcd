pub mod path;
pub mod replay;
pub mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::config::{Budget, Config};
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::formatter::RinkFormatter;
use crate::moves::Action;
use crate::problem::Problem;
use crate::state::{RinkErr, State};
use crate::Solve;

use self::path::find_path;
use self::replay::replay;
use self::stats::{RoundStats, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    Unreachable { from: Pos, to: Pos },
    Rink(RinkErr),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Unreachable { from, to } => {
                write!(f, "No moves or slides lead from {} to {}", from, to)
            }
            SolverErr::Rink(err) => write!(f, "{}", err),
        }
    }
}

impl Error for SolverErr {}

impl From<RinkErr> for SolverErr {
    fn from(err: RinkErr) -> Self {
        SolverErr::Rink(err)
    }
}

pub struct SolverOk {
    pub state: State,
    pub stats: Stats,
}

impl SolverOk {
    fn new(state: State, stats: Stats) -> Self {
        Self { state, stats }
    }

    pub fn score(&self) -> i64 {
        self.state.score()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} actions, score {}",
            if self.state.is_complete() { "Complete" } else { "Incomplete" },
            self.state.action_cnt(),
            self.state.score()
        )?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Problem {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(self, config)
    }
}

/// Where to restart from and which neighbor to toggle there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Perturbation {
    checkpoint: usize,
    dir: Dir,
}

/// Keeps the first best-scoring candidate offered during a round.
#[derive(Debug)]
struct CandidatePool {
    best: State,
    best_score: i64,
}

impl CandidatePool {
    fn new(seed: State) -> Self {
        let best_score = seed.score();
        CandidatePool {
            best: seed,
            best_score,
        }
    }

    fn offer(&mut self, candidate: State) {
        let score = candidate.score();
        if score > self.best_score {
            self.best = candidate;
            self.best_score = score;
        }
    }

    fn into_best(self) -> State {
        self.best
    }
}

fn solve(problem: &Problem, config: &Config) -> Result<SolverOk, SolverErr> {
    let started = Instant::now();
    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);

    let mut best = problem.initial_state(config.max_actions);
    match resolve(&mut best) {
        Ok(()) => {}
        Err(SolverErr::Unreachable { from, to }) => {
            warn!("Greedy solve got stuck between {} and {}", from, to)
        }
        Err(err) => return Err(err),
    }
    info!(
        "Greedy: {} actions, score {}",
        best.action_cnt(),
        best.score()
    );

    let mut stats = Stats::new(best.score());
    for (i, &budget) in config.rounds.iter().enumerate() {
        let (winner, round_stats) = search_round(&best, budget, started, &mut rng)?;
        info!(
            "Round {} ({}): {} attempts, best score {}",
            i + 1,
            budget,
            round_stats.attempts,
            round_stats.best_score
        );
        stats.add_round(round_stats);
        best = winner;
    }

    debug!("Final rink:\n{}", RinkFormatter::new(&best));
    Ok(SolverOk::new(best, stats))
}

/// One time-boxed pass: restart from random checkpoints of `seed`'s solution,
/// toggle one obstacle and route the rest again.
fn search_round<R: Rng>(
    seed: &State,
    budget: Budget,
    solve_started: Instant,
    rng: &mut R,
) -> Result<(State, RoundStats), SolverErr> {
    let round_started = Instant::now();
    let history = replay(seed)?;
    let mut stats = RoundStats::new(budget);
    let mut pool = CandidatePool::new(seed.clone());

    let mut attempts = 0;
    while !budget.exhausted(solve_started, attempts) {
        attempts += 1;
        let perturbation = Perturbation {
            checkpoint: rng.random_range(0..history.len()),
            dir: DIRECTIONS[rng.random_range(0..DIRECTIONS.len())],
        };
        match attempt(&history, perturbation)? {
            None => stats.illegal += 1,
            Some((candidate, abandoned)) => {
                stats.candidates += 1;
                if abandoned {
                    stats.abandoned += 1;
                }
                if candidate.is_complete() {
                    stats.completed += 1;
                }
                pool.offer(candidate);
            }
        }
    }

    stats.attempts = attempts as u64;
    stats.best_score = pool.best_score;
    stats.elapsed = round_started.elapsed();
    Ok((pool.into_best(), stats))
}

/// Branches off a checkpoint. `None` when the toggle would leave the rink,
/// otherwise the candidate and whether routing it got stuck.
fn attempt(
    history: &[State],
    perturbation: Perturbation,
) -> Result<Option<(State, bool)>, SolverErr> {
    let toggle = Action::toggle(perturbation.dir);
    let checkpoint = &history[perturbation.checkpoint];
    if !checkpoint.can_apply(toggle) || checkpoint.at_action_limit() {
        return Ok(None);
    }

    let mut candidate = checkpoint.clone();
    candidate.apply(toggle)?;
    match resolve(&mut candidate) {
        Ok(()) => Ok(Some((candidate, false))),
        Err(SolverErr::Unreachable { from, to }) => {
            debug!(
                "Abandoned after toggling {} at step {}: {} -> {} unreachable",
                perturbation.dir, perturbation.checkpoint, from, to
            );
            Ok(Some((candidate, true)))
        }
        Err(err) => Err(err),
    }
}

/// Routes the agent through the remaining destinations, shortest path to each in turn,
/// until done or out of actions. On `Unreachable` the state is left where it got stuck.
pub fn resolve(state: &mut State) -> Result<(), SolverErr> {
    loop {
        state.claim_reached();
        let target = match state.target() {
            Some(target) => target,
            None => return Ok(()),
        };

        let path = find_path(state, target)?;
        for action in path {
            if state.at_action_limit() {
                return Ok(());
            }
            state.apply(action)?;
        }
    }
}
