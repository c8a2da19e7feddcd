use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

use crate::data::MAX_ACTIONS;

/// How long one round of the search may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// Deadline measured from the start of the whole solve, not of the round.
    Time(Duration),
    /// Number of perturbation attempts, makes runs reproducible.
    Iterations(usize),
}

impl Budget {
    pub(crate) fn exhausted(self, solve_started: Instant, attempts: usize) -> bool {
        match self {
            Budget::Time(deadline) => solve_started.elapsed() >= deadline,
            Budget::Iterations(limit) => attempts >= limit,
        }
    }
}

impl Display for Budget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Budget::Time(deadline) => write!(f, "until {:.2}s", deadline.as_secs_f64()),
            Budget::Iterations(limit) => write!(f, "{} attempts", limit),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rounds: Vec<Budget>,
    pub seed: u64,
    pub max_actions: usize,
}

impl Config {
    pub fn with_time_limits(secs: &[f64]) -> Self {
        Config {
            rounds: secs
                .iter()
                .map(|&s| Budget::Time(Duration::from_secs_f64(s)))
                .collect(),
            ..Config::default()
        }
    }

    pub fn with_iterations(rounds: usize, attempts: usize) -> Self {
        Config {
            rounds: vec![Budget::Iterations(attempts); rounds],
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rounds: vec![
                Budget::Time(Duration::from_millis(600)),
                Budget::Time(Duration::from_millis(1200)),
                Budget::Time(Duration::from_millis(1800)),
            ],
            seed: 42,
            max_actions: MAX_ACTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_budget() {
        let started = Instant::now();
        let budget = Budget::Iterations(3);
        assert!(!budget.exhausted(started, 2));
        assert!(budget.exhausted(started, 3));
        assert_eq!(budget.to_string(), "3 attempts");
    }

    #[test]
    fn time_budget() {
        let started = Instant::now();
        assert!(Budget::Time(Duration::from_secs(0)).exhausted(started, 0));
        assert!(!Budget::Time(Duration::from_secs(3600)).exhausted(started, 1_000_000));
        assert_eq!(Budget::Time(Duration::from_millis(1200)).to_string(), "until 1.20s");
    }

    #[test]
    fn constructors() {
        let config = Config::with_time_limits(&[0.5, 1.0]);
        assert_eq!(config.rounds.len(), 2);
        assert_eq!(config.seed, Config::default().seed);

        let config = Config::with_iterations(3, 10);
        assert_eq!(config.rounds, vec![Budget::Iterations(10); 3]);
        assert_eq!(config.max_actions, MAX_ACTIONS);
    }
}
