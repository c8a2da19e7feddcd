use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;

use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::config::Budget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundStats {
    pub budget: Budget,
    pub attempts: u64,
    pub illegal: u64,
    pub candidates: u64,
    pub completed: u64,
    pub abandoned: u64,
    pub best_score: i64,
    pub elapsed: Duration,
}

impl RoundStats {
    pub(crate) fn new(budget: Budget) -> Self {
        RoundStats {
            budget,
            attempts: 0,
            illegal: 0,
            candidates: 0,
            completed: 0,
            abandoned: 0,
            best_score: 0,
            elapsed: Duration::default(),
        }
    }
}

#[derive(PartialEq, Eq)]
pub struct Stats {
    greedy_score: i64,
    rounds: Vec<RoundStats>,
}

impl Stats {
    pub(crate) fn new(greedy_score: i64) -> Self {
        Stats {
            greedy_score,
            rounds: Vec::new(),
        }
    }

    pub(crate) fn add_round(&mut self, round: RoundStats) {
        self.rounds.push(round);
    }

    pub fn greedy_score(&self) -> i64 {
        self.greedy_score
    }

    pub fn rounds(&self) -> &[RoundStats] {
        &self.rounds
    }

    pub fn total_attempts(&self) -> u64 {
        self.rounds.iter().map(|r| r.attempts).sum()
    }

    pub fn total_completed(&self) -> u64 {
        self.rounds.iter().map(|r| r.completed).sum()
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(
            [
                "Round", "Budget", "Attempts", "Illegal", "Candidates", "Completed", "Abandoned",
                "Best", "Time",
            ]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
        ));
        for (i, round) in self.rounds.iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(&(i + 1).to_string()),
                Cell::new(&round.budget.to_string()),
                Cell::new(&round.attempts.separated_string()),
                Cell::new(&round.illegal.separated_string()),
                Cell::new(&round.candidates.separated_string()),
                Cell::new(&round.completed.separated_string()),
                Cell::new(&round.abandoned.separated_string()),
                Cell::new(&round.best_score.to_string()),
                Cell::new(&format!("{} ms", (round.elapsed.as_millis() as u64).separated_string())),
            ]));
        }
        table
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Greedy score: {}", self.greedy_score)?;
        writeln!(f, "Attempts total: {}", self.total_attempts().separated_string())?;
        writeln!(f, "Completed total: {}", self.total_completed().separated_string())?;
        write!(f, "{}", self.table())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "greedy score: {}", self.greedy_score)?;
        for (i, round) in self.rounds.iter().enumerate() {
            writeln!(f, "round {}: {:?}", i + 1, round)?;
        }
        Ok(())
    }
}
