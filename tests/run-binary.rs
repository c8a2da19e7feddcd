use assert_cmd::Command;

use rink_solver::moves::Action;
use rink_solver::LoadProblem;

fn run(args: &[&str]) -> (String, String) {
    let output = Command::cargo_bin("rink-solver")
        .unwrap()
        .args(args)
        .assert()
        .success()
        .get_output()
        .clone();
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn run_small_from_stdin() {
    let output = Command::cargo_bin("rink-solver")
        .unwrap()
        .args(&["--iterations", "50", "--seed", "1"])
        .write_stdin("5 4\n0 0\n0 4\n4 4\n2 2\n")
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    let actions: Vec<Action> = stdout.lines().map(|l| l.parse().unwrap()).collect();
    // greedy needs S R, S D and four moves to the unreachable-by-slide center
    assert!(actions.len() >= 3 && actions.len() <= 6, "{}", stdout);
    let score: i64 = stderr.trim().trim_start_matches("score ").parse().unwrap();
    assert_eq!(score, 4 + 2 * 5 * 4 - actions.len() as i64);
}

#[test]
fn run_sample_replays_to_reported_score() {
    let (stdout, stderr) = run(&[
        "--iterations",
        "100",
        "--seed",
        "7",
        "inputs/sample-20x20.txt",
    ]);

    let problem = "inputs/sample-20x20.txt".load_problem().unwrap();
    let mut state = problem.initial_state(1600);
    state.claim_reached();
    for line in stdout.lines() {
        let action: Action = line.parse().unwrap();
        state.apply(action).unwrap();
        state.claim_reached();
    }
    assert!(state.is_complete());
    assert!(state.action_cnt() <= 1600);
    assert_eq!(stderr, format!("score {}\n", state.score()));
}

#[test]
fn run_is_reproducible_with_iterations() {
    let args = ["-i", "80", "-s", "3", "inputs/sample-20x20.txt"];
    let (first, _) = run(&args);
    let (second, _) = run(&args);
    assert_eq!(first, second);
}

#[test]
fn run_with_stats_and_drawing() {
    let (stdout, stderr) = run(&[
        "--iterations",
        "10",
        "--rounds",
        "2",
        "--stats",
        "--draw",
        "inputs/small-5x5.txt",
    ]);
    assert!(!stdout.is_empty());
    assert!(stderr.contains("Greedy score: "));
    assert!(stderr.contains("10 attempts"));
    assert!(stderr.contains('@'));
    assert!(stderr.lines().last().unwrap().starts_with("score "));
}

#[test]
fn run_bad_input() {
    Command::cargo_bin("rink-solver")
        .unwrap()
        .write_stdin("5 4\n0 0\n9 9\n")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_conflicting_budgets() {
    Command::cargo_bin("rink-solver")
        .unwrap()
        .args(&["--iterations", "10", "--time-limits", "0.1", "inputs/small-5x5.txt"])
        .assert()
        .failure()
        .stdout("");
}
