use crate::state::{RinkErr, State};

/// Every intermediate state of `state`'s solution, starting with the pristine rink.
///
/// Always one entry longer than the action log. Destinations the agent stands on
/// are claimed after each step the same way the solver does it so the replayed
/// visit counts match the original.
pub fn replay(state: &State) -> Result<Vec<State>, RinkErr> {
    let mut cur = state.pristine();
    cur.claim_reached();

    let mut checkpoints = Vec::with_capacity(state.action_cnt() + 1);
    checkpoints.push(cur.clone());
    for &action in state.actions() {
        cur.apply(action)?;
        cur.claim_reached();
        checkpoints.push(cur.clone());
    }
    Ok(checkpoints)
}
