use crate::search::{Plan, SlidingPuzzle, State};

/// Replay `plan` from `initial_state` and check that every move is legal and
/// that the last state is `goal_state`.
pub fn validate(
    plan: &Plan,
    puzzle: &mut SlidingPuzzle,
    initial_state: &State,
    goal_state: &State,
) -> Result<(), String> {
    puzzle
        .check_state(initial_state)
        .map_err(|e| e.to_string())?;
    let mut cur_state = initial_state.clone();
    for (step, &action) in plan.iter().enumerate() {
        cur_state = puzzle
            .apply_move(&cur_state, action)
            .map_err(|e| format!("Step {} is not applicable: {}", step, e))?;
    }

    if &cur_state != goal_state {
        return Err(format!(
            "Plan does not reach goal state, final state is:\n{}",
            cur_state
        ));
    }

    Ok(())
}
