// src/schedule/reconstrain.rs

use tracing::debug;

use crate::errors::ConstraintError;
use crate::model::ConstraintSet;

/// Constraint set for the tasks left after pinning `pinned_task` at the
/// clock hour `pinned_hour`.
///
/// Constraints leaving a node before the pin are dropped, the rest are
/// renumbered so the pinned task becomes the anchor `0` (bounds untouched),
/// and a new window `(0, N - p, [0, end_hour - pinned_hour])` goes first.
/// Re-solve the result with `num_tasks - pinned_task` tasks and
/// `pinned_hour` as the day start.
///
/// Fails with [`ConstraintError::InvalidRange`] when `pinned_hour` lies past
/// `end_hour`.
pub fn reconstrain(
    constraints: &ConstraintSet,
    pinned_task: usize,
    num_tasks: usize,
    pinned_hour: i64,
    end_hour: i64,
) -> Result<ConstraintSet, ConstraintError> {
    let remaining_tasks = num_tasks.saturating_sub(pinned_task);
    let remaining_hours = end_hour - pinned_hour;

    let window = ConstraintSet::window_constraint(remaining_tasks, remaining_hours)?;

    let reduced: ConstraintSet = std::iter::once(window)
        .chain(
            constraints
                .iter()
                .filter(|c| c.from() >= pinned_task && c.to() >= pinned_task)
                .map(|c| c.shifted_down(pinned_task)),
        )
        .collect();

    debug!(
        pinned_task,
        pinned_hour,
        remaining_tasks,
        remaining_hours,
        kept = reduced.len() - 1,
        dropped = constraints.len() + 1 - reduced.len(),
        "re-constrained remaining tasks"
    );

    Ok(reduced)
}
