use roster_client::RequestError;
use roster_runtime::{ActionOutcome, SkipReason};

use crate::presentation::view_models::{
    ActionKind, ActionResultViewModel, ActionState, CommandResultViewModel, StatusBadge,
};

/// `status` is the message the coordinator left for the user, if any.
pub fn present_action(
    action: ActionKind,
    outcome: &ActionOutcome,
    status: Option<StatusBadge>,
) -> CommandResultViewModel<ActionResultViewModel> {
    let (state, error) = match outcome {
        ActionOutcome::Succeeded => (ActionState::Succeeded, None),
        ActionOutcome::Failed(err) => (ActionState::Failed, Some(err)),
        ActionOutcome::Skipped(SkipReason::NotConfirmed) => (ActionState::Declined, None),
        ActionOutcome::Skipped(_) => (ActionState::Skipped, None),
    };

    let content = ActionResultViewModel {
        action,
        state,
        error: error.map(|err| err.message().to_string()),
        http_status: error.and_then(RequestError::status),
    };

    let badge = match (state, status) {
        (_, Some(badge)) => badge,
        (ActionState::Declined, None) => StatusBadge::info("Cancelled. Nothing was sent."),
        (ActionState::Succeeded, None) => StatusBadge::success("Done."),
        (ActionState::Failed | ActionState::Skipped, None) => {
            StatusBadge::error("Request was not completed.")
        }
    };

    CommandResultViewModel::new(content).with_badge(badge)
}
