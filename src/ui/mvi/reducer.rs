use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// `reduce` takes ownership of the previous state and returns the next one
/// without side effects, so transitions can be tested without a terminal.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
