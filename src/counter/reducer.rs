//! Reducer for the counter feature.

use crate::mvi::Reducer;

use super::action::CounterAction;
use super::effect::{CancelId, CounterEffect};
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Pure function: fetches and timers are only described through
/// [`CounterEffect`] and executed by the effect runtime.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Effect = CounterEffect;

    fn reduce(mut state: Self::State, action: Self::Action) -> (Self::State, Self::Effect) {
        match action {
            CounterAction::Decrement => {
                state.count = state.count.saturating_sub(1);
                count_changed(state)
            }

            CounterAction::Increment | CounterAction::TimerTick => {
                state.count = state.count.saturating_add(1);
                count_changed(state)
            }

            CounterAction::RequestFact => {
                state.fact = None;
                state.is_loading = true;
                let number = state.count;
                (state, CounterEffect::FetchFact { number })
            }

            CounterAction::FactReceived(text) => {
                state.fact = Some(text);
                state.is_loading = false;
                (state, CounterEffect::None)
            }

            // Failure is not surfaced in state, only the loading flag is released
            CounterAction::FactFailed(_) => {
                state.is_loading = false;
                (state, CounterEffect::None)
            }

            CounterAction::ToggleTimer => {
                state.is_timer_on = !state.is_timer_on;
                let effect = if state.is_timer_on {
                    CounterEffect::StartTimer {
                        id: CancelId::Timer,
                    }
                } else {
                    CounterEffect::Cancel {
                        id: CancelId::Timer,
                    }
                };
                (state, effect)
            }
        }
    }
}

/// A fact only describes the count it was requested for, so a pending
/// lookup is abandoned once the count moves.
fn count_changed(mut state: CounterState) -> (CounterState, CounterEffect) {
    state.fact = None;
    if !state.is_loading {
        return (state, CounterEffect::None);
    }
    state.is_loading = false;
    (
        state,
        CounterEffect::Cancel {
            id: CancelId::FactRequest,
        },
    )
}
