use std::time::{Duration, Instant};

use crate::models::{DEFAULT_MODEL_INDEX, MODEL_COMPARISON, ModelMetric};

/// How long the auto-tune indicator stays on.
pub const TUNING_DURATION: Duration = Duration::from_secs(2);

/// Model Lab view state. Dropped and rebuilt when the view is left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelLabState {
    /// Index into [`MODEL_COMPARISON`].
    pub selected: usize,
    /// Set while the auto-tune animation runs.
    pub tuning_until: Option<Instant>,
}

impl Default for ModelLabState {
    fn default() -> Self {
        Self {
            selected: DEFAULT_MODEL_INDEX,
            tuning_until: None,
        }
    }
}

impl ModelLabState {
    pub fn selected_model(&self) -> &'static ModelMetric {
        &MODEL_COMPARISON[self.selected.min(MODEL_COMPARISON.len() - 1)]
    }

    pub fn is_tuning(&self) -> bool {
        self.tuning_until.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelLabAction {
    /// Select a model; out-of-range indices are ignored.
    Select(usize),
    StartTuning { now: Instant },
    /// Clear the tuning flag once its deadline passed.
    Tick { now: Instant },
}

pub fn reduce(state: ModelLabState, action: ModelLabAction) -> ModelLabState {
    match action {
        ModelLabAction::Select(index) if index < MODEL_COMPARISON.len() => ModelLabState {
            selected: index,
            ..state
        },
        ModelLabAction::Select(_) => state,
        ModelLabAction::StartTuning { now } => ModelLabState {
            tuning_until: Some(now + TUNING_DURATION),
            ..state
        },
        ModelLabAction::Tick { now } => match state.tuning_until {
            Some(deadline) if now >= deadline => ModelLabState {
                tuning_until: None,
                ..state
            },
            _ => state,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_random_forest() {
        assert_eq!(ModelLabState::default().selected_model().name, "Random Forest");
    }

    #[test]
    fn select_ignores_out_of_range() {
        let state = reduce(ModelLabState::default(), ModelLabAction::Select(0));
        assert_eq!(state.selected_model().name, "Linear Regression");
        let state = reduce(state, ModelLabAction::Select(7));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn tuning_clears_after_deadline() {
        let now = Instant::now();
        let state = reduce(ModelLabState::default(), ModelLabAction::StartTuning { now });
        assert!(state.is_tuning());

        let early = reduce(
            state.clone(),
            ModelLabAction::Tick {
                now: now + Duration::from_millis(1_999),
            },
        );
        assert!(early.is_tuning());

        let done = reduce(
            state,
            ModelLabAction::Tick {
                now: now + TUNING_DURATION,
            },
        );
        assert!(!done.is_tuning());
    }
}
