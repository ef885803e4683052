use crate::dataset::{CropType, Region, Season};
use crate::estimate::{PredictionForm, estimate_yield};

/// One typed edit of a predictor form field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormEdit {
    Crop(CropType),
    Season(Season),
    State(Region),
    Rainfall(f64),
    Temperature(f64),
    Ph(f64),
    Nitrogen(f64),
    Phosphorus(f64),
    Potassium(f64),
}

impl FormEdit {
    /// Write the value into its field. Values are stored unvalidated.
    pub fn apply(self, form: &mut PredictionForm) {
        match self {
            Self::Crop(value) => form.crop = value,
            Self::Season(value) => form.season = value,
            Self::State(value) => form.state = value,
            Self::Rainfall(value) => form.rainfall = value,
            Self::Temperature(value) => form.temperature = value,
            Self::Ph(value) => form.ph = value,
            Self::Nitrogen(value) => form.nitrogen = value,
            Self::Phosphorus(value) => form.phosphorus = value,
            Self::Potassium(value) => form.potassium = value,
        }
    }
}

/// Outcome of the latest submission.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    /// Tonnes per hectare from the local formula.
    pub estimate: f64,
    /// Commentary from the insight service, once it settles.
    pub advisory: Option<String>,
}

/// Predictor view state. Dropped and rebuilt when the view is left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictorState {
    pub form: PredictionForm,
    pub loading: bool,
    pub result: Option<PredictionResult>,
    /// Generation of the insight request this view still waits for.
    pub pending: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PredictorAction {
    Edit(FormEdit),
    /// Compute the estimate and start waiting for `generation`.
    Submit { generation: u64 },
    /// The insight request tagged `generation` finished.
    InsightSettled { generation: u64, text: String },
}

/// Work the controller must start after a submission.
#[derive(Clone, Debug, PartialEq)]
pub struct InsightRequest {
    pub generation: u64,
    pub form: PredictionForm,
}

pub fn reduce(
    mut state: PredictorState,
    action: PredictorAction,
) -> (PredictorState, Option<InsightRequest>) {
    match action {
        PredictorAction::Edit(edit) => {
            edit.apply(&mut state.form);
            (state, None)
        }
        PredictorAction::Submit { generation } => {
            state.result = Some(PredictionResult {
                estimate: estimate_yield(&state.form),
                advisory: None,
            });
            state.loading = true;
            state.pending = Some(generation);
            let request = InsightRequest {
                generation,
                form: state.form.clone(),
            };
            (state, Some(request))
        }
        PredictorAction::InsightSettled { generation, text } => {
            if state.pending != Some(generation) {
                return (state, None);
            }
            state.pending = None;
            state.loading = false;
            if let Some(result) = state.result.as_mut() {
                result.advisory = Some(text);
            }
            (state, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(generation: u64) -> PredictorState {
        reduce(
            PredictorState::default(),
            PredictorAction::Submit { generation },
        )
        .0
    }

    #[test]
    fn each_edit_touches_only_its_field() {
        let mut form = PredictionForm::default();
        FormEdit::Crop(CropType::Wheat).apply(&mut form);
        FormEdit::Season(Season::Rabi).apply(&mut form);
        FormEdit::State(Region::Haryana).apply(&mut form);
        FormEdit::Rainfall(640.0).apply(&mut form);
        FormEdit::Temperature(17.5).apply(&mut form);
        FormEdit::Ph(7.2).apply(&mut form);
        FormEdit::Nitrogen(101.0).apply(&mut form);
        FormEdit::Phosphorus(33.0).apply(&mut form);
        FormEdit::Potassium(61.0).apply(&mut form);
        assert_eq!(
            form,
            PredictionForm {
                crop: CropType::Wheat,
                season: Season::Rabi,
                state: Region::Haryana,
                rainfall: 640.0,
                temperature: 17.5,
                ph: 7.2,
                nitrogen: 101.0,
                phosphorus: 33.0,
                potassium: 61.0,
            }
        );
    }

    #[test]
    fn submit_shows_estimate_immediately_and_requests_insight() {
        let (state, request) = reduce(
            PredictorState::default(),
            PredictorAction::Submit { generation: 4 },
        );
        assert!(state.loading);
        assert_eq!(state.pending, Some(4));
        let result = state.result.unwrap();
        assert!((result.estimate - 6.048).abs() < 1e-9);
        assert_eq!(result.advisory, None);
        assert_eq!(
            request,
            Some(InsightRequest {
                generation: 4,
                form: PredictionForm::default(),
            })
        );
    }

    #[test]
    fn matching_settle_attaches_advisory() {
        let (state, request) = reduce(
            submitted(1),
            PredictorAction::InsightSettled {
                generation: 1,
                text: "High potential".to_string(),
            },
        );
        assert!(request.is_none());
        assert!(!state.loading);
        assert_eq!(state.pending, None);
        assert_eq!(
            state.result.unwrap().advisory.as_deref(),
            Some("High potential")
        );
    }

    #[test]
    fn stale_settle_is_ignored() {
        let first = submitted(1);
        let (second, _) = reduce(first, PredictorAction::Submit { generation: 2 });
        let (after_stale, _) = reduce(
            second.clone(),
            PredictorAction::InsightSettled {
                generation: 1,
                text: "old".to_string(),
            },
        );
        assert_eq!(after_stale, second);
        assert!(after_stale.loading);
    }

    #[test]
    fn settle_on_fresh_view_is_ignored() {
        let (state, _) = reduce(
            PredictorState::default(),
            PredictorAction::InsightSettled {
                generation: 1,
                text: "late".to_string(),
            },
        );
        assert_eq!(state, PredictorState::default());
    }

    #[test]
    fn resubmit_replaces_prior_result() {
        let (settled, _) = reduce(
            submitted(1),
            PredictorAction::InsightSettled {
                generation: 1,
                text: "first".to_string(),
            },
        );
        let (edited, _) = reduce(
            settled,
            PredictorAction::Edit(FormEdit::Crop(CropType::Cotton)),
        );
        let (resubmitted, _) = reduce(edited, PredictorAction::Submit { generation: 2 });
        let result = resubmitted.result.unwrap();
        assert_eq!(result.advisory, None);
        assert!((result.estimate - 6.048 * 3.2 / 4.5).abs() < 1e-9);
    }

    #[test]
    fn fallback_text_keeps_estimate() {
        let (state, _) = reduce(
            submitted(3),
            PredictorAction::InsightSettled {
                generation: 3,
                text: crate::insight::YIELD_FALLBACK.to_string(),
            },
        );
        let result = state.result.unwrap();
        assert!((result.estimate - 6.048).abs() < 1e-9);
        assert_eq!(result.advisory.as_deref(), Some(crate::insight::YIELD_FALLBACK));
    }
}
