/// Fixed feature-importance matrix shown on the EDA page.
pub const FEATURE_IMPORTANCE: [(&str, f32); 4] = [
    ("Rainfall", 0.85),
    ("Soil pH", 0.72),
    ("Nitrogen (N)", 0.64),
    ("Temperature", 0.45),
];

/// EDA view state: the generated perspective and its request bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdaState {
    pub perspective: Option<String>,
    pub loading: bool,
    pub pending: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdaAction {
    Request { generation: u64 },
    Settled { generation: u64, text: String },
}

pub fn reduce(state: EdaState, action: EdaAction) -> EdaState {
    match action {
        EdaAction::Request { generation } => EdaState {
            loading: true,
            pending: Some(generation),
            ..state
        },
        EdaAction::Settled { generation, text } if state.pending == Some(generation) => EdaState {
            perspective: Some(text),
            loading: false,
            pending: None,
        },
        EdaAction::Settled { .. } => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_keeps_previous_perspective_while_loading() {
        let state = EdaState {
            perspective: Some("old".to_string()),
            ..EdaState::default()
        };
        let state = reduce(state, EdaAction::Request { generation: 5 });
        assert!(state.loading);
        assert_eq!(state.perspective.as_deref(), Some("old"));
    }

    #[test]
    fn only_pending_generation_settles() {
        let state = reduce(EdaState::default(), EdaAction::Request { generation: 2 });
        let ignored = reduce(
            state.clone(),
            EdaAction::Settled {
                generation: 1,
                text: "stale".to_string(),
            },
        );
        assert_eq!(ignored, state);

        let settled = reduce(
            state,
            EdaAction::Settled {
                generation: 2,
                text: "fresh".to_string(),
            },
        );
        assert_eq!(settled.perspective.as_deref(), Some("fresh"));
        assert!(!settled.loading);
    }
}
