//! Plain state types for the egui UI.
//!
//! Each view owns one struct, changed only through a pure `reduce` function so
//! transitions can be tested without rendering.

pub mod eda;
pub mod model_lab;
pub mod predictor;
pub mod status;
pub mod view;

pub use eda::{EdaAction, EdaState};
pub use model_lab::{ModelLabAction, ModelLabState};
pub use predictor::{FormEdit, InsightRequest, PredictionResult, PredictorAction, PredictorState};
pub use status::StatusBarState;
pub use view::{AppSection, NavAction, ViewState};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view: ViewState,
    pub predictor: PredictorState,
    pub model_lab: ModelLabState,
    pub eda: EdaState,
    pub status: StatusBarState,
}
