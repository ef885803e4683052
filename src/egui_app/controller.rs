//! Owns the UI state and bridges the shared data, view reducers and
//! background insight requests.

mod background_jobs;
mod jobs;


use std::sync::Arc;
use std::time::Instant;

use crate::app_data::AppData;
use crate::dataset::{CropRecord, DATASET_PREVIEW_LIMIT, filter_records};
use crate::egui_app::state::*;
use crate::insight::InsightSource;

pub use crate::egui_app::ui::style::StatusTone;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    data: Arc<AppData>,
    insights: Arc<dyn InsightSource>,
    jobs: jobs::ControllerJobs,
}

impl EguiController {
    pub fn new(data: Arc<AppData>, insights: Arc<dyn InsightSource>) -> Self {
        Self {
            ui: UiState::default(),
            data,
            insights,
            jobs: jobs::ControllerJobs::new(),
        }
    }

    /// Shared read-only dataset.
    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Switch sections. Leaving a section drops its view state.
    pub fn navigate(&mut self, section: AppSection) {
        let previous = self.ui.view.active;
        let state = std::mem::take(&mut self.ui.view);
        self.ui.view = view::reduce(state, NavAction::Navigate(section));
        if previous != section {
            tracing::debug!(from = ?previous, to = ?section, "Navigated");
            self.unmount(previous);
        }
    }

    /// Replace the Dataset Explorer search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let state = std::mem::take(&mut self.ui.view);
        self.ui.view = view::reduce(state, NavAction::Search(text.into()));
    }

    /// Rows the Dataset Explorer shows for the current search.
    pub fn dataset_preview(&self) -> Vec<&CropRecord> {
        filter_records(
            &self.data.records,
            &self.ui.view.search,
            DATASET_PREVIEW_LIMIT,
        )
    }

    pub fn edit_form(&mut self, edit: FormEdit) {
        self.reduce_predictor(PredictorAction::Edit(edit));
    }

    /// Compute the estimate now and ask the insight service in the background.
    pub fn submit_prediction(&mut self) {
        let generation = self.jobs.next_generation();
        let Some(request) = self.reduce_predictor(PredictorAction::Submit { generation }) else {
            return;
        };
        let estimate = self
            .ui
            .predictor
            .result
            .as_ref()
            .map(|result| result.estimate)
            .unwrap_or_default();
        tracing::info!(
            generation,
            crop = request.form.crop.label(),
            estimate,
            "Prediction submitted"
        );
        self.set_status(
            format!("Estimated {estimate:.2} T/Ha; requesting analysis"),
            StatusTone::Busy,
        );
        self.jobs
            .begin_yield_insight(Arc::clone(&self.insights), request);
    }

    pub fn select_model(&mut self, index: usize) {
        self.reduce_model_lab(ModelLabAction::Select(index));
    }

    pub fn start_tuning(&mut self) {
        self.reduce_model_lab(ModelLabAction::StartTuning {
            now: Instant::now(),
        });
        self.set_status("Tuning hyperparameters", StatusTone::Busy);
    }

    /// Ask the insight service for quick takeaways on the dataset.
    pub fn request_eda_perspective(&mut self) {
        let generation = self.jobs.next_generation();
        let state = std::mem::take(&mut self.ui.eda);
        self.ui.eda = eda::reduce(state, EdaAction::Request { generation });
        tracing::info!(generation, "EDA perspective requested");
        self.set_status("Requesting EDA perspective", StatusTone::Busy);
        self.jobs
            .begin_eda_perspective(Arc::clone(&self.insights), Arc::clone(&self.data), generation);
    }

    /// Per-frame housekeeping: drain jobs and expire timers.
    pub fn tick(&mut self, now: Instant) {
        self.poll_background_jobs();
        let was_tuning = self.ui.model_lab.is_tuning();
        self.reduce_model_lab(ModelLabAction::Tick { now });
        if was_tuning && !self.ui.model_lab.is_tuning() {
            self.set_status("Tuning complete", StatusTone::Info);
        }
    }

    /// True while something will change without user input.
    pub fn has_pending_work(&self) -> bool {
        self.jobs.in_flight() > 0 || self.ui.model_lab.is_tuning()
    }

    fn unmount(&mut self, section: AppSection) {
        let was_busy = match section {
            AppSection::Predict => std::mem::take(&mut self.ui.predictor).pending.is_some(),
            AppSection::Models => std::mem::take(&mut self.ui.model_lab).is_tuning(),
            AppSection::Eda => std::mem::take(&mut self.ui.eda).pending.is_some(),
            AppSection::Dashboard | AppSection::Dataset | AppSection::Roadmap => false,
        };
        if was_busy {
            self.set_status(
                format!("Left {}; pending work discarded", section.label()),
                StatusTone::Idle,
            );
        }
    }

    fn reduce_predictor(&mut self, action: PredictorAction) -> Option<InsightRequest> {
        let state = std::mem::take(&mut self.ui.predictor);
        let (state, request) = predictor::reduce(state, action);
        self.ui.predictor = state;
        request
    }

    fn reduce_model_lab(&mut self, action: ModelLabAction) {
        let state = std::mem::take(&mut self.ui.model_lab);
        self.ui.model_lab = model_lab::reduce(state, action);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
