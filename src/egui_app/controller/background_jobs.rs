use std::sync::mpsc::TryRecvError;

use super::jobs::{InsightResult, JobMessage};
use super::*;
use crate::insight::{EDA_FALLBACK, YIELD_FALLBACK};

impl EguiController {
    /// Apply every finished job. Replies for a superseded generation are dropped.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::YieldInsight(result) => self.handle_yield_insight(result),
                JobMessage::EdaPerspective(result) => self.handle_eda_perspective(result),
            }
        }
    }

    fn handle_yield_insight(&mut self, result: InsightResult) {
        if self.ui.predictor.pending != Some(result.generation) {
            tracing::debug!(
                generation = result.generation,
                "Discarding stale yield insight"
            );
            return;
        }
        let fallback = result.text == YIELD_FALLBACK;
        self.reduce_predictor(PredictorAction::InsightSettled {
            generation: result.generation,
            text: result.text,
        });
        if fallback {
            self.set_status("Analysis unavailable", StatusTone::Warning);
        } else {
            self.set_status("Analysis ready", StatusTone::Info);
        }
    }

    fn handle_eda_perspective(&mut self, result: InsightResult) {
        if self.ui.eda.pending != Some(result.generation) {
            tracing::debug!(
                generation = result.generation,
                "Discarding stale EDA perspective"
            );
            return;
        }
        let fallback = result.text == EDA_FALLBACK;
        let state = std::mem::take(&mut self.ui.eda);
        self.ui.eda = eda::reduce(
            state,
            EdaAction::Settled {
                generation: result.generation,
                text: result.text,
            },
        );
        if fallback {
            self.set_status("EDA perspective unavailable", StatusTone::Warning);
        } else {
            self.set_status("EDA perspective ready", StatusTone::Info);
        }
    }
}
