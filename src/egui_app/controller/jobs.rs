use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::app_data::AppData;
use crate::egui_app::state::InsightRequest;
use crate::insight::{EDA_FALLBACK, InsightSource, YIELD_FALLBACK};

pub(crate) enum JobMessage {
    YieldInsight(InsightResult),
    EdaPerspective(InsightResult),
}

#[derive(Debug)]
pub(crate) struct InsightResult {
    pub(crate) generation: u64,
    pub(crate) text: String,
}

/// Worker threads for boundary calls and the channel they report on.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    last_generation: u64,
    in_flight: usize,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            last_generation: 0,
            in_flight: 0,
        }
    }

    /// Next request generation. Never reused within a session.
    pub(super) fn next_generation(&mut self) -> u64 {
        self.last_generation += 1;
        self.last_generation
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(super) fn try_recv_message(&mut self) -> Result<JobMessage, TryRecvError> {
        let message = self.message_rx.try_recv()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Ok(message)
    }

    pub(super) fn begin_yield_insight(
        &mut self,
        insights: Arc<dyn InsightSource>,
        request: InsightRequest,
    ) {
        self.in_flight += 1;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let text = panic::catch_unwind(AssertUnwindSafe(|| {
                insights.yield_insight(&request.form)
            }))
            .unwrap_or_else(|_| {
                tracing::error!("Insight worker panicked; using fallback text");
                YIELD_FALLBACK.to_string()
            });
            let _ = tx.send(JobMessage::YieldInsight(InsightResult {
                generation: request.generation,
                text,
            }));
        });
    }

    pub(super) fn begin_eda_perspective(
        &mut self,
        insights: Arc<dyn InsightSource>,
        data: Arc<AppData>,
        generation: u64,
    ) {
        self.in_flight += 1;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let text = panic::catch_unwind(AssertUnwindSafe(|| {
                insights.eda_perspective(&data.records)
            }))
            .unwrap_or_else(|_| {
                tracing::error!("EDA worker panicked; using fallback text");
                EDA_FALLBACK.to_string()
            });
            let _ = tx.send(JobMessage::EdaPerspective(InsightResult { generation, text }));
        });
    }
}
