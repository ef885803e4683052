//! Read-only data shared by every view for the lifetime of the process.

use std::sync::Arc;

use crate::config::DatasetSettings;
use crate::dataset::{self, CropRecord, DatasetSummary};

/// Generated dataset plus the aggregates derived from it.
#[derive(Debug)]
pub struct AppData {
    pub records: Vec<CropRecord>,
    pub summary: DatasetSummary,
}

impl AppData {
    /// Wrap already generated records.
    pub fn new(records: Vec<CropRecord>) -> Self {
        let summary = DatasetSummary::from_records(&records);
        Self { records, summary }
    }

    /// Generate the dataset once according to the config.
    pub fn generate(settings: &DatasetSettings) -> Arc<Self> {
        let records = dataset::generate_default(settings.record_count, settings.seed);
        tracing::info!(
            records = records.len(),
            seed = ?settings.seed,
            "Generated synthetic dataset"
        );
        Arc::new(Self::new(records))
    }
}
