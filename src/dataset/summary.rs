use super::{CropRecord, CropType};

/// Mean yield for one crop variety.
#[derive(Clone, Debug, PartialEq)]
pub struct CropAverage {
    pub crop: CropType,
    pub count: usize,
    pub avg_yield: f64,
}

/// Aggregates shown on the dashboard, computed once from the shared dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub avg_yield: f64,
    pub avg_rainfall: f64,
    pub avg_temperature: f64,
    /// Per-crop averages in [`CropType::ALL`] order; absent crops are skipped.
    pub per_crop: Vec<CropAverage>,
}

impl DatasetSummary {
    pub fn from_records(records: &[CropRecord]) -> Self {
        let per_crop = CropType::ALL
            .iter()
            .filter_map(|&crop| {
                let (count, total) = records
                    .iter()
                    .filter(|record| record.crop == crop)
                    .fold((0usize, 0.0), |(count, total), record| {
                        (count + 1, total + record.yield_t_ha)
                    });
                (count > 0).then(|| CropAverage {
                    crop,
                    count,
                    avg_yield: total / count as f64,
                })
            })
            .collect();
        Self {
            record_count: records.len(),
            avg_yield: mean(records, |r| r.yield_t_ha),
            avg_rainfall: mean(records, |r| r.rainfall),
            avg_temperature: mean(records, |r| r.temperature),
            per_crop,
        }
    }

    /// Number of distinct crop varieties present.
    pub fn crop_varieties(&self) -> usize {
        self.per_crop.len()
    }

    /// Highest per-crop average, used to scale bar charts.
    pub fn max_crop_yield(&self) -> f64 {
        self.per_crop
            .iter()
            .map(|entry| entry.avg_yield)
            .fold(0.0, f64::max)
    }
}

fn mean(records: &[CropRecord], field: impl Fn(&CropRecord) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(field).sum::<f64>() / records.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Region, Season};

    fn record(id: u32, crop: CropType, yield_t_ha: f64, rainfall: f64) -> CropRecord {
        CropRecord {
            id,
            crop,
            season: Season::Rabi,
            state: Region::Punjab,
            area: 100.0,
            rainfall,
            temperature: 20.0,
            ph: 6.5,
            nitrogen: 80.0,
            phosphorus: 40.0,
            potassium: 40.0,
            yield_t_ha,
        }
    }

    #[test]
    fn averages_overall_and_per_crop() {
        let records = vec![
            record(1, CropType::Rice, 4.0, 1000.0),
            record(2, CropType::Rice, 6.0, 1400.0),
            record(3, CropType::Wheat, 3.0, 700.0),
        ];

        let summary = DatasetSummary::from_records(&records);

        assert_eq!(summary.record_count, 3);
        assert!((summary.avg_yield - 13.0 / 3.0).abs() < 1e-12);
        assert!((summary.avg_rainfall - 1033.333_333_333_333_3).abs() < 1e-9);
        assert_eq!(summary.crop_varieties(), 2);
        assert_eq!(
            summary.per_crop,
            vec![
                CropAverage {
                    crop: CropType::Rice,
                    count: 2,
                    avg_yield: 5.0
                },
                CropAverage {
                    crop: CropType::Wheat,
                    count: 1,
                    avg_yield: 3.0
                },
            ]
        );
        assert_eq!(summary.max_crop_yield(), 5.0);
    }

    #[test]
    fn empty_dataset_is_all_zero() {
        let summary = DatasetSummary::from_records(&[]);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.avg_yield, 0.0);
        assert!(summary.per_crop.is_empty());
        assert_eq!(summary.max_crop_yield(), 0.0);
    }
}
