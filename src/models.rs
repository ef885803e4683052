//! Fixed model-comparison metrics shown in the Model Lab.
//!
//! The numbers are illustrative constants; nothing here is trained.

/// Error measures and goodness-of-fit for one displayed model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelMetric {
    pub name: &'static str,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
}

pub const MODEL_COMPARISON: [ModelMetric; 3] = [
    ModelMetric {
        name: "Linear Regression",
        rmse: 0.85,
        mae: 0.62,
        r2: 0.78,
    },
    ModelMetric {
        name: "Decision Tree",
        rmse: 0.54,
        mae: 0.38,
        r2: 0.89,
    },
    ModelMetric {
        name: "Random Forest",
        rmse: 0.32,
        mae: 0.21,
        r2: 0.95,
    },
];

/// Index of the model the lab selects when it opens.
pub const DEFAULT_MODEL_INDEX: usize = 2;

/// Axis labels of the radar chart, matching [`radar_axes`] order.
pub const RADAR_AXES: [&str; 4] = ["RMSE", "MAE", "R-Squared", "Efficiency"];

/// Radar values in `[0, 1]`; error measures are inverted so larger is better.
pub fn radar_axes(metric: &ModelMetric) -> [f64; 4] {
    [
        1.0 - metric.rmse,
        1.0 - metric.mae,
        metric.r2,
        metric.r2 * 0.95,
    ]
}

/// The entry with the highest goodness-of-fit.
pub fn best_model() -> &'static ModelMetric {
    let mut best = &MODEL_COMPARISON[0];
    for metric in &MODEL_COMPARISON[1..] {
        if metric.r2 > best.r2 {
            best = metric;
        }
    }
    best
}
