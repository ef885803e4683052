//! Illustrative yield formula behind the predictor form.
//!
//! Inputs are not range-checked: negative rainfall or a pH outside `[0, 14]`
//! produce the arithmetic result.

use serde::{Deserialize, Serialize};

use crate::dataset::{CropType, Region, Season};

/// Crop that gets the higher base yield.
pub const HIGH_BASE_CROP: CropType = CropType::Rice;
/// Base yield (T/Ha) for [`HIGH_BASE_CROP`].
pub const BASE_YIELD_HIGH: f64 = 4.5;
/// Base yield (T/Ha) for every other crop.
pub const BASE_YIELD_DEFAULT: f64 = 3.2;
pub const RAINFALL_DIVISOR: f64 = 1000.0;
pub const TEMPERATURE_DIVISOR: f64 = 25.0;
pub const REFERENCE_PH: f64 = 6.5;

/// Field values of the predictor form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub crop: CropType,
    pub season: Season,
    pub state: Region,
    pub rainfall: f64,
    pub temperature: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            crop: CropType::Rice,
            season: Season::Kharif,
            state: Region::Punjab,
            rainfall: 1200.0,
            temperature: 28.0,
            ph: 6.5,
            nitrogen: 80.0,
            phosphorus: 40.0,
            potassium: 40.0,
        }
    }
}

/// Estimate for the current form values.
pub fn estimate_yield(form: &PredictionForm) -> f64 {
    estimate(
        form.crop,
        form.season,
        form.state,
        form.rainfall,
        form.temperature,
        form.ph,
        form.nitrogen,
        form.phosphorus,
        form.potassium,
    )
}

/// `base(crop) * (rainfall / 1000) * (temperature / 25) * (ph / 6.5)`.
///
/// Season, state and NPK are accepted for parity with the form but do not
/// enter the formula.
#[allow(clippy::too_many_arguments)]
pub fn estimate(
    crop: CropType,
    _season: Season,
    _state: Region,
    rainfall: f64,
    temperature: f64,
    ph: f64,
    _nitrogen: f64,
    _phosphorus: f64,
    _potassium: f64,
) -> f64 {
    let base = if crop == HIGH_BASE_CROP {
        BASE_YIELD_HIGH
    } else {
        BASE_YIELD_DEFAULT
    };
    let weather = (rainfall / RAINFALL_DIVISOR) * (temperature / TEMPERATURE_DIVISOR);
    base * weather * (ph / REFERENCE_PH)
}
