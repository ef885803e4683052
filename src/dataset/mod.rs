//! Synthetic crop-yield records and the read-only helpers views use on them.

pub mod filter;
pub mod generator;
pub mod summary;

use serde::{Deserialize, Serialize};

pub use filter::{DATASET_PREVIEW_LIMIT, filter_records, matches_search};
pub use generator::{generate, generate_default};
pub use summary::{CropAverage, DatasetSummary};

/// Crop varieties present in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CropType {
    Rice,
    Wheat,
    Maize,
    Cotton,
    Sugarcane,
    Pulses,
}

impl CropType {
    pub const ALL: [Self; 6] = [
        Self::Rice,
        Self::Wheat,
        Self::Maize,
        Self::Cotton,
        Self::Sugarcane,
        Self::Pulses,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rice => "Rice",
            Self::Wheat => "Wheat",
            Self::Maize => "Maize",
            Self::Cotton => "Cotton",
            Self::Sugarcane => "Sugarcane",
            Self::Pulses => "Pulses",
        }
    }
}

/// Indian cropping seasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
    WholeYear,
}

impl Season {
    pub const ALL: [Self; 4] = [Self::Kharif, Self::Rabi, Self::Summer, Self::WholeYear];

    pub fn label(self) -> &'static str {
        match self {
            Self::Kharif => "Kharif",
            Self::Rabi => "Rabi",
            Self::Summer => "Summer",
            Self::WholeYear => "Whole Year",
        }
    }
}

/// State the record was observed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Punjab,
    Haryana,
    UttarPradesh,
    Maharashtra,
    Karnataka,
    TamilNadu,
}

impl Region {
    pub const ALL: [Self; 6] = [
        Self::Punjab,
        Self::Haryana,
        Self::UttarPradesh,
        Self::Maharashtra,
        Self::Karnataka,
        Self::TamilNadu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Punjab => "Punjab",
            Self::Haryana => "Haryana",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Maharashtra => "Maharashtra",
            Self::Karnataka => "Karnataka",
            Self::TamilNadu => "Tamil Nadu",
        }
    }
}

/// One synthetic observation. Never mutated after generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Sequential id starting at 1.
    pub id: u32,
    pub crop: CropType,
    pub season: Season,
    pub state: Region,
    /// Hectares.
    pub area: f64,
    /// Millimetres.
    pub rainfall: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    /// Tonnes per hectare.
    pub yield_t_ha: f64,
}

/// Half-open interval `[min, max)` a generated value is drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}
