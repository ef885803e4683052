//! Randomized record generation.
//!
//! Categorical fields are drawn uniformly. Temperature and rainfall start from
//! a per-crop baseline and get symmetric uniform noise; the remaining numeric
//! fields are drawn uniformly from fixed ranges.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{CropRecord, CropType, FieldRange, Region, Season};

pub const AREA: FieldRange = FieldRange::new(50.0, 500.0);
pub const PH: FieldRange = FieldRange::new(5.5, 8.0);
pub const NITROGEN: FieldRange = FieldRange::new(60.0, 120.0);
pub const PHOSPHORUS: FieldRange = FieldRange::new(30.0, 70.0);
pub const POTASSIUM: FieldRange = FieldRange::new(30.0, 70.0);
pub const YIELD: FieldRange = FieldRange::new(2.5, 8.0);

/// Half-width of the noise added to the temperature baseline.
pub const TEMPERATURE_NOISE: f64 = 5.0;
/// Half-width of the noise added to the rainfall baseline.
pub const RAINFALL_NOISE: f64 = 200.0;

/// Temperature baseline in °C for a crop.
pub fn temperature_baseline(crop: CropType) -> f64 {
    match crop {
        CropType::Rice => 25.0,
        CropType::Wheat => 18.0,
        _ => 22.0,
    }
}

/// Rainfall baseline in mm for a crop.
pub fn rainfall_baseline(crop: CropType) -> f64 {
    match crop {
        CropType::Rice => 1200.0,
        CropType::Sugarcane => 1500.0,
        _ => 800.0,
    }
}

/// Range a crop's temperature falls in.
pub fn temperature_range(crop: CropType) -> FieldRange {
    let base = temperature_baseline(crop);
    FieldRange::new(base - TEMPERATURE_NOISE, base + TEMPERATURE_NOISE)
}

/// Range a crop's rainfall falls in.
pub fn rainfall_range(crop: CropType) -> FieldRange {
    let base = rainfall_baseline(crop);
    FieldRange::new(base - RAINFALL_NOISE, base + RAINFALL_NOISE)
}

/// Produce exactly `count` records with ids `1..=count`.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<CropRecord> {
    (1..=count)
        .map(|id| {
            let crop = pick(&CropType::ALL, rng);
            CropRecord {
                id: id as u32,
                crop,
                season: pick(&Season::ALL, rng),
                state: pick(&Region::ALL, rng),
                area: sample(AREA, rng),
                rainfall: sample(rainfall_range(crop), rng),
                temperature: sample(temperature_range(crop), rng),
                ph: sample(PH, rng),
                nitrogen: sample(NITROGEN, rng),
                phosphorus: sample(PHOSPHORUS, rng),
                potassium: sample(POTASSIUM, rng),
                yield_t_ha: sample(YIELD, rng),
            }
        })
        .collect()
}

/// Generate with a seeded RNG when `seed` is set, otherwise from the thread RNG.
pub fn generate_default(count: usize, seed: Option<u64>) -> Vec<CropRecord> {
    match seed {
        Some(seed) => generate(count, &mut StdRng::seed_from_u64(seed)),
        None => generate(count, &mut rand::rng()),
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(options: &[T], rng: &mut R) -> T {
    options[rng.random_range(0..options.len())]
}

fn sample<R: Rng + ?Sized>(range: FieldRange, rng: &mut R) -> f64 {
    range.min + rng.random::<f64>() * (range.max - range.min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize, seed: u64) -> Vec<CropRecord> {
        generate(count, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn returns_exactly_count_records_with_sequential_ids() {
        for count in [0, 1, 17, 1_000] {
            let records = seeded(count, 3);
            assert_eq!(records.len(), count);
            for (index, record) in records.iter().enumerate() {
                assert_eq!(record.id as usize, index + 1);
            }
        }
    }

    #[test]
    fn numeric_fields_stay_in_documented_ranges() {
        for record in seeded(2_000, 11) {
            assert!(AREA.contains(record.area), "area {}", record.area);
            assert!(PH.contains(record.ph), "ph {}", record.ph);
            assert!(NITROGEN.contains(record.nitrogen));
            assert!(PHOSPHORUS.contains(record.phosphorus));
            assert!(POTASSIUM.contains(record.potassium));
            assert!(YIELD.contains(record.yield_t_ha));
            assert!(temperature_range(record.crop).contains(record.temperature));
            assert!(rainfall_range(record.crop).contains(record.rainfall));
        }
    }

    #[test]
    fn baselines_differ_by_crop() {
        assert_eq!(temperature_baseline(CropType::Rice), 25.0);
        assert_eq!(temperature_baseline(CropType::Wheat), 18.0);
        assert_eq!(temperature_baseline(CropType::Cotton), 22.0);
        assert_eq!(rainfall_baseline(CropType::Rice), 1200.0);
        assert_eq!(rainfall_baseline(CropType::Sugarcane), 1500.0);
        assert_eq!(rainfall_baseline(CropType::Pulses), 800.0);
    }

    #[test]
    fn same_seed_reproduces_dataset() {
        assert_eq!(seeded(50, 42), seeded(50, 42));
        assert_eq!(generate_default(50, Some(42)), seeded(50, 42));
    }

    #[test]
    fn large_sample_covers_every_category() {
        let records = seeded(1_000, 5);
        for crop in CropType::ALL {
            assert!(records.iter().any(|r| r.crop == crop), "{crop:?} missing");
        }
        for season in Season::ALL {
            assert!(records.iter().any(|r| r.season == season));
        }
        for state in Region::ALL {
            assert!(records.iter().any(|r| r.state == state));
        }
    }
}
