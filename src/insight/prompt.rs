use crate::dataset::CropRecord;
use crate::estimate::PredictionForm;

/// Records summarized in the EDA prompt.
pub const EDA_SAMPLE_SIZE: usize = 10;

/// Prompt asking for a yield-potential assessment of the form inputs.
pub fn yield_prompt(form: &PredictionForm) -> String {
    format!(
        "Act as an Agricultural Data Scientist. Analyze the following crop environment factors \
         and predict the yield potential (low, medium, high).\n\
         Explain why based on the soil chemistry (NPK) and weather parameters provided.\n\
         \n\
         Inputs:\n\
         - Crop: {crop}\n\
         - Season: {season}\n\
         - State: {state}\n\
         - Temperature: {temperature}°C\n\
         - Rainfall: {rainfall}mm\n\
         - Soil pH: {ph}\n\
         - NPK Ratio: {n}:{p}:{k}\n\
         \n\
         Provide a professional summary of the prediction and suggestions for optimization.",
        crop = form.crop.label(),
        season = form.season.label(),
        state = form.state.label(),
        temperature = form.temperature,
        rainfall = form.rainfall,
        ph = form.ph,
        n = form.nitrogen,
        p = form.phosphorus,
        k = form.potassium,
    )
}

/// Prompt asking for three insights about the first few records.
pub fn eda_prompt(records: &[CropRecord]) -> String {
    let summary = records
        .iter()
        .take(EDA_SAMPLE_SIZE)
        .map(|record| {
            format!(
                "{}: Yield {:.2} at {:.1}°C",
                record.crop.label(),
                record.yield_t_ha,
                record.temperature
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Briefly analyze these agricultural trends and provide 3 key insights: {summary}")
}
