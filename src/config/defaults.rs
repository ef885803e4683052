pub(super) const MAX_RECORD_COUNT: usize = 100_000;

pub(super) fn default_record_count() -> usize {
    1_000
}

pub(super) fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

pub(super) fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

pub(super) fn default_temperature() -> f32 {
    0.7
}

pub(super) fn default_top_p() -> f32 {
    0.9
}

pub(super) fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

pub(super) fn clamp_record_count(count: usize) -> usize {
    count.clamp(1, MAX_RECORD_COUNT)
}

pub(super) fn clamp_temperature(value: f32) -> f32 {
    if value.is_nan() {
        return default_temperature();
    }
    value.clamp(0.0, 2.0)
}

pub(super) fn clamp_top_p(value: f32) -> f32 {
    if value.is_nan() {
        return default_top_p();
    }
    value.clamp(0.0, 1.0)
}
