/// Variable consulted when the configured one is unset.
pub const FALLBACK_KEY_ENV: &str = "GEMINI_API_KEY";

/// Read the API key from the environment.
pub fn resolve_api_key(env_name: &str) -> Option<String> {
    resolve_with(env_name, |name| std::env::var(name).ok())
}

/// First non-blank value of `env_name`, then of [`FALLBACK_KEY_ENV`].
pub(crate) fn resolve_with(
    env_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let non_blank = |name: &str| {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };
    non_blank(env_name).or_else(|| {
        if env_name == FALLBACK_KEY_ENV {
            None
        } else {
            non_blank(FALLBACK_KEY_ENV)
        }
    })
}
