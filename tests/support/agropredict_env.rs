use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Variables the app reads that tests override.
const MANAGED_VARS: [&str; 3] = ["AGROPREDICT_CONFIG_HOME", "API_KEY", "GEMINI_API_KEY"];

/// Points the app at a scratch config home and clears any API key.
///
/// Holds a global lock so env mutations never interleave between tests.
pub struct AgroEnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl AgroEnvGuard {
    pub fn set_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = MANAGED_VARS
            .iter()
            .map(|&name| (name, std::env::var(name).ok()))
            .collect();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var("AGROPREDICT_CONFIG_HOME", path);
            std::env::remove_var("API_KEY");
            std::env::remove_var("GEMINI_API_KEY");
        }
        Self {
            previous,
            _lock: lock,
        }
    }

    pub fn set_api_key(&self, value: &str) {
        // SAFETY: the guard holds the global env lock.
        unsafe {
            std::env::set_var("API_KEY", value);
        }
    }
}

impl Drop for AgroEnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..) {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
    }
}
