use crate::ingest::DEFAULT_DATASET_URL;

pub const BIND_ADDR_ENV: &str = "FOOD_TRUCKS_BIND_ADDR";
pub const DATASET_URL_ENV: &str = "FOOD_TRUCKS_DATASET_URL";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the service binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub dataset_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            bind_addr: get(BIND_ADDR_ENV).unwrap_or(defaults.bind_addr),
            dataset_url: get(DATASET_URL_ENV).unwrap_or(defaults.dataset_url),
        }
    }
}
