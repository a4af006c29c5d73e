//! Environment variable helpers
//!
//! Host processes use these to supply configuration at construction time,
//! e.g. the state store name (`STATE_STORE_NAME`, default `statestore`).

/// Read a string from the environment, falling back when unset or empty.
pub fn get_env_string(name: &str, fallback: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Read an integer from the environment, falling back when unset or unparsable.
pub fn get_env_int(name: &str, fallback: i64) -> i64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

/// Read a boolean from the environment, falling back when unset or unparsable.
pub fn get_env_bool(name: &str, fallback: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
