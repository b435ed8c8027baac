//! Configuration constants and utilities for healthprobe
//!
//! Built-in defaults for the probe target plus the lookup rules for the
//! profile file and the log level override.

use std::time::Duration;

/// Server probed when neither the command line nor a profile names one
pub const DEFAULT_SERVER: &str =
    "https://aarambh-production.eba-hmkpyyve.us-east-1.elasticbeanstalk.com";

/// Path appended to the server base URL
pub const HEALTH_PATH: &str = "/health";

/// Upper bound on the whole request, body read included
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default profile file path for healthprobe
pub const DEFAULT_PROFILE_PATH: &str = "~/.healthprobe/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "HEALTHPROBE_PROFILE_PATH";

/// Environment variable holding the tracing filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "HEALTHPROBE_LOG_LEVEL";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Build the health-check URL for a server base URL
pub fn health_url(server: &str) -> String {
    format!("{}{}", server.trim_end_matches('/'), HEALTH_PATH)
}

pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}
