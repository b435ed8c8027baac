//! # Probe Settings
//!
//! Resolves the effective settings from the command line, the profile and the
//! built-in defaults, in that order of precedence.

use crate::cmd_args::CommandLineArgs;
use crate::config;
use crate::profile::ProbeProfile;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    server: String,
    timeout: Duration,
    insecure: bool,
    verbose: bool,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self::new(config::DEFAULT_SERVER)
    }
}

impl ProbeSettings {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            timeout: config::default_timeout(),
            insecure: false,
            verbose: false,
        }
    }

    pub fn resolve(args: &CommandLineArgs, profile: &ProbeProfile) -> Self {
        let server = args
            .server()
            .or(profile.server())
            .cloned()
            .unwrap_or_else(|| config::DEFAULT_SERVER.to_string());
        let timeout = args
            .timeout()
            .map(Duration::from_secs)
            .or(profile.timeout())
            .unwrap_or_else(config::default_timeout);
        let insecure = args.insecure() || profile.insecure().unwrap_or(false);

        Self {
            server,
            timeout,
            insecure,
            verbose: args.verbose(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Full URL of the health endpoint
    pub fn url(&self) -> String {
        config::health_url(&self.server)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn insecure(&self) -> bool {
        self.insecure
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
