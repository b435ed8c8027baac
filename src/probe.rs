//! # Health Probe
//!
//! Sends a single GET to the health endpoint and reports the outcome.

use crate::error::Result;
use crate::settings::ProbeSettings;
use reqwest::blocking::Client;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Result of a completed health-check request
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Canonical reason phrase, if the status has one
    pub reason: Option<&'static str>,
    /// Response body as text
    pub body: String,
    /// Wall time from send to body fully read
    pub elapsed: Duration,
}

/// What `run` observed, for callers that want more than the console output
#[derive(Debug)]
pub enum ProbeOutcome {
    Responded(ProbeResponse),
    Failed(String),
}

impl ProbeOutcome {
    pub fn is_responded(&self) -> bool {
        matches!(self, ProbeOutcome::Responded(_))
    }
}

pub struct HealthProbe {
    client: Client,
    settings: ProbeSettings,
}

impl HealthProbe {
    pub fn new(settings: ProbeSettings) -> Result<Self> {
        tracing::debug!(
            "Creating HTTP client (timeout: {:?}, insecure: {})",
            settings.timeout(),
            settings.insecure()
        );
        let client = Client::builder()
            .timeout(settings.timeout())
            .danger_accept_invalid_certs(settings.insecure())
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// Issue exactly one GET against the health URL and read the body.
    pub fn check(&self) -> Result<ProbeResponse> {
        let url = self.settings.url();
        let start_time = Instant::now();

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        let elapsed = start_time.elapsed();
        tracing::info!("{} responded {} in {:?}", url, status.as_u16(), elapsed);

        Ok(ProbeResponse {
            status_code: status.as_u16(),
            reason: status.canonical_reason(),
            body,
            elapsed,
        })
    }

    /// Run the check and write the report to `out`.
    ///
    /// Request failures are reported, not returned; only a failing writer is an error.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<ProbeOutcome> {
        let url = self.settings.url();
        writeln!(out, "Testing {url}...")?;
        if self.settings.verbose() {
            writeln!(out, "Request: GET {url}")?;
        }

        let outcome = match self.check() {
            Ok(response) => {
                writeln!(out, "Status Code: {}", response.status_code)?;
                writeln!(out, "Response: {}", response.body)?;
                if self.settings.verbose() {
                    writeln!(out, "Elapsed: {} ms", response.elapsed.as_millis())?;
                }
                ProbeOutcome::Responded(response)
            }
            Err(e) => {
                let message = e.describe();
                tracing::warn!("Health check failed: {message}");
                writeln!(out, "Error: {message}")?;
                ProbeOutcome::Failed(message)
            }
        };

        out.flush()?;
        Ok(outcome)
    }
}

/// Build a probe from `settings` and run it, reporting client construction
/// failures the same way as request failures.
pub fn run_probe<W: Write>(settings: ProbeSettings, out: &mut W) -> io::Result<ProbeOutcome> {
    match HealthProbe::new(settings.clone()) {
        Ok(probe) => probe.run(out),
        Err(e) => {
            let message = e.describe();
            tracing::error!("Failed to create HTTP client: {message}");
            writeln!(out, "Testing {}...", settings.url())?;
            writeln!(out, "Error: {message}")?;
            Ok(ProbeOutcome::Failed(message))
        }
    }
}
