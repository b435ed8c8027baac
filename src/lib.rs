//! # healthprobe - One-shot HTTP Health Check
//!
//! Sends a single GET to a service's `/health` endpoint and prints the status
//! code and body, or the error that prevented a response.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐    ┌─────────┐
//! │   cmd_args   │───▶│ profile / config │───▶│   settings   │───▶│  probe  │
//! │ (clap flags) │    │ (INI, defaults)  │    │ (precedence) │    │ (1 GET) │
//! └──────────────┘    └──────────────────┘    └──────────────┘    └─────────┘
//! ```
//!
//! Request failures never escape [`probe::HealthProbe::run`]; they are printed
//! as an `Error:` line and the process still exits normally.

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod probe;
pub mod profile;
pub mod settings;

// Re-export main types for easy access
pub use error::{ProbeError, Result};
pub use probe::{run_probe, HealthProbe, ProbeOutcome, ProbeResponse};
pub use profile::{get_blank_profile, IniProfileStore, ProbeProfile};
pub use settings::ProbeSettings;
