//! # healthprobe Main Entry Point

use anyhow::Result;
use healthprobe::{
    cmd_args::CommandLineArgs, config, get_blank_profile, run_probe, IniProfileStore,
    ProbeSettings,
};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Targets that are capped at `warn` regardless of the requested level
const QUIET_TARGETS: &[&str] = &[
    "reqwest", "hyper", "hyper_util", "h2", "rustls", "tokio", "tokio_rustls", "tracing",
];

fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();

    // Load profile from INI file by name specified in --profile argument
    // (default to "default"). If the profile is not found, use a blank profile.
    let profile_name = cmd_args.profile();
    let profile_path = config::get_profile_path();
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

    let profile = match IniProfileStore::new(&profile_path).get_profile(profile_name)? {
        Some(p) => {
            tracing::debug!("Profile loaded successfully, server: {:?}", p.server());
            p
        }
        None => {
            tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
            get_blank_profile()
        }
    };

    let settings = ProbeSettings::resolve(&cmd_args, &profile);
    tracing::debug!("Resolved settings: {:?}", settings);

    // A failed request is reported on stdout and still exits 0
    let outcome = run_probe(settings, &mut std::io::stdout().lock())?;
    tracing::debug!("Probe finished, responded: {}", outcome.is_responded());

    Ok(())
}

fn init_tracing_subscriber() {
    let mut filter = EnvFilter::from_env(config::LOG_LEVEL_ENV_VAR);
    for target in QUIET_TARGETS {
        if let Ok(directive) = format!("{target}=warn").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
