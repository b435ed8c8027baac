//! # Profile Store
//!
//! Reads named connection profiles from an INI file:
//!
//! ```ini
//! [default]
//! server = https://api.example.com
//! timeout = 10
//! insecure = false
//! ```

use crate::error::{ProbeError, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Connection settings from one profile section. Unset keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeProfile {
    server: Option<String>,
    timeout: Option<Duration>,
    insecure: Option<bool>,
}

impl ProbeProfile {
    pub fn server(&self) -> Option<&String> {
        self.server.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn insecure(&self) -> Option<bool> {
        self.insecure
    }
}

/// Profile with nothing set; every setting falls through to the built-in defaults.
pub fn get_blank_profile() -> ProbeProfile {
    ProbeProfile::default()
}

pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: shellexpand::tilde(path).into_owned(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a profile by section name.
    ///
    /// A missing file or section is `Ok(None)`; an unreadable file or a bad value is an error.
    pub fn get_profile(&self, name: &str) -> Result<Option<ProbeProfile>> {
        if !Path::new(&self.path).exists() {
            tracing::debug!("Profile file '{}' does not exist", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path).map_err(|source| ProbeError::ProfileLoad {
            path: self.path.clone(),
            source,
        })?;

        let Some(section) = ini.section(Some(name)) else {
            tracing::debug!("Section [{}] not found in '{}'", name, self.path);
            return Ok(None);
        };

        let bad_value = |key: &str, value: &str| ProbeError::ProfileValue {
            profile: name.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        };

        let server = section
            .get("server")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let timeout = match section.get("timeout") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| bad_value("timeout", raw))?,
            ),
            None => None,
        };

        let insecure = match section.get("insecure") {
            Some(raw) => Some(parse_bool(raw).ok_or_else(|| bad_value("insecure", raw))?),
            None => None,
        };

        Ok(Some(ProbeProfile {
            server,
            timeout,
            insecure,
        }))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_profile(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_should_yield_no_profile() {
        let store = IniProfileStore::new("/nonexistent/healthprobe/profile");
        assert_eq!(store.get_profile("default").unwrap(), None);
    }

    #[test]
    fn missing_section_should_yield_no_profile() {
        let file = write_profile("[default]\nserver = http://localhost:3001\n");
        let store = IniProfileStore::new(file.path().to_str().unwrap());
        assert_eq!(store.get_profile("staging").unwrap(), None);
    }

    #[test]
    fn section_values_should_be_read() {
        let file = write_profile(
            "[default]\nserver = http://localhost:3001\n\n[staging]\nserver = https://staging.example.com\ntimeout = 5\ninsecure = true\n",
        );
        let store = IniProfileStore::new(file.path().to_str().unwrap());

        let profile = store.get_profile("staging").unwrap().unwrap();
        assert_eq!(
            profile.server().map(String::as_str),
            Some("https://staging.example.com")
        );
        assert_eq!(profile.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(profile.insecure(), Some(true));

        let default = store.get_profile("default").unwrap().unwrap();
        assert_eq!(default.timeout(), None);
        assert_eq!(default.insecure(), None);
    }

    #[test]
    fn bad_timeout_should_be_an_error() {
        let file = write_profile("[default]\ntimeout = soon\n");
        let store = IniProfileStore::new(file.path().to_str().unwrap());

        let err = store.get_profile("default").unwrap_err();
        assert!(matches!(err, ProbeError::ProfileValue { ref key, .. } if key == "timeout"));
    }

    #[test]
    fn bad_insecure_flag_should_be_an_error() {
        let file = write_profile("[default]\ninsecure = maybe\n");
        let store = IniProfileStore::new(file.path().to_str().unwrap());

        assert!(store.get_profile("default").is_err());
    }

    #[test]
    fn tilde_should_be_expanded() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let store = IniProfileStore::new("~/.healthprobe/profile");
        assert!(!store.path().starts_with('~'));
        assert!(store.path().ends_with(".healthprobe/profile"));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("nope"), None);
    }
}
