//! Client configuration holding the default token, server url and priority.

mod configuration_file;

use crate::{Error, LIB_LOG_TARGET};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub(crate) use self::configuration_file::ConfigFileParser;

const CONFIG_FILE_JSON: &str = "cli.json";
const CONFIG_FILE_TOML: &str = "cli.toml";

/// Values used when the corresponding command line override is not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    token: String,
    url: String,
    default_priority: i64,
}

impl Configuration {
    /// Create a new `Configuration`.
    pub fn new<S: AsRef<str>>(token: S, url: S, default_priority: i64) -> Self {
        Self { token: token.as_ref().into(), url: url.as_ref().into(), default_priority }
    }

    /// Return the application token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Return the server url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Return the priority used when none is given.
    pub fn default_priority(&self) -> i64 {
        self.default_priority
    }

    /// Parse a `Configuration` from JSON in the `cli.json` layout.
    pub fn from_json<S: AsRef<str>>(input: S) -> Result<Self, Error> {
        ConfigFileParser::from_json(input.as_ref())
    }

    /// Parse a `Configuration` from the file at `path`, picking the format from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(content),
            _ => Self::from_toml(content.as_str()),
        }
    }

    #[cfg(feature = "parse-cfg")]
    fn from_toml(input: &str) -> Result<Self, Error> {
        ConfigFileParser::from_toml(input)
    }

    #[cfg(not(feature = "parse-cfg"))]
    fn from_toml(_input: &str) -> Result<Self, Error> {
        Err(Error::DisabledFeature("parse-cfg".to_string()))
    }
}

#[cfg(feature = "parse-cfg")]
impl TryFrom<&str> for Configuration {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ConfigFileParser::from_toml(value)
    }
}

/// Read the first existing configuration file out of `locations`.
///
/// A file that exists but does not parse is an error, later locations are not tried.
pub fn read_config<P: AsRef<Path>>(locations: &[P]) -> Result<Configuration, Error> {
    for location in locations {
        let location = location.as_ref();
        if location.is_file() {
            debug!(target: LIB_LOG_TARGET, "Reading configuration from: {}", location.display());
            return Configuration::from_path(location);
        }
        trace!(target: LIB_LOG_TARGET, "No configuration at: {}", location.display());
    }

    let searched: Vec<String> = locations.iter().map(|l| l.as_ref().display().to_string()).collect();
    Err(Error::ConfigNotFound(searched.join(", ")))
}

/// Locations searched for a configuration file when none is given explicitly.
#[cfg(feature = "cli")]
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE_JSON), PathBuf::from(CONFIG_FILE_TOML)];

    if let Some(project_dirs) = directories::ProjectDirs::from("net", "gotify", "gotify") {
        locations.push(project_dirs.config_dir().join(CONFIG_FILE_TOML));
    }
    if let Some(base_dirs) = directories::BaseDirs::new() {
        locations.push(base_dirs.home_dir().join(".gotify").join(CONFIG_FILE_JSON));
    }
    if cfg!(unix) {
        locations.push(PathBuf::from("/etc/gotify").join(CONFIG_FILE_JSON));
    }
    locations
}

/// Locations searched for a configuration file when none is given explicitly.
#[cfg(not(feature = "cli"))]
pub fn default_locations() -> Vec<PathBuf> {
    vec![PathBuf::from(CONFIG_FILE_JSON), PathBuf::from(CONFIG_FILE_TOML)]
}
