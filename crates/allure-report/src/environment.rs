//! One-time environment description registration.
//!
//! The description is written once per process into the results directory,
//! where report tooling picks it up alongside the emitted results. Writing
//! is best-effort: failures are logged at warn level and never surface to
//! the adapter that triggered the registration.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Serialize;

/// Environment variable naming the results directory.
pub const RESULTS_DIR_VAR: &str = "ALLURE_RESULTS_DIR";

/// Results directory used when [`RESULTS_DIR_VAR`] is unset.
pub const DEFAULT_RESULTS_DIR: &str = "allure-results";

/// Prefix selecting process environment variables for the description.
pub const ENV_PREFIX: &str = "ALLURE_ENV_";

const ENVIRONMENT_FILE: &str = "environment.json";

static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

/// Key/value description of the execution environment.
///
/// # Examples
/// ```
/// use allure_report::environment::EnvironmentInfo;
///
/// let info = EnvironmentInfo::capture();
/// assert!(info.entries().contains_key("os.name"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentInfo {
    entries: BTreeMap<String, String>,
}

impl EnvironmentInfo {
    /// Captures the current process environment.
    ///
    /// Records the operating system and architecture, plus every variable
    /// prefixed with [`ENV_PREFIX`] with the prefix stripped.
    #[must_use]
    pub fn capture() -> Self {
        let mut info = Self::default();
        info.insert("os.name", std::env::consts::OS);
        info.insert("os.arch", std::env::consts::ARCH);
        for (key, value) in std::env::vars() {
            if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                if !stripped.is_empty() {
                    info.insert(stripped, value);
                }
            }
        }
        info
    }

    /// Returns the captured entries.
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Inserts or replaces one entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

/// Registers the environment description in the configured results
/// directory.
///
/// The directory comes from [`RESULTS_DIR_VAR`], falling back to
/// [`DEFAULT_RESULTS_DIR`]. Registration happens at most once per process;
/// the return value reports whether this call performed it.
pub fn register() -> bool {
    let dir = std::env::var(RESULTS_DIR_VAR)
        .map_or_else(|_| PathBuf::from(DEFAULT_RESULTS_DIR), PathBuf::from);
    register_in(&dir)
}

/// Registers the environment description under `dir`, once per process.
///
/// Returns whether this call performed the registration. I/O failures are
/// logged and swallowed; the registration still counts as performed so
/// construction never retries mid-run.
pub fn register_in(dir: &Path) -> bool {
    let mut performed = false;
    REGISTERED.get_or_init(|| {
        write_description(dir, &EnvironmentInfo::capture());
        performed = true;
        dir.to_path_buf()
    });
    performed
}

/// Returns the directory the description was registered into, if any call
/// has registered it yet.
#[must_use]
pub fn registered_dir() -> Option<&'static Path> {
    REGISTERED.get().map(PathBuf::as_path)
}

/// Serializes the description into the writer as a flat JSON object.
///
/// # Errors
/// Returns an error when serialization fails or the writer rejects output.
pub fn write<W: Write>(writer: &mut W, info: &EnvironmentInfo) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, info)
}

fn write_description(dir: &Path, info: &EnvironmentInfo) {
    if let Err(error) = try_write(dir, info) {
        log::warn!(
            "failed to write environment description into {}: {error}",
            dir.display()
        );
    }
}

fn try_write(dir: &Path, info: &EnvironmentInfo) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let mut file = fs::File::create(dir.join(ENVIRONMENT_FILE))?;
    write(&mut file, info).map_err(std::io::Error::from)
}
