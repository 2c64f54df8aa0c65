//! Screenshot capture sources for step attachments.
//!
//! Capture is best-effort by contract: a source returning `None` means no
//! attachment is emitted, never an error. I/O problems degrade to `None`
//! with a debug log line.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// MIME type applied to screenshot attachments.
pub const PNG_MIME: &str = "image/png";

/// Supplies optional screenshot content for step attachments.
pub trait ScreenshotSource {
    /// Returns raw image bytes, or `None` when nothing can be captured.
    fn capture(&self) -> Option<Vec<u8>>;
}

/// Source that never captures; used when no photographer is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScreenshotSource;

impl ScreenshotSource for NullScreenshotSource {
    fn capture(&self) -> Option<Vec<u8>> {
        None
    }
}

/// Source reading the newest PNG written by the runner's photographer.
///
/// # Examples
/// ```no_run
/// use allure_listener::screenshot::{DirectoryScreenshotSource, ScreenshotSource};
///
/// let source = DirectoryScreenshotSource::new("target/screenshots");
/// let _content = source.capture();
/// ```
#[derive(Clone, Debug)]
pub struct DirectoryScreenshotSource {
    dir: PathBuf,
}

impl DirectoryScreenshotSource {
    /// Watches `dir` for photographer output.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the watched directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn newest_png(&self) -> Option<PathBuf> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(error) => {
                log::debug!(
                    "screenshot directory {} is unreadable: {error}",
                    self.dir.display()
                );
                return None;
            }
        };
        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|extension| extension != "png") {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|metadata| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            if newest
                .as_ref()
                .is_none_or(|(time, _)| modified >= *time)
            {
                newest = Some((modified, path));
            }
        }
        newest.map(|(_, path)| path)
    }
}

impl ScreenshotSource for DirectoryScreenshotSource {
    fn capture(&self) -> Option<Vec<u8>> {
        let path = self.newest_png()?;
        match fs::read(&path) {
            Ok(content) => Some(content),
            Err(error) => {
                log::debug!("screenshot {} is unreadable: {error}", path.display());
                None
            }
        }
    }
}
