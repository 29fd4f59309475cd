//! Logging setup.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error, for the non-interactive commands.
    Stderr,
    /// A file, for the dashboard, which owns the terminal.
    File(&'a Path),
    /// Nowhere.
    Off,
}

/// Installs the global `tracing` subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(target: LogTarget<'_>, level: Level) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Off => return Ok(()),
    };

    // Already initialised: keep the existing subscriber.
    let _ = result;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_off_is_noop() {
        assert!(init(LogTarget::Off, Level::DEBUG).is_ok());
    }

    #[test]
    fn test_init_file_creates_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compatscope.log");
        init(LogTarget::File(&path), Level::DEBUG).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_missing_directory_fails() {
        let path = Path::new("/nonexistent/dir/compatscope.log");
        assert!(init(LogTarget::File(path), Level::DEBUG).is_err());
    }
}
