//! Where a dataset document lives.

use std::fmt;
use std::path::PathBuf;

/// A remote URL or a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// `http://` or `https://` URL.
    Remote(String),
    /// Filesystem path, relative to the working directory when not absolute.
    Local(PathBuf),
}

impl Location {
    /// Interprets a string as a URL if it has an http(s) scheme, otherwise
    /// as a path.
    pub fn parse(s: &str) -> Self {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Location::Remote(s.to_string())
        } else {
            Location::Local(PathBuf::from(s))
        }
    }

    /// Appends a file name to a base location.
    ///
    /// # Example
    ///
    /// ```
    /// use compatscope::loader::Location;
    ///
    /// let base = Location::parse("https://example.com/dash/");
    /// assert_eq!(
    ///     base.join("sample-data.json"),
    ///     Location::Remote("https://example.com/dash/sample-data.json".to_string())
    /// );
    /// ```
    pub fn join(&self, file: &str) -> Self {
        match self {
            Location::Remote(url) => {
                let trimmed = url.trim_end_matches('/');
                Location::Remote(format!("{}/{}", trimmed, file))
            }
            Location::Local(dir) => Location::Local(dir.join(file)),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Remote(url) => write!(f, "{}", url),
            Location::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
