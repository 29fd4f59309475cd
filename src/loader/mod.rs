//! Loading the dataset document.
//!
//! The loader fetches a primary location and, if that fetch fails, a
//! fallback location exactly once. The fetched body is then parsed; a parse
//! failure is final. [`spawn_load`] runs a load on a background thread so
//! the dashboard can show a loading state meanwhile.

mod fetch;
mod location;

use std::sync::mpsc::{self, Receiver};
use std::thread;

use tracing::{info, warn};

use crate::dataset::{parse_str, Dataset, ParseError};

pub use fetch::{DefaultFetcher, FetchError, Fetcher};
pub use location::Location;

/// Errors that end a load attempt.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Neither the primary nor the fallback location could be fetched.
    #[error("failed to load data ({primary}; fallback: {fallback})")]
    Unavailable {
        primary: FetchError,
        fallback: FetchError,
    },

    /// A document was fetched but is not a valid dataset.
    #[error("failed to load data from {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: ParseError,
    },
}

/// Progress of the current load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// A load is in flight.
    Loading,
    /// The dataset is available.
    Loaded(Dataset),
    /// The load failed; holds the message shown to the user.
    Failed(String),
}

impl LoadState {
    /// Returns the dataset if loaded.
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Loaded(dataset) => Some(dataset),
            _ => None,
        }
    }
}

impl From<Result<Dataset, LoadError>> for LoadState {
    fn from(result: Result<Dataset, LoadError>) -> Self {
        match result {
            Ok(dataset) => LoadState::Loaded(dataset),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

/// Loads a dataset from a primary location with a single fallback.
pub struct DataLoader<F> {
    fetcher: F,
    primary: Location,
    fallback: Location,
}

impl<F: Fetcher> DataLoader<F> {
    /// Creates a loader.
    pub fn new(fetcher: F, primary: Location, fallback: Location) -> Self {
        Self {
            fetcher,
            primary,
            fallback,
        }
    }

    /// Fetches and parses the document.
    ///
    /// The fallback is tried once, and only when the primary fetch fails.
    /// A document that fails to parse is not retried.
    pub fn load(&self) -> Result<Dataset, LoadError> {
        let (location, body) = match self.fetcher.fetch(&self.primary) {
            Ok(body) => (&self.primary, body),
            Err(primary) => {
                warn!(error = %primary, fallback = %self.fallback, "primary fetch failed");
                match self.fetcher.fetch(&self.fallback) {
                    Ok(body) => (&self.fallback, body),
                    Err(fallback) => return Err(LoadError::Unavailable { primary, fallback }),
                }
            }
        };

        let dataset = parse_str(&body).map_err(|source| LoadError::Parse {
            location: location.to_string(),
            source,
        })?;
        info!(
            %location,
            applications = dataset.applications.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

/// Runs `loader.load()` on a background thread.
///
/// The result arrives on the returned channel. Dropping the receiver before
/// the load finishes discards the result.
pub fn spawn_load<F>(loader: DataLoader<F>) -> Receiver<Result<Dataset, LoadError>>
where
    F: Fetcher + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone if the dashboard was closed mid-load.
        let _ = tx.send(loader.load());
    });
    rx
}
