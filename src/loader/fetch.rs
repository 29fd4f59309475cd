//! Fetching raw document bodies.

use std::fs;
use std::time::Duration;

use tracing::debug;

use super::location::Location;

/// Errors that can occur while fetching a document body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("{location} returned HTTP {status}")]
    Status { location: String, status: u16 },

    /// The request could not be completed.
    #[error("request to {location} failed: {source}")]
    Network {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    /// A local file could not be read.
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Source of document bodies.
pub trait Fetcher {
    /// Returns the body stored at `location`.
    fn fetch(&self, location: &Location) -> Result<String, FetchError>;
}

/// Fetches remote locations over HTTP and local ones from disk.
pub struct DefaultFetcher {
    client: reqwest::blocking::Client,
}

impl DefaultFetcher {
    /// Creates a fetcher with a versioned user agent.
    ///
    /// Requests never time out; a slow primary is waited for rather than
    /// abandoned for the fallback.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(None)
    }

    /// Creates a fetcher whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let user_agent = format!("compatscope/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    fn fetch_remote(&self, url: &str) -> Result<String, FetchError> {
        let network = |source| FetchError::Network {
            location: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(network)
    }
}

impl Fetcher for DefaultFetcher {
    fn fetch(&self, location: &Location) -> Result<String, FetchError> {
        debug!(%location, "fetching dataset document");
        match location {
            Location::Remote(url) => self.fetch_remote(url),
            Location::Local(path) => fs::read_to_string(path).map_err(|source| FetchError::Io {
                location: location.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_fetch_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"applications": []}"#).unwrap();

        let fetcher = DefaultFetcher::new().unwrap();
        let body = fetcher
            .fetch(&Location::Local(file.path().to_path_buf()))
            .unwrap();
        assert_eq!(body, r#"{"applications": []}"#);
    }

    #[test]
    fn test_fetch_missing_local_file() {
        let fetcher = DefaultFetcher::new().unwrap();
        let err = fetcher
            .fetch(&Location::parse("/nonexistent/sample-data.json"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sample-data.json"));
    }

    /// Serves one HTTP response after `delay`, returning its URL.
    fn slow_server(delay: Duration, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/sample-data.json", listener.local_addr().unwrap());
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            thread::sleep(delay);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        });
        url
    }

    #[test]
    fn test_fetch_waits_for_slow_server() {
        let url = slow_server(Duration::from_millis(1500), r#"{"applications": []}"#);

        let fetcher = DefaultFetcher::new().unwrap();
        let body = fetcher.fetch(&Location::parse(&url)).unwrap();
        assert_eq!(body, r#"{"applications": []}"#);
    }

    #[test]
    fn test_explicit_timeout_abandons_slow_server() {
        let url = slow_server(Duration::from_millis(1500), r#"{"applications": []}"#);

        let fetcher = DefaultFetcher::with_timeout(Some(Duration::from_millis(200))).unwrap();
        let err = fetcher.fetch(&Location::parse(&url)).unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            location: "https://example.com/sample-data.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "https://example.com/sample-data.json returned HTTP 404"
        );
    }
}
