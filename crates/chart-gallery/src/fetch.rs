// File: crates/chart-gallery/src/fetch.rs
// Summary: One-shot dataset retrieval over HTTP (ureq) or from disk, with a single retry.

use std::time::Duration;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::FetchError;

/// Anything that can hand back the body of a dataset.
pub trait DataSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP client (ureq agent with a fixed timeout).
pub struct HttpSource {
    agent: Agent,
}

impl HttpSource {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self { agent }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for HttpSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        match self.agent.get(location).call() {
            Ok(resp) => resp.into_string().map_err(|e| body_read_failed(location, e)),
            Err(ureq::Error::Status(status, _)) => Err(FetchError::Status {
                location: location.to_string(),
                status,
            }),
            Err(ureq::Error::Transport(t)) => Err(FetchError::Transport {
                location: location.to_string(),
                message: t.to_string(),
            }),
        }
    }
}

/// Local file, given as a plain path or a `file://` URL.
pub struct FileSource;

impl DataSource for FileSource {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let path = location.strip_prefix("file://").unwrap_or(location);
        std::fs::read_to_string(path).map_err(|source| FetchError::Io {
            location: location.to_string(),
            source,
        })
    }
}

/// The connection dropped mid-body; a network failure, so it is retried like one.
fn body_read_failed(location: &str, err: std::io::Error) -> FetchError {
    FetchError::Transport { location: location.to_string(), message: format!("reading response body: {err}") }
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// HTTP for http(s) URLs, the filesystem for everything else.
pub fn source_for(location: &str) -> Box<dyn DataSource> {
    if is_remote(location) {
        Box::new(HttpSource::new())
    } else {
        Box::new(FileSource)
    }
}

/// Fetch `location`, retrying once straight away if the first failure is transient.
pub fn fetch_with_retry(source: &dyn DataSource, location: &str) -> Result<String, FetchError> {
    info!("fetching {location}");
    match source.fetch(location) {
        Err(e) if e.is_transient() => {
            warn!("{e}; retrying once");
            source.fetch(location)
        }
        other => other,
    }
}

/// Fetch and deserialize; shape errors carry the JSON path that failed.
pub fn load_json<T: DeserializeOwned>(source: &dyn DataSource, location: &str) -> Result<T, FetchError> {
    let body = fetch_with_retry(source, location)?;
    debug!("{location}: {} bytes", body.len());
    let de = &mut serde_json::Deserializer::from_str(&body);
    serde_path_to_error::deserialize(de).map_err(|e| FetchError::Shape {
        location: location.to_string(),
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}
