//! Resource fetchers for translation datasets.
//!
//! `ResourceFetcher` is the transport seam: the loader only knows resource
//! names, and a fetcher turns a name into text. Two backends are provided, an
//! HTTP client for hosted datasets and a directory reader for local copies.

use crate::errors::{AppError, AppResult, FetchError};
use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;
use reqwest::Url;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fetches the raw text of a named dataset resource.
pub trait ResourceFetcher {
    /// Returns the full body of `name`.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` when the resource cannot be retrieved or its body
    /// is empty after trimming.
    fn fetch(&self, name: &str) -> Result<String, FetchError>;
}

impl<F: ResourceFetcher + ?Sized> ResourceFetcher for &F {
    fn fetch(&self, name: &str) -> Result<String, FetchError> {
        (**self).fetch(name)
    }
}

impl<F: ResourceFetcher + ?Sized> ResourceFetcher for Box<F> {
    fn fetch(&self, name: &str) -> Result<String, FetchError> {
        (**self).fetch(name)
    }
}

fn non_empty(name: &str, body: String) -> Result<String, FetchError> {
    if body.trim().is_empty() {
        Err(FetchError::EmptyBody {
            resource: name.to_string(),
        })
    } else {
        Ok(body)
    }
}

/// Fetches datasets over HTTP relative to a base URL.
///
/// Every request carries a `v=<asset version>` query parameter and a
/// `Cache-Control: no-store` header so stale copies are never served.
pub struct HttpFetcher {
    base_url: Url,
    asset_version: String,
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher for datasets hosted under `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Directory URL holding the CSV files (e.g., "https://example.org/data/")
    /// * `asset_version` - Cache-busting version appended to each request
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, asset_version: impl Into<String>) -> AppResult<Self> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| AppError::Config(format!("Invalid dataset URL '{}': {}", base_url, e)))?;

        Ok(Self {
            base_url,
            asset_version: asset_version.into(),
            client: Client::new(),
        })
    }

    /// Builds the request URL for a resource name.
    ///
    /// Path characters such as spaces are percent-encoded.
    pub fn resource_url(&self, name: &str) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(name)
            .map_err(|e| FetchError::InvalidUrl {
                resource: name.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("v", &self.asset_version);
        Ok(url)
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch(&self, name: &str) -> Result<String, FetchError> {
        let url = self.resource_url(name)?;
        debug!("Requesting dataset resource: {}", url);

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .map_err(|source| FetchError::Transport {
                resource: name.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                resource: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            resource: name.to_string(),
            source,
        })?;

        non_empty(name, body)
    }
}

/// Reads datasets from files in a local directory.
pub struct DirectoryFetcher {
    dir: PathBuf,
}

impl DirectoryFetcher {
    /// Creates a fetcher reading `<dir>/<name>`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory resources are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ResourceFetcher for DirectoryFetcher {
    fn fetch(&self, name: &str) -> Result<String, FetchError> {
        // Resource names are plain file names; never escape the data directory
        if name.contains(['/', '\\']) || name == ".." {
            return Err(FetchError::Io {
                resource: name.to_string(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "resource name must not contain path separators",
                ),
            });
        }

        let path = self.dir.join(name);
        debug!("Reading dataset resource: {:?}", path);

        let body = fs::read_to_string(&path).map_err(|source| FetchError::Io {
            resource: name.to_string(),
            source,
        })?;

        non_empty(name, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resource_url_encodes_spaces_and_adds_version() {
        let fetcher = HttpFetcher::new("https://example.org/data", "build-9").unwrap();
        let url = fetcher
            .resource_url("Bible_Journey KJV Time Complete.csv")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/data/Bible_Journey%20KJV%20Time%20Complete.csv?v=build-9"
        );
    }

    #[test]
    fn test_base_url_with_trailing_slash() {
        let fetcher = HttpFetcher::new("https://example.org/data/", "v1").unwrap();
        let url = fetcher.resource_url("a.csv").unwrap();
        assert_eq!(url.as_str(), "https://example.org/data/a.csv?v=v1");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpFetcher::new("not a url", "v1");
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("Invalid dataset URL")),
            _ => panic!("Expected Config error for invalid URL"),
        }
    }

    #[test]
    fn test_directory_fetcher_reads_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a b.csv"), "number\n1\n").unwrap();

        let fetcher = DirectoryFetcher::new(dir.path());
        assert_eq!(fetcher.fetch("a b.csv").unwrap(), "number\n1\n");
    }

    #[test]
    fn test_directory_fetcher_missing_file() {
        let dir = tempdir().unwrap();
        let fetcher = DirectoryFetcher::new(dir.path());

        match fetcher.fetch("missing.csv") {
            Err(FetchError::Io { resource, source }) => {
                assert_eq!(resource, "missing.csv");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_fetcher_blank_file_is_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("blank.csv"), " \n\t\n").unwrap();

        let fetcher = DirectoryFetcher::new(dir.path());
        assert!(matches!(
            fetcher.fetch("blank.csv"),
            Err(FetchError::EmptyBody { .. })
        ));
    }

    #[test]
    fn test_directory_fetcher_rejects_separators() {
        let dir = tempdir().unwrap();
        let fetcher = DirectoryFetcher::new(dir.path());
        assert!(matches!(
            fetcher.fetch("../secret.csv"),
            Err(FetchError::Io { .. })
        ));
    }
}
