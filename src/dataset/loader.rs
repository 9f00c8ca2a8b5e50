//! Ordered candidate fetching and the session dataset cache.

use super::fetch::ResourceFetcher;
use super::translations::{candidate_files_for_translation, normalize_code};
use super::Dataset;
use crate::errors::DatasetError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// The body of the first candidate that could be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResource {
    /// Resource name that produced the body
    pub name: String,
    /// Raw, non-empty body text
    pub text: String,
}

/// Tries each candidate in order and returns the first non-empty body.
///
/// Failures of earlier candidates are logged and otherwise swallowed. When every
/// candidate fails the error lists all attempted names and keeps the last failure.
///
/// # Errors
///
/// Returns `DatasetError::Unavailable` when no candidate yields content.
pub fn fetch_first_available<F: ResourceFetcher + ?Sized>(
    fetcher: &F,
    translation: &str,
    candidates: &[&str],
) -> Result<FetchedResource, DatasetError> {
    let mut tried = Vec::with_capacity(candidates.len());
    let mut last = None;

    for &name in candidates {
        tried.push(name.to_string());
        debug!("Trying dataset candidate: {}", name);

        match fetcher.fetch(name) {
            Ok(text) => {
                return Ok(FetchedResource {
                    name: name.to_string(),
                    text,
                })
            }
            Err(e) => {
                warn!("Dataset candidate '{}' failed: {}", name, e);
                last = Some(e);
            }
        }
    }

    Err(DatasetError::Unavailable {
        translation: translation.to_string(),
        tried,
        last,
    })
}

/// Parsed datasets keyed by normalized translation code.
///
/// The cache lives as long as its owner; entries are never evicted.
#[derive(Debug, Default, Clone)]
pub struct DatasetCache {
    datasets: HashMap<String, Arc<Dataset>>,
}

impl DatasetCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset for `code`, if any.
    pub fn get(&self, code: &str) -> Option<Arc<Dataset>> {
        self.datasets.get(&normalize_code(code)).cloned()
    }

    /// Stores a parsed dataset, replacing any previous one for the same code.
    pub fn insert(&mut self, code: &str, dataset: Arc<Dataset>) {
        self.datasets.insert(normalize_code(code), dataset);
    }

    /// True when a dataset for `code` is cached.
    pub fn contains(&self, code: &str) -> bool {
        self.datasets.contains_key(&normalize_code(code))
    }

    /// Number of cached translations.
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// True when nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

/// Loads translation datasets through a fetcher, memoizing parsed results.
pub struct DatasetLoader<F> {
    fetcher: F,
    cache: DatasetCache,
}

impl<F: ResourceFetcher> DatasetLoader<F> {
    /// Creates a loader with an empty cache.
    pub fn new(fetcher: F) -> Self {
        Self::with_cache(fetcher, DatasetCache::new())
    }

    /// Creates a loader that starts from an existing cache.
    pub fn with_cache(fetcher: F, cache: DatasetCache) -> Self {
        Self { fetcher, cache }
    }

    /// Returns the dataset for `code`, fetching and parsing it on first use.
    ///
    /// The parsed dataset, not the raw text, is cached. A second call for the
    /// same code (in any letter case) returns the cached value without fetching.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Unavailable` if every candidate resource fails.
    pub fn load(&mut self, code: &str) -> Result<Arc<Dataset>, DatasetError> {
        let code = normalize_code(code);
        if let Some(dataset) = self.cache.get(&code) {
            debug!("Dataset cache hit for {}", code);
            return Ok(dataset);
        }

        info!("Loading translation data for {}", code.to_uppercase());
        let candidates = candidate_files_for_translation(&code);
        let resource = fetch_first_available(&self.fetcher, &code, candidates).map_err(|e| {
            error!("{}", e);
            e
        })?;

        let dataset = Arc::new(Dataset::parse(&resource.text));
        info!(
            "Loaded {} rows from \"{}\".",
            dataset.len(),
            resource.name
        );
        self.cache.insert(&code, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// The session cache.
    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
