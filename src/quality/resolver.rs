//! Quality lookup through the extraction engine

use std::sync::Arc;
use tracing::{debug, info};

use crate::extractor::Extractor;
use crate::quality::map::QualityMap;
use crate::utils::error::ClipFetchError;

/// Asks the engine which resolutions a URL offers.
#[derive(Clone)]
pub struct QualityResolver {
    extractor: Arc<dyn Extractor>,
    min_height: u32,
}

impl QualityResolver {
    pub fn new(extractor: Arc<dyn Extractor>, min_height: u32) -> Self {
        Self {
            extractor,
            min_height,
        }
    }

    /// Probe `url` in metadata-only mode and build its quality map.
    ///
    /// An empty URL is rejected before the engine is called. A probe that yields
    /// no usable heights is an error so callers never replace a good map with an
    /// empty one.
    pub async fn fetch(&self, url: &str) -> Result<QualityMap, ClipFetchError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ClipFetchError::InvalidInput(
                "Please enter a video URL".to_string(),
            ));
        }

        debug!("Fetching qualities via {} for {}", self.extractor.id(), url);
        let formats = self
            .extractor
            .get_formats(url)
            .await
            .map_err(ClipFetchError::extraction)?;

        let map = QualityMap::from_formats(&formats, self.min_height);
        if map.is_empty() {
            return Err(ClipFetchError::NoQualities);
        }

        info!(
            "Found {} qualities for {} (from {} formats)",
            map.len(),
            url,
            formats.len()
        );
        Ok(map)
    }
}
