use serde::{Deserialize, Serialize};
use tracing::{error, info};

use formats::FeatureSet;

/// Upper bound on a single dataset payload.
const MAX_BYTES: usize = 8 * 1024 * 1024;

/// The three dataset locations. `http(s)` locations are fetched over the
/// network; anything else is read as a local file path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSet {
    pub states: String,
    pub counties: String,
    pub plants: String,
}

impl Default for SourceSet {
    fn default() -> Self {
        Self {
            states: "data/california.geojson".to_string(),
            counties: "https://gist.githubusercontent.com/sdwfrost/d1c73f91dd9d175998ed166eb216994a/raw/e89c35f308cee7e2e5a784e1d3afc5d449e9e4bb/counties.geojson".to_string(),
            plants: "data/California_Power_Plants.geojson".to_string(),
        }
    }
}

/// Error type for dataset loading.
#[derive(Debug)]
pub struct SourceError {
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// All three datasets, parsed and ready to ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct MapData {
    pub regions: FeatureSet,
    pub subregions: FeatureSet,
    pub pois: FeatureSet,
}

/// Fetches and parses all three datasets concurrently.
///
/// Any failure abandons the whole load: it is logged and `None` comes
/// back, so the caller skips the render. No partial map, no retry.
pub async fn load_map_data(client: &reqwest::Client, sources: &SourceSet) -> Option<MapData> {
    match try_load(client, sources).await {
        Ok(data) => Some(data),
        Err(err) => {
            error!("failed to load map data: {err}");
            None
        }
    }
}

async fn try_load(client: &reqwest::Client, sources: &SourceSet) -> Result<MapData, SourceError> {
    let (states, counties, plants) = tokio::try_join!(
        fetch_text(client, &sources.states),
        fetch_text(client, &sources.counties),
        fetch_text(client, &sources.plants),
    )?;

    // The state source returns one bare feature; wrap it into a
    // one-element collection before use.
    let regions = FeatureSet::from_single_feature_str(&states)
        .map_err(|e| SourceError::with_source("parse state boundary", e))?;
    let subregions = FeatureSet::from_geojson_str(&counties)
        .map_err(|e| SourceError::with_source("parse counties", e))?;
    let pois = FeatureSet::from_geojson_str(&plants)
        .map_err(|e| SourceError::with_source("parse power plants", e))?;

    info!(
        regions = regions.len(),
        subregions = subregions.len(),
        pois = pois.len(),
        "map data loaded"
    );

    Ok(MapData {
        regions,
        subregions,
        pois,
    })
}

async fn fetch_text(client: &reqwest::Client, location: &str) -> Result<String, SourceError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        fetch_http(client, location).await
    } else {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| SourceError::with_source(format!("read {location}"), e))
    }
}

async fn fetch_http(client: &reqwest::Client, url: &str) -> Result<String, SourceError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::with_source(format!("fetch {url}"), e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(SourceError::new(format!("{url}: upstream HTTP {status}")));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| SourceError::with_source(format!("read {url}"), e))?;

    if bytes.len() > MAX_BYTES {
        return Err(SourceError::new(format!(
            "{url}: payload too large (max {MAX_BYTES} bytes)"
        )));
    }

    String::from_utf8(bytes.to_vec())
        .map_err(|_| SourceError::new(format!("{url}: response was not valid UTF-8")))
}
