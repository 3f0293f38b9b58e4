//! Geography metadata endpoints.

use crate::client::CensusClient;
use crate::error::CensusResult;
use serde::{Deserialize, Serialize};

/// Geographies API.
pub struct GeographiesApi<'a> {
    client: &'a CensusClient,
}

impl<'a> GeographiesApi<'a> {
    pub(crate) fn new(client: &'a CensusClient) -> Self {
        Self { client }
    }

    /// List every geography level a dataset supports, in source order.
    pub async fn list(&self, vintage: &str, dataset: &str) -> CensusResult<Vec<GeographyInfo>> {
        let url = self
            .client
            .dataset_url(vintage, dataset, "/geography.json")?;
        let listing: GeographyListing = self.client.http.get_json(url).await?;

        Ok(listing.fips.into_iter().map(GeographyInfo::from).collect())
    }
}

/// A geography level usable in `for`/`in` clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographyInfo {
    pub name: String,
    pub hierarchy: String,
    pub wildcard: Vec<String>,
    /// Parent levels that must be given in the `in` clause.
    pub requires: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeographyListing {
    #[serde(default)]
    fips: Vec<GeographyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeographyEntry {
    name: String,
    #[serde(default)]
    geo_level_display: Option<String>,
    #[serde(default)]
    geo_level_id: Option<String>,
    #[serde(default)]
    wildcard: Option<Vec<String>>,
    #[serde(default)]
    requires: Option<Vec<String>>,
}

impl From<GeographyEntry> for GeographyInfo {
    fn from(entry: GeographyEntry) -> Self {
        Self {
            name: entry.name,
            hierarchy: entry
                .geo_level_display
                .or(entry.geo_level_id)
                .unwrap_or_default(),
            wildcard: entry.wildcard.unwrap_or_default(),
            requires: entry.requires.unwrap_or_default(),
        }
    }
}
