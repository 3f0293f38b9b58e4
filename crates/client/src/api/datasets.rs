//! Dataset catalog endpoints.

use crate::client::CensusClient;
use crate::error::CensusResult;
use serde::{Deserialize, Serialize};

/// Maximum number of catalog matches returned by a search.
pub const MAX_DATASET_RESULTS: usize = 25;

/// Descriptions longer than this many characters are cut.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Dataset catalog API.
pub struct DatasetsApi<'a> {
    client: &'a CensusClient,
}

impl<'a> DatasetsApi<'a> {
    pub(crate) fn new(client: &'a CensusClient) -> Self {
        Self { client }
    }

    /// Search the dataset catalog.
    ///
    /// Matches `query` case-insensitively against each entry's title,
    /// description and slash-joined dataset id, in catalog order, returning
    /// at most [`MAX_DATASET_RESULTS`] entries.
    pub async fn search(&self, query: &str) -> CensusResult<Vec<DatasetInfo>> {
        let url = self.client.catalog_url()?;
        let catalog: Catalog = self.client.http.get_json(url).await?;

        let needle = query.to_lowercase();
        let base = self.client.config.base();

        Ok(catalog
            .dataset
            .into_iter()
            .filter(|entry| entry.matches(&needle))
            .take(MAX_DATASET_RESULTS)
            .map(|entry| entry.into_info(base))
            .collect())
    }
}

/// A dataset matched by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub title: String,
    pub description: String,
    pub vintage: String,
    pub dataset_name: String,
    pub dataset_url: String,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default)]
    dataset: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    c_vintage: Option<Vintage>,
    #[serde(default)]
    c_dataset: Vec<String>,
}

/// Catalog vintages are numeric years, but some entries carry strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Vintage {
    Year(i64),
    Text(String),
}

impl CatalogEntry {
    fn dataset_name(&self) -> String {
        self.c_dataset.join("/")
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.dataset_name().to_lowercase().contains(needle)
    }

    fn into_info(self, base: &str) -> DatasetInfo {
        let dataset_name = self.dataset_name();
        let vintage = match self.c_vintage {
            Some(Vintage::Year(year)) => year.to_string(),
            Some(Vintage::Text(text)) => text,
            None => String::new(),
        };
        let dataset_url = if vintage.is_empty() {
            format!("{}/{}", base, dataset_name)
        } else {
            format!("{}/{}/{}", base, vintage, dataset_name)
        };

        DatasetInfo {
            title: self.title,
            description: truncate_chars(&self.description, DESCRIPTION_MAX_CHARS),
            vintage,
            dataset_name,
            dataset_url,
        }
    }
}

/// First `max` characters of `text`, never splitting a code point.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
