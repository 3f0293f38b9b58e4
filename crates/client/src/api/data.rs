//! Tabular data queries.

use crate::client::CensusClient;
use crate::error::CensusResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vintage used by population queries when none is given.
pub const DEFAULT_POPULATION_VINTAGE: &str = "2022";

/// Dataset used by population queries when none is given.
pub const DEFAULT_POPULATION_DATASET: &str = "acs/acs5";

/// Total population estimate.
pub const TOTAL_POPULATION_VARIABLE: &str = "B01001_001E";

/// Tabular data API.
pub struct DataApi<'a> {
    client: &'a CensusClient,
}

impl<'a> DataApi<'a> {
    pub(crate) fn new(client: &'a CensusClient) -> Self {
        Self { client }
    }

    /// Run a tabular query.
    ///
    /// Requires an API key; a missing key fails before any request is made.
    /// The first row of the response becomes `headers`. `total_rows` counts
    /// every data row, while `rows` is cut to `limit` when one is given.
    pub async fn query(&self, query: &DataQuery) -> CensusResult<QueryResult> {
        let key = self.client.config.require_api_key()?;

        let mut get = String::from("NAME");
        if !query.variables.is_empty() {
            get.push(',');
            get.push_str(&query.variables.join(","));
        }

        let mut url = self
            .client
            .dataset_url(&query.vintage, &query.dataset, "")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("get", &get)
                .append_pair("for", &query.geo_for);
            if let Some(geo_in) = &query.geo_in {
                pairs.append_pair("in", geo_in);
            }
            pairs.append_pair("key", key);
        }

        let table: Option<Vec<Vec<Option<String>>>> = self.client.http.get_json_opt(url).await?;
        let result = QueryResult::from_table(table.unwrap_or_default(), query.limit);

        debug!(
            dataset = %query.dataset,
            total_rows = result.total_rows,
            returned_rows = result.rows.len(),
            "Data query complete"
        );
        Ok(result)
    }

    /// Total population for a geography.
    ///
    /// Fills in the default vintage and dataset, fixes the variable list to
    /// `B01001_001E`, and runs [`query`](Self::query).
    pub async fn population(&self, query: &PopulationQuery) -> CensusResult<QueryResult> {
        self.query(&query.to_data_query()).await
    }
}

/// Parameters for a tabular query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataQuery {
    pub vintage: String,
    pub dataset: String,
    pub variables: Vec<String>,
    pub geo_for: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Parameters for a population query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationQuery {
    pub geo_for: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vintage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl PopulationQuery {
    pub fn new(geo_for: impl Into<String>) -> Self {
        Self {
            geo_for: geo_for.into(),
            ..Default::default()
        }
    }

    pub fn to_data_query(&self) -> DataQuery {
        DataQuery {
            vintage: self
                .vintage
                .clone()
                .unwrap_or_else(|| DEFAULT_POPULATION_VINTAGE.to_string()),
            dataset: self
                .dataset
                .clone()
                .unwrap_or_else(|| DEFAULT_POPULATION_DATASET.to_string()),
            variables: vec![TOTAL_POPULATION_VARIABLE.to_string()],
            geo_for: self.geo_for.clone(),
            geo_in: self.geo_in.clone(),
            limit: self.limit,
        }
    }
}

/// Reshaped tabular response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Data rows in the response before `limit` was applied.
    pub total_rows: usize,
}

impl QueryResult {
    /// Split a raw table into header and data rows. Null cells become "".
    fn from_table(table: Vec<Vec<Option<String>>>, limit: Option<usize>) -> Self {
        let mut rows = table
            .into_iter()
            .map(|row| row.into_iter().map(Option::unwrap_or_default).collect::<Vec<_>>());

        let headers = rows.next().unwrap_or_default();
        let mut rows: Vec<Vec<String>> = rows.collect();
        let total_rows = rows.len();

        if let Some(limit) = limit {
            rows.truncate(limit);
        }

        Self {
            headers,
            rows,
            total_rows,
        }
    }
}
