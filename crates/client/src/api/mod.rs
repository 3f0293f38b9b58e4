//! Census Data API endpoints.

pub mod data;
pub mod datasets;
pub mod geographies;
pub mod variables;

pub use data::{DataApi, DataQuery, PopulationQuery, QueryResult};
pub use datasets::{DatasetInfo, DatasetsApi};
pub use geographies::{GeographiesApi, GeographyInfo};
pub use variables::{VariableInfo, VariablesApi, VariablesQuery};

/// Client pointed at a mock server's `/data` base with no request spacing.
#[cfg(test)]
pub(crate) fn test_client(server: &wiremock::MockServer, api_key: Option<&str>) -> crate::CensusClient {
    let mut builder = crate::CensusClient::builder()
        .base_url(format!("{}/data", server.uri()))
        .min_request_interval(std::time::Duration::ZERO);
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    builder.build().unwrap()
}
