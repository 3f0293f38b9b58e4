pub mod catalog;
pub mod data;
mod registry;

pub use catalog::{GetGeographiesTool, GetVariablesTool, SearchDatasetsTool};
pub use data::{GetPopulationTool, QueryDataTool};
pub use registry::{
    json_schema_array, json_schema_integer, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};

use crate::protocol::CallToolResult;
use anyhow::{Context, Result};
use census_client::{CensusClient, CensusResult};
use serde::Serialize;
use std::sync::Arc;

/// Registry with every Census tool, all sharing one client (and rate gate).
pub fn census_registry(client: CensusClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(SearchDatasetsTool::new(client.clone())));
    registry.register(Arc::new(GetVariablesTool::new(client.clone())));
    registry.register(Arc::new(GetGeographiesTool::new(client.clone())));
    registry.register(Arc::new(QueryDataTool::new(client.clone())));
    registry.register(Arc::new(GetPopulationTool::new(client)));

    registry
}

/// Render a client result as tool output: pretty JSON on success, an error
/// result carrying the client error message otherwise.
pub(crate) fn respond<T: Serialize>(result: CensusResult<T>) -> Result<CallToolResult> {
    match result {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value)
                .context("Failed to serialize tool output")?;
            Ok(CallToolResult::text(text))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Census request failed");
            Ok(CallToolResult::error(e.to_string()))
        }
    }
}

#[cfg(test)]
pub(crate) fn test_client(server: &wiremock::MockServer, api_key: Option<&str>) -> CensusClient {
    let mut builder = CensusClient::builder()
        .base_url(format!("{}/data", server.uri()))
        .min_request_interval(std::time::Duration::ZERO);
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    builder.build().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_registry_tools() {
        let client = CensusClient::builder().build().unwrap();
        let registry = census_registry(client);

        let names: Vec<_> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "get_geographies",
                "get_population",
                "get_variables",
                "query_data",
                "search_datasets"
            ]
        );
    }
}
