// Data tools: tabular queries and the population shortcut

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_array, json_schema_integer, json_schema_object, json_schema_string, respond, Tool,
};
use anyhow::{Context, Result};
use census_client::{CensusClient, DataQuery, PopulationQuery};

/// Tool to run a tabular Census query
pub struct QueryDataTool {
    client: CensusClient,
}

impl QueryDataTool {
    pub fn new(client: CensusClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for QueryDataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "query_data".to_string(),
            description: "Query Census data for a set of variables and geographies. NAME is always included. Requires CENSUS_API_KEY.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "vintage": json_schema_string("Dataset year, e.g. '2022'"),
                    "dataset": json_schema_string("Dataset path, e.g. 'acs/acs5'"),
                    "variables": json_schema_array(
                        json_schema_string("Variable code"),
                        "Variable codes to fetch, e.g. ['B01001_001E']"
                    ),
                    "geo_for": json_schema_string("Geography selector, e.g. 'state:*' or 'county:037'"),
                    "geo_in": json_schema_string("Parent geography, e.g. 'state:06'"),
                    "limit": json_schema_integer("Maximum number of data rows to return")
                }),
                vec!["vintage", "dataset", "variables", "geo_for"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let query: DataQuery = serde_json::from_value(arguments)
            .context("Invalid arguments for query_data")?;

        respond(self.client.data().query(&query).await)
    }
}

/// Tool to fetch total population for a geography
pub struct GetPopulationTool {
    client: CensusClient,
}

impl GetPopulationTool {
    pub fn new(client: CensusClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetPopulationTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_population".to_string(),
            description: "Get total population (B01001_001E) for a geography. Defaults to the 2022 ACS 5-year dataset. Requires CENSUS_API_KEY.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "geo_for": json_schema_string("Geography selector, e.g. 'state:06' or 'county:*'"),
                    "geo_in": json_schema_string("Parent geography, e.g. 'state:06'"),
                    "vintage": json_schema_string("Dataset year (default '2022')"),
                    "dataset": json_schema_string("Dataset path (default 'acs/acs5')"),
                    "limit": json_schema_integer("Maximum number of data rows to return")
                }),
                vec!["geo_for"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let query: PopulationQuery = serde_json::from_value(arguments)
            .context("Invalid arguments for get_population")?;

        respond(self.client.data().population(&query).await)
    }
}
