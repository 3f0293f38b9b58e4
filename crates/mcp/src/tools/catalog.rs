// Catalog tools: dataset search, variable and geography listings

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, respond, Tool};
use anyhow::{Context, Result};
use census_client::{CensusClient, VariablesQuery};
use serde::Deserialize;

/// Tool to search the Census dataset catalog
pub struct SearchDatasetsTool {
    client: CensusClient,
}

impl SearchDatasetsTool {
    pub fn new(client: CensusClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchDatasetsArgs {
    query: String,
}

#[async_trait::async_trait]
impl Tool for SearchDatasetsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_datasets".to_string(),
            description: "Search available Census datasets by keyword. Matches titles, descriptions and dataset ids; returns at most 25 results.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string("Search text, e.g. 'american community survey' or 'acs5'")
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchDatasetsArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for search_datasets")?;

        respond(self.client.datasets().search(&args.query).await)
    }
}

/// Tool to list the variables of a dataset
pub struct GetVariablesTool {
    client: CensusClient,
}

impl GetVariablesTool {
    pub fn new(client: CensusClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetVariablesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_variables".to_string(),
            description: "List variables available in a dataset, optionally restricted to one group and filtered by a search term. Returns at most 50 results.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "vintage": json_schema_string("Dataset year, e.g. '2022'"),
                    "dataset": json_schema_string("Dataset path, e.g. 'acs/acs5'"),
                    "search": json_schema_string("Filter on variable name, label or concept"),
                    "group": json_schema_string("Variable group, e.g. 'B01001'")
                }),
                vec!["vintage", "dataset"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let query: VariablesQuery = serde_json::from_value(arguments)
            .context("Invalid arguments for get_variables")?;

        respond(self.client.variables().list(&query).await)
    }
}

/// Tool to list the geography levels of a dataset
pub struct GetGeographiesTool {
    client: CensusClient,
}

impl GetGeographiesTool {
    pub fn new(client: CensusClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetGeographiesArgs {
    vintage: String,
    dataset: String,
}

#[async_trait::async_trait]
impl Tool for GetGeographiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_geographies".to_string(),
            description: "List the geography levels (state, county, tract, ...) a dataset supports, with the parent levels each one can be nested in.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "vintage": json_schema_string("Dataset year, e.g. '2022'"),
                    "dataset": json_schema_string("Dataset path, e.g. 'acs/acs5'")
                }),
                vec!["vintage", "dataset"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GetGeographiesArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for get_geographies")?;

        respond(
            self.client
                .geographies()
                .list(&args.vintage, &args.dataset)
                .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;
    use crate::tools::test_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0] {
            ToolContent::Text { text } => text,
        }
    }

    #[tokio::test]
    async fn test_search_datasets_tool() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "dataset": [{
                    "title": "ACS 5-Year Detailed Tables",
                    "description": "Five year estimates",
                    "c_vintage": 2022,
                    "c_dataset": ["acs", "acs5"]
                }]
            })))
            .mount(&server)
            .await;

        let tool = SearchDatasetsTool::new(test_client(&server, None));
        let result = tool
            .execute(serde_json::json!({"query": "detailed"}))
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        let parsed: serde_json::Value = serde_json::from_str(text(&result)).unwrap();
        assert_eq!(parsed[0]["dataset_name"], "acs/acs5");
        assert_eq!(parsed[0]["vintage"], "2022");
    }

    #[tokio::test]
    async fn test_search_datasets_missing_query() {
        let server = MockServer::start().await;
        let tool = SearchDatasetsTool::new(test_client(&server, None));

        assert!(tool.execute(serde_json::json!({})).await.is_err());
    }

    #[tokio::test]
    async fn test_get_variables_tool_group() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2022/acs/acs5/groups/B19013.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "variables": {
                    "B19013_001E": {"label": "Estimate!!Median household income", "concept": "MEDIAN HOUSEHOLD INCOME", "group": "B19013"}
                }
            })))
            .mount(&server)
            .await;

        let tool = GetVariablesTool::new(test_client(&server, None));
        let result = tool
            .execute(serde_json::json!({
                "vintage": "2022",
                "dataset": "acs/acs5",
                "group": "B19013"
            }))
            .await
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(text(&result)).unwrap();
        assert_eq!(parsed[0]["name"], "B19013_001E");
        assert_eq!(parsed[0]["group"], "B19013");
    }

    #[tokio::test]
    async fn test_get_geographies_tool_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2022/bogus/geography.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let tool = GetGeographiesTool::new(test_client(&server, None));
        let result = tool
            .execute(serde_json::json!({"vintage": "2022", "dataset": "bogus"}))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).contains("status 404"));
        assert!(text(&result).contains("Not Found"));
    }
}
