// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::protocol::*;
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use futures::StreamExt;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{debug, info, warn};

pub struct McpServer {
    registry: ToolRegistry,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Serve requests on stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        info!(tools = self.registry.len(), "MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve requests read line by line from `reader`, writing one response
    /// line per request to `writer`.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, LinesCodec::new());

        while let Some(line) = lines.next().await {
            let line = line.context("Failed to read request line")?;

            if let Some(response) = self.handle_line(&line).await {
                writer
                    .write_all(response.as_bytes())
                    .await
                    .context("Failed to write response")?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle one raw input line, returning the serialized response if any.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await?,
            Err(e) => {
                warn!(error = %e, "Failed to parse request");
                JsonRpcResponse::error(serde_json::Value::Null, JsonRpcError::parse_error())
            }
        };

        match serde_json::to_string(&response) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "Failed to serialize response");
                None
            }
        }
    }

    /// Dispatch a parsed request. Notifications yield no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "Handling request");

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }
        let id = request.id.clone().unwrap_or(serde_json::Value::Null);

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize(request.params)),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => match self.call_tool(request.params).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(error) => JsonRpcResponse::error(id, error),
            },
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };

        Some(response)
    }

    fn initialize(&self, params: Option<serde_json::Value>) -> InitializeResult {
        if let Some(params) = params.and_then(|p| serde_json::from_value::<InitializeParams>(p).ok()) {
            info!(
                client = %params.client_info.name,
                client_version = %params.client_info.version,
                protocol = %params.protocol_version,
                "Client connected"
            );
        }

        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
        }
    }

    async fn call_tool(
        &self,
        params: Option<serde_json::Value>,
    ) -> std::result::Result<CallToolResult, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
            })?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        info!(tool = %params.name, "Calling tool");
        tool.execute(params.arguments)
            .await
            .map_err(|e| JsonRpcError::invalid_params(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{census_registry, test_client};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn offline_server() -> McpServer {
        let client = census_client::CensusClient::builder().build().unwrap();
        McpServer::new(census_registry(client))
    }

    async fn call(server: &McpServer, line: &str) -> serde_json::Value {
        let response = server.handle_line(line).await.expect("expected a response");
        serde_json::from_str(&response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = offline_server();
        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#,
        )
        .await;

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "census-mcp");
        assert_eq!(response["result"]["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_notification_has_no_response() {
        let server = offline_server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;

        assert!(response.is_none());
        assert!(server.handle_line("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_request_without_id_is_not_answered() {
        let server = offline_server();
        let request: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"tools/list"}"#).unwrap();

        assert!(request.is_notification());
        assert!(server.handle_request(request).await.is_none());
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = offline_server();
        let response = call(&server, r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#).await;

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 5);
        assert_eq!(tools[0]["name"], "get_geographies");
        assert_eq!(tools[3]["inputSchema"]["required"][3], "geo_for");
    }

    #[tokio::test]
    async fn test_parse_error() {
        let server = offline_server();
        let response = call(&server, "{not json").await;

        assert_eq!(response["error"]["code"], -32700);
        assert!(response["id"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = offline_server();
        let response = call(&server, r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#).await;

        assert_eq!(response["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn test_unknown_tool_and_bad_arguments() {
        let server = offline_server();

        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#,
        )
        .await;
        assert_eq!(response["error"]["code"], -32602);

        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"get_geographies","arguments":{"vintage":"2022"}}}"#,
        )
        .await;
        assert_eq!(response["error"]["code"], -32602);
        assert!(response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("get_geographies"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_key_is_tool_error() {
        let server = offline_server();
        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"get_population","arguments":{"geo_for":"state:06"}}}"#,
        )
        .await;

        assert_eq!(response["result"]["isError"], true);
        assert!(response["result"]["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("CENSUS_API_KEY"));
    }

    #[tokio::test]
    async fn test_serve_round_trip() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2022/acs/acs5/geography.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fips": [{"name": "state", "geoLevelDisplay": "040"}]
            })))
            .mount(&mock)
            .await;

        let server = McpServer::new(census_registry(test_client(&mock, None)));
        let input = concat!(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"get_geographies","arguments":{"vintage":"2022","dataset":"acs/acs5"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n",
        );

        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        let text = lines[0]["result"]["content"][0]["text"].as_str().unwrap();
        let geographies: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(geographies[0]["hierarchy"], "040");
        assert_eq!(lines[1]["id"], 2);
    }
}
