// MCP (Model Context Protocol) server exposing the Census Data API as tools

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use server::McpServer;
