//! # census-client
//!
//! Rate-limited client for the [US Census Bureau Data API](https://www.census.gov/data/developers.html).
//!
//! Every request goes through a shared rate gate that keeps successive
//! requests at least 200 ms apart. Responses are reshaped into small typed
//! records.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use census_client::{CensusClient, CensusResult, PopulationQuery};
//!
//! #[tokio::main]
//! async fn main() -> CensusResult<()> {
//!     let client = CensusClient::builder()
//!         .api_key_from_env()
//!         .build()?;
//!
//!     let datasets = client.datasets().search("acs5").await?;
//!     println!("Found {} datasets", datasets.len());
//!
//!     let population = client
//!         .data()
//!         .population(&PopulationQuery::new("state:06"))
//!         .await?;
//!     println!("{:?}", population.rows);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod rate_gate;
pub mod transport;

pub use api::{
    DataQuery, DatasetInfo, GeographyInfo, PopulationQuery, QueryResult, VariableInfo,
    VariablesQuery,
};
pub use client::{CensusClient, CensusClientBuilder};
pub use config::ClientConfig;
pub use error::{CensusError, CensusResult};
pub use rate_gate::RateGate;
