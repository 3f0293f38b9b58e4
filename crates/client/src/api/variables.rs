//! Variable listing endpoints.

use crate::client::CensusClient;
use crate::error::CensusResult;
use serde::{Deserialize, Serialize};

/// Maximum number of variables returned by a listing.
pub const MAX_VARIABLE_RESULTS: usize = 50;

/// Variables API.
pub struct VariablesApi<'a> {
    client: &'a CensusClient,
}

impl<'a> VariablesApi<'a> {
    pub(crate) fn new(client: &'a CensusClient) -> Self {
        Self { client }
    }

    /// List variables of a dataset, or of one group within it.
    ///
    /// With `group` set the group endpoint is used instead of the full
    /// listing. The optional `search` filter is applied afterwards against
    /// name, label and concept. Source order is kept and at most
    /// [`MAX_VARIABLE_RESULTS`] entries are returned.
    pub async fn list(&self, query: &VariablesQuery) -> CensusResult<Vec<VariableInfo>> {
        let suffix = match &query.group {
            Some(group) => format!("/groups/{}.json", group),
            None => "/variables.json".to_string(),
        };
        let url = self
            .client
            .dataset_url(&query.vintage, &query.dataset, &suffix)?;

        let listing: VariableListing = self.client.http.get_json(url).await?;
        let needle = query.search.as_deref().map(str::to_lowercase);

        let mut variables = Vec::new();
        for (name, meta) in listing.variables {
            let meta: VariableMeta = serde_json::from_value(meta)?;
            let info = VariableInfo {
                name,
                label: meta.label,
                concept: meta.concept,
                group: meta.group,
            };

            if needle.as_deref().is_some_and(|n| !info.matches(n)) {
                continue;
            }

            variables.push(info);
            if variables.len() == MAX_VARIABLE_RESULTS {
                break;
            }
        }

        Ok(variables)
    }
}

/// Parameters for a variable listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariablesQuery {
    pub vintage: String,
    pub dataset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl VariablesQuery {
    pub fn new(vintage: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            vintage: vintage.into(),
            dataset: dataset.into(),
            search: None,
            group: None,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// A single dataset variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    pub label: String,
    pub concept: String,
    pub group: String,
}

impl VariableInfo {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.label.to_lowercase().contains(needle)
            || self.concept.to_lowercase().contains(needle)
    }
}

/// `variables` is kept as an ordered JSON map so entries come back in the
/// order the API sent them.
#[derive(Debug, Deserialize)]
struct VariableListing {
    #[serde(default)]
    variables: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct VariableMeta {
    #[serde(default)]
    label: String,
    #[serde(default)]
    concept: String,
    #[serde(default)]
    group: String,
}
