//! Indexer GraphQL client for project metadata

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use launchpad_core::prelude::*;
use launchpad_core::{AccountId, Project, ProjectId};

use crate::rpc::client::http_error;

pub const LAUNCHPAD_PROJECT_OPERATION: &str = "LaunchPadProject";

pub const LAUNCHPAD_PROJECT_QUERY: &str = r#"query LaunchPadProject(
  $accountId: String!
  $projectId: String!
) {
  launchpad_project(account_id: $accountId, project_id: $projectId) {
    project_id
    listing_id
    project_name
    description
    image
    project_token
    price_token
    project_token_info { symbol decimals }
    price_token_info { symbol decimals }
    token_allocation_price
    token_allocation_size
    total_amount_sale_project_tokens
    allocations_sold
    open_sale_1_timestamp
    final_sale_2_timestamp
    status
    public
  }
}"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: Value,
}

/// Standard GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LaunchpadProjectData {
    pub launchpad_project: Option<Project>,
}

/// Variables for the project query. Anonymous sessions send an empty account.
pub fn project_variables(account_id: Option<&AccountId>, project_id: &ProjectId) -> Value {
    json!({
        "accountId": account_id.map(|a| a.as_str()).unwrap_or(""),
        "projectId": project_id.as_str(),
    })
}

/// Extract the project from a decoded response.
///
/// Any entry in `errors` fails the whole query. A `null` project is `Ok(None)`.
pub fn project_from_response(
    response: GraphQlResponse<LaunchpadProjectData>,
) -> Result<Option<Project>> {
    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(Error::query(messages.join("; ")));
    }
    Ok(response.data.and_then(|d| d.launchpad_project))
}

#[derive(Debug)]
pub struct GraphQlClient {
    client: Client,
    url: String,
}

impl GraphQlClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch listing metadata for a project, scoped to the account if any.
    pub async fn launchpad_project(
        &self,
        account_id: Option<&AccountId>,
        project_id: &ProjectId,
    ) -> Result<Option<Project>> {
        let request = GraphQlRequest {
            query: LAUNCHPAD_PROJECT_QUERY,
            operation_name: LAUNCHPAD_PROJECT_OPERATION,
            variables: project_variables(account_id, project_id),
        };

        debug!("{} {}", LAUNCHPAD_PROJECT_OPERATION, request.variables);

        let response: GraphQlResponse<LaunchpadProjectData> = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?
            .json()
            .await
            .map_err(http_error)?;

        project_from_response(response)
    }
}
