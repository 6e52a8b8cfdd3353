//! Salesforce REST describe API client.
//!
//! [`OrgConnection`] wraps an authenticated `reqwest::Client` pointed at one
//! org. It exposes exactly the two describe operations the generator needs:
//! the global object listing and the per-object field describe.
//!
//! ## Testing
//!
//! The instance URL doubles as the request base URL, so tests can point a
//! connection at a wiremock server: `OrgConnection::new(mock.uri(), "token")`.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, SobjgenError};
use crate::schema::{GlobalDescribeResponse, SObjectDescribe, SObjectSummary};

/// Default Salesforce REST API version.
pub const DEFAULT_API_VERSION: &str = "62.0";

/// Request timeout for describe calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An authenticated connection to one Salesforce org.
#[derive(Debug, Clone)]
pub struct OrgConnection {
    client: Client,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl OrgConnection {
    /// Creates a connection to the org at `instance_url` using a
    /// previously obtained `access_token`.
    ///
    /// Session establishment (OAuth, sfdx auth files, ...) is the caller's
    /// concern; this type only consumes the resulting token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let instance_url = instance_url.into();
        Self {
            client: Client::builder()
                .user_agent(concat!("sobjgen/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            instance_url: instance_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Overrides the REST API version (e.g. `"60.0"`).
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// The instance URL this connection targets.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/services/data/v{}/{path}",
            self.instance_url, self.api_version
        )
    }

    /// Fetches the full SObject listing for the org (global describe).
    ///
    /// ## Errors
    ///
    /// - [`SobjgenError::Http`] on transport failure
    /// - [`SobjgenError::ObjectList`] on a non-success response; this is
    ///   fatal for a generation run
    pub async fn describe_global(&self) -> Result<Vec<SObjectSummary>> {
        let url = self.rest_url("sobjects");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SobjgenError::ObjectList { status, message });
        }

        let body: GlobalDescribeResponse = response.json().await?;
        Ok(body.sobjects)
    }

    /// Fetches the full field metadata for one SObject.
    ///
    /// ## Errors
    ///
    /// - [`SobjgenError::Http`] on transport failure
    /// - [`SobjgenError::Describe`] on a non-success response; scoped to
    ///   `name` and absorbed per-object by the generator
    pub async fn describe_sobject(&self, name: &str) -> Result<SObjectDescribe> {
        let url = self.rest_url(&format!("sobjects/{name}/describe"));
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SobjgenError::Describe {
                object: name.to_string(),
                status,
                message,
            });
        }

        Ok(response.json().await?)
    }
}
