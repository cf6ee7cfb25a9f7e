//! `reqwest` implementation of [`PageStore`] over the Notion REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{MigrationError, Service};

use super::PageStore;
use super::error_mapping::{map_status_error, map_transport_error};
use super::model::{
    ApiDatabase, AppendChildrenBody, Block, CreatePageBody, CreatedPage, DatabaseId,
    DatabaseParent, DatabaseSummary, IntegrationToken, Properties,
};

/// Public Notion REST API base.
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Notion API client.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    base_url: String,
    token: IntegrationToken,
}

impl NotionClient {
    /// Creates a client for the given integration token and API base URL.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::InvalidUrl` when the base URL cannot be parsed
    /// or `MigrationError::Configuration` when the HTTP client cannot be built.
    pub fn new(token: IntegrationToken, base_url: &str) -> Result<Self, MigrationError> {
        Url::parse(base_url).map_err(|error| MigrationError::InvalidUrl(error.to_string()))?;

        let http = Client::builder()
            .build()
            .map_err(|error| MigrationError::Configuration {
                message: format!("failed to configure Notion HTTP client: {error}"),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn authorised(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(self.token.value())
            .header("Notion-Version", NOTION_VERSION)
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response, MigrationError> {
        let response = self
            .authorised(request)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "(failed to read error response body)".to_owned());
        Err(map_status_error(operation, status, &body))
    }

    async fn send_json<T>(&self, operation: &str, request: RequestBuilder) -> Result<T, MigrationError>
    where
        T: DeserializeOwned,
    {
        self.send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|error| MigrationError::Api {
                service: Service::Notion,
                message: format!("{operation} response could not be decoded: {error}"),
            })
    }
}

#[async_trait]
impl PageStore for NotionClient {
    async fn database(&self, id: &DatabaseId) -> Result<DatabaseSummary, MigrationError> {
        let request = self
            .http
            .get(self.endpoint(&format!("databases/{}", id.as_str())));
        let database: ApiDatabase = self.send_json("retrieve database", request).await?;
        Ok(database.into())
    }

    async fn create_page(
        &self,
        database: &DatabaseId,
        properties: &Properties,
        children: &[Block],
    ) -> Result<CreatedPage, MigrationError> {
        let body = CreatePageBody {
            parent: DatabaseParent {
                database_id: database,
            },
            properties,
            children,
        };
        let request = self.http.post(self.endpoint("pages")).json(&body);
        self.send_json("create page", request).await
    }

    async fn append_children(
        &self,
        block_id: &str,
        children: &[Block],
    ) -> Result<(), MigrationError> {
        let body = AppendChildrenBody { children };
        let request = self
            .http
            .patch(self.endpoint(&format!("blocks/{block_id}/children")))
            .json(&body);
        self.send("append children", request).await.map(drop)
    }
}
