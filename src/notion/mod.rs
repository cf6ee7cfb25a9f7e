//! Notion page creation.
//!
//! The [`PageStore`] trait is the seam the migration writes through;
//! [`NotionClient`] implements it over the Notion REST API with `reqwest`.

mod client;
mod error_mapping;
pub mod model;
mod publish;

pub use client::{DEFAULT_NOTION_API_URL, NOTION_VERSION, NotionClient};
pub use model::{
    Block, Color, CreatedPage, DatabaseId, DatabaseSummary, IntegrationToken, Properties,
    PropertyValue, RichText, SelectOption,
};
pub use publish::{MAX_CHILDREN_PER_REQUEST, publish_page};

use async_trait::async_trait;

use crate::error::MigrationError;

/// Write access to a Notion database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Retrieve database metadata, failing when it does not exist or is not
    /// shared with the integration.
    async fn database(&self, id: &DatabaseId) -> Result<DatabaseSummary, MigrationError>;

    /// Create a page in `database` with the given properties and initial
    /// children (at most [`MAX_CHILDREN_PER_REQUEST`]).
    async fn create_page(
        &self,
        database: &DatabaseId,
        properties: &Properties,
        children: &[Block],
    ) -> Result<CreatedPage, MigrationError>;

    /// Append children to an existing page or block.
    async fn append_children(
        &self,
        block_id: &str,
        children: &[Block],
    ) -> Result<(), MigrationError>;
}
