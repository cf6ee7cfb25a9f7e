//! Page creation with block lists longer than one request allows.

use tracing::debug;

use crate::error::MigrationError;

use super::PageStore;
use super::model::{Block, CreatedPage, DatabaseId, Properties};

/// Most children Notion accepts in one create or append request.
pub const MAX_CHILDREN_PER_REQUEST: usize = 100;

/// Creates a page with its full body.
///
/// The first [`MAX_CHILDREN_PER_REQUEST`] blocks travel with the create
/// request and the remainder is appended in chunks of the same size.
///
/// # Errors
///
/// Propagates the first failure from the store; blocks after a failed chunk
/// are not sent.
pub async fn publish_page<S>(
    store: &S,
    database: &DatabaseId,
    properties: &Properties,
    blocks: &[Block],
) -> Result<CreatedPage, MigrationError>
where
    S: PageStore + ?Sized,
{
    let split_at = blocks.len().min(MAX_CHILDREN_PER_REQUEST);
    let (initial, remainder) = blocks.split_at(split_at);

    let page = store.create_page(database, properties, initial).await?;

    for chunk in remainder.chunks(MAX_CHILDREN_PER_REQUEST) {
        debug!(page_id = %page.id, blocks = chunk.len(), "appending page children");
        store.append_children(&page.id, chunk).await?;
    }

    Ok(page)
}
