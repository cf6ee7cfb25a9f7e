//! Exhaustive pagination over GitHub listing endpoints.

use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;

use crate::error::MigrationError;

use super::error_mapping::map_octocrab_error;

/// Largest page size GitHub accepts.
pub(super) const PER_PAGE: &str = "100";

/// Fetches the first page of `path` and follows `Link: rel="next"` headers
/// until every item has been collected.
pub(super) async fn fetch_all_pages<T>(
    client: &Octocrab,
    path: &str,
    query: &[(&str, &str)],
    operation: &str,
) -> Result<Vec<T>, MigrationError>
where
    T: DeserializeOwned,
{
    let first_page = client
        .get::<Page<T>, _, _>(path, Some(&query))
        .await
        .map_err(|error| map_octocrab_error(operation, &error))?;

    client
        .all_pages(first_page)
        .await
        .map_err(|error| map_octocrab_error(operation, &error))
}
