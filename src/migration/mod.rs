//! The sequential migration flow.
//!
//! [`Migrator`] confirms the target database exists, lists open then closed
//! pull requests, and for each one fetches reviews and comments, maps them,
//! and (outside dry-run) publishes a page. The first error stops the run.

use tracing::{debug, info, warn};

use crate::error::MigrationError;
use crate::github::{PullRequest, PullRequestSource, PullRequestState, RepositoryLocator};
use crate::mapping::{build_properties, page_body};
use crate::notion::{Block, CreatedPage, DatabaseId, DatabaseSummary, PageStore, Properties, publish_page};

/// Listing order: open pull requests first, then closed ones.
pub const LISTING_ORDER: [PullRequestState; 2] =
    [PullRequestState::Open, PullRequestState::Closed];

/// Run-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Database pages are created in.
    pub database: DatabaseId,
    /// When true, pages are prepared but never written.
    pub dry_run: bool,
}

/// Content prepared for one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPage {
    /// Pull request number.
    pub number: u64,
    /// Column values.
    pub properties: Properties,
    /// Page body.
    pub blocks: Vec<Block>,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Target database metadata.
    pub database: DatabaseSummary,
    /// Whether writes were suppressed.
    pub dry_run: bool,
    /// Number of pull requests mapped.
    pub processed: usize,
    /// Pages created, in processing order.
    pub created: Vec<CreatedPage>,
}

/// Drives a migration from a pull request source into a page store.
pub struct Migrator<'client, Source, Store>
where
    Source: PullRequestSource,
    Store: PageStore,
{
    source: &'client Source,
    store: &'client Store,
    locator: &'client RepositoryLocator,
}

impl<'client, Source, Store> Migrator<'client, Source, Store>
where
    Source: PullRequestSource,
    Store: PageStore,
{
    /// Creates a migrator for one repository.
    #[must_use]
    pub const fn new(
        source: &'client Source,
        store: &'client Store,
        locator: &'client RepositoryLocator,
    ) -> Self {
        Self {
            source,
            store,
            locator,
        }
    }

    /// Runs the migration.
    ///
    /// # Errors
    ///
    /// Returns the first failure from either API; pull requests after the
    /// failing one are not processed.
    pub async fn run(&self, options: &MigrationOptions) -> Result<MigrationReport, MigrationError> {
        let database = self.store.database(&options.database).await?;
        info!(database = %database.title, id = %database.id, "found target database");

        let pull_requests = self.collect_pull_requests().await?;
        info!(count = pull_requests.len(), "processing pull requests");
        if options.dry_run {
            warn!("dry run: pages will be prepared but not created");
        }

        let mut report = MigrationReport {
            database,
            dry_run: options.dry_run,
            processed: 0,
            created: Vec::new(),
        };

        for pull_request in &pull_requests {
            let page = self.prepare_page(pull_request).await?;
            report.processed += 1;

            if options.dry_run {
                debug!(
                    number = page.number,
                    blocks = page.blocks.len(),
                    "skipping page creation"
                );
                continue;
            }

            let created =
                publish_page(self.store, &options.database, &page.properties, &page.blocks)
                    .await?;
            info!(
                number = page.number,
                url = created.url.as_deref().unwrap_or("(no url)"),
                "created page"
            );
            report.created.push(created);
        }

        Ok(report)
    }

    /// Lists every pull request in [`LISTING_ORDER`].
    ///
    /// # Errors
    ///
    /// Propagates the first listing failure.
    pub async fn collect_pull_requests(&self) -> Result<Vec<PullRequest>, MigrationError> {
        let mut pull_requests = Vec::new();
        for state in LISTING_ORDER {
            let batch = self.source.list_pull_requests(self.locator, state).await?;
            debug!(state = state.as_str(), count = batch.len(), "listed pull requests");
            pull_requests.extend(batch);
        }
        Ok(pull_requests)
    }

    /// Fetches reviews and both comment streams for a pull request and maps
    /// them into page content.
    ///
    /// # Errors
    ///
    /// Propagates the first fetch failure.
    pub async fn prepare_page(
        &self,
        pull_request: &PullRequest,
    ) -> Result<PreparedPage, MigrationError> {
        let number = pull_request.number;
        debug!(number, title = %pull_request.title, "preparing page");

        let reviews = self.source.list_reviews(self.locator, number).await?;
        let properties = build_properties(pull_request, &reviews).to_notion();

        let issue_comments = self
            .source
            .list_issue_comments(self.locator, number)
            .await?;
        let review_comments = self
            .source
            .list_review_comments(self.locator, number)
            .await?;

        Ok(PreparedPage {
            number,
            properties,
            blocks: page_body(pull_request, &issue_comments, &review_comments),
        })
    }
}
