//! Mapping of GitHub pull request metadata onto Notion page content.
//!
//! Everything here is pure: the migration fetches data, hands it to
//! [`build_properties`] and [`page_body`], and writes whatever comes back.

mod body;
mod labels;
mod reviewers;
mod status;
mod tag_set;

pub use body::{
    MAX_TEXT_CHARS, TRUNCATED_CHARS, comment_paragraph, page_body, truncate_comment_body,
};
pub use labels::{LABEL_ROUTES, LabelRoute, LabelTags, route_for, route_labels};
pub use reviewers::{ReviewerPartition, contributors, partition_reviewers};
pub use status::StatusTag;
pub use tag_set::TagSet;

use chrono::{DateTime, Utc};

use crate::github::{PullRequest, Review};
use crate::notion::{Color, Properties, PropertyValue, RichText, SelectOption};

/// Database column names written by the migration.
pub mod columns {
    /// Page title.
    pub const NAME: &str = "Name";
    /// Review outcome.
    pub const STATUS: &str = "Status";
    /// Document type.
    pub const TYPE: &str = "Type";
    /// Pull request creation date.
    pub const CREATED_AT: &str = "Created At";
    /// Pull request author.
    pub const DRIVER: &str = "Driver";
    /// Approving reviewers.
    pub const ACCOUNTABLE: &str = "Accountable";
    /// Requested reviewers.
    pub const CONTRIBUTORS: &str = "Contributors";
    /// Other reviewers and label-derived teams.
    pub const INFORMED: &str = "Informed";
    /// Label-derived surfaces.
    pub const SERVICES_SURFACES: &str = "Services/Surfaces";
}

/// Type tag given to every migrated pull request.
pub const LEGACY_TYPE: &str = "legacy";

const LIST_SEPARATOR: &str = ", ";

/// Normalised properties for one pull request page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetProperties {
    /// Page title.
    pub title: String,
    /// Review outcome.
    pub status: StatusTag,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Author login.
    pub driver: Option<String>,
    /// Approving reviewers.
    pub accountable: Vec<String>,
    /// Requested reviewers.
    pub contributors: Vec<String>,
    /// Non-approving reviewers followed by label-derived teams.
    pub informed: Vec<String>,
    /// Label-derived surfaces.
    pub services_surfaces: Vec<String>,
}

/// Derives page properties from a pull request and its reviews.
#[must_use]
pub fn build_properties(pull_request: &PullRequest, reviews: &[Review]) -> TargetProperties {
    let partition = partition_reviewers(reviews);
    let label_tags = route_labels(&pull_request.labels);

    let mut informed = partition.informed;
    informed.extend(label_tags.informed.as_slice());

    TargetProperties {
        title: pull_request.title.clone(),
        status: StatusTag::derive(pull_request.state, pull_request.merged_at),
        created_at: pull_request.created_at,
        driver: pull_request.author.clone(),
        accountable: partition.accountable.into_vec(),
        contributors: contributors(&pull_request.requested_reviewers).into_vec(),
        informed: informed.into_vec(),
        services_surfaces: label_tags.surfaces.into_vec(),
    }
}

/// Joins a list into one rich-text run, capped like comment bodies so the
/// run stays within Notion's per-text limit.
fn joined_text(values: &[String]) -> PropertyValue {
    PropertyValue::RichText {
        rich_text: vec![RichText::plain(truncate_comment_body(
            &values.join(LIST_SEPARATOR),
        ))],
    }
}

impl TargetProperties {
    /// Converts the properties into the Notion column map.
    ///
    /// `Driver` is omitted when the pull request has no author.
    #[must_use]
    pub fn to_notion(&self) -> Properties {
        let mut properties = Properties::new();
        properties.insert(
            columns::NAME.to_owned(),
            PropertyValue::Title {
                title: vec![RichText::plain(self.title.as_str())],
            },
        );
        properties.insert(
            columns::STATUS.to_owned(),
            PropertyValue::MultiSelect {
                multi_select: vec![self.status.option()],
            },
        );
        properties.insert(
            columns::TYPE.to_owned(),
            PropertyValue::MultiSelect {
                multi_select: vec![SelectOption::new(LEGACY_TYPE, Color::Blue)],
            },
        );
        properties.insert(
            columns::CREATED_AT.to_owned(),
            PropertyValue::Date {
                date: crate::notion::model::DateValue {
                    start: self.created_at,
                },
            },
        );
        if let Some(driver) = self.driver.as_deref() {
            properties.insert(
                columns::DRIVER.to_owned(),
                PropertyValue::RichText {
                    rich_text: vec![RichText::plain(driver)],
                },
            );
        }
        properties.insert(columns::ACCOUNTABLE.to_owned(), joined_text(&self.accountable));
        properties.insert(columns::CONTRIBUTORS.to_owned(), joined_text(&self.contributors));
        properties.insert(columns::INFORMED.to_owned(), joined_text(&self.informed));
        properties.insert(
            columns::SERVICES_SURFACES.to_owned(),
            PropertyValue::MultiSelect {
                multi_select: self
                    .services_surfaces
                    .iter()
                    .map(|surface| SelectOption::new(surface.as_str(), Color::Blue))
                    .collect(),
            },
        );
        properties
    }
}

#[cfg(test)]
mod tests;
