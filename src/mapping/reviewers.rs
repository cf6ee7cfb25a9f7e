//! RACI classification of reviewers and requested reviewers.

use crate::github::Review;

use super::tag_set::TagSet;

/// Reviewers split by whether they approved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewerPartition {
    /// Reviewers with at least one approving review.
    pub accountable: TagSet,
    /// Reviewers who reviewed without ever approving.
    pub informed: TagSet,
}

/// Splits review authors into approvers and everyone else.
///
/// A login lands in exactly one list: any approval makes the reviewer
/// accountable, regardless of review order. Reviews without a login are
/// skipped.
#[must_use]
pub fn partition_reviewers(reviews: &[Review]) -> ReviewerPartition {
    let approvers: TagSet = reviews
        .iter()
        .filter(|review| review.state.is_approval())
        .filter_map(|review| review.reviewer.as_deref())
        .collect();

    let mut partition = ReviewerPartition::default();
    for login in reviews.iter().filter_map(|review| review.reviewer.as_deref()) {
        if approvers.contains(login) {
            partition.accountable.insert(login);
        } else {
            partition.informed.insert(login);
        }
    }
    partition
}

/// Deduplicates requested reviewer logins, keeping first-seen order.
#[must_use]
pub fn contributors(requested_reviewers: &[String]) -> TagSet {
    requested_reviewers.iter().collect()
}
