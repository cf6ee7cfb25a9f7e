//! Status tag derived from a pull request's lifecycle.

use chrono::{DateTime, Utc};

use crate::github::PullRequestState;
use crate::notion::{Color, SelectOption};

/// Review outcome written to the `Status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    /// Merged.
    Approved,
    /// Closed without a merge.
    Shelved,
    /// Still open.
    FeedbackRequested,
}

impl StatusTag {
    /// Derives the tag from the pull request state and merge time.
    ///
    /// Open wins over everything; a closed pull request is `Shelved` unless
    /// it has a merge time.
    #[must_use]
    pub const fn derive(state: PullRequestState, merged_at: Option<DateTime<Utc>>) -> Self {
        match (state, merged_at) {
            (PullRequestState::Open, _) => Self::FeedbackRequested,
            (PullRequestState::Closed, None) => Self::Shelved,
            (PullRequestState::Closed, Some(_)) => Self::Approved,
        }
    }

    /// Option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Shelved => "Shelved",
            Self::FeedbackRequested => "Feedback Requested",
        }
    }

    /// Option colour.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Approved => Color::Green,
            Self::Shelved => Color::Red,
            Self::FeedbackRequested => Color::Brown,
        }
    }

    /// Multi-select option for this tag.
    #[must_use]
    pub fn option(self) -> SelectOption {
        SelectOption::new(self.label(), self.color())
    }
}
