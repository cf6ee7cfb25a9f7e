//! Wire types for the Notion pages and blocks endpoints.
//!
//! Only the subset of the Notion object model this tool writes is modelled.
//! Every enum serialises with an internal `type` tag, matching the shape
//! Notion expects, e.g. `{"type": "multi_select", "multi_select": [...]}`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MigrationError, Service};

/// Notion integration token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationToken(String);

impl IntegrationToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, MigrationError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MigrationError::MissingToken {
                service: Service::Notion,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

/// Identifier of the database pages are created in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Validates that the identifier is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `MigrationError::MissingDatabaseId` when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, MigrationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MigrationError::MissingDatabaseId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Option colours accepted by select and multi-select properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Brown.
    Brown,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Red.
    Red,
}

/// One option of a multi-select property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Option label; Notion creates it on first use.
    pub name: String,
    /// Colour used when Notion creates the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SelectOption {
    /// Creates an option with an explicit colour.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color: Some(color),
        }
    }
}

/// Hyperlink target of a text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Absolute URL.
    pub url: String,
}

/// Content of a plain text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    /// The text itself.
    pub content: String,
    /// Optional hyperlink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// A rich text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    /// Plain text, optionally linked.
    Text {
        /// Text payload.
        text: TextContent,
    },
}

impl RichText {
    /// Creates an unlinked text run.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::Text {
            text: TextContent {
                content: content.into(),
                link: None,
            },
        }
    }

    /// Creates a text run that links to `url`.
    #[must_use]
    pub fn linked(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Text {
            text: TextContent {
                content: content.into(),
                link: Some(Link { url: url.into() }),
            },
        }
    }

    /// Returns the text of the run.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text { text } => text.content.as_str(),
        }
    }
}

/// Start of a date property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateValue {
    /// ISO 8601 start timestamp.
    pub start: DateTime<Utc>,
}

/// A typed page property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// The page title.
    Title {
        /// Title runs.
        title: Vec<RichText>,
    },
    /// Free-form text.
    RichText {
        /// Text runs.
        rich_text: Vec<RichText>,
    },
    /// A set of tag options.
    MultiSelect {
        /// Selected options.
        multi_select: Vec<SelectOption>,
    },
    /// A date.
    Date {
        /// Date payload.
        date: DateValue,
    },
}

/// Page properties keyed by the database column name.
pub type Properties = BTreeMap<String, PropertyValue>;

/// Text payload shared by headings and paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockText {
    /// Text runs.
    pub rich_text: Vec<RichText>,
}

/// A content block appended to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    /// Top-level heading.
    #[serde(rename = "heading_1")]
    Heading1 {
        /// Heading text.
        heading_1: BlockText,
    },
    /// Second-level heading.
    #[serde(rename = "heading_2")]
    Heading2 {
        /// Heading text.
        heading_2: BlockText,
    },
    /// Paragraph.
    #[serde(rename = "paragraph")]
    Paragraph {
        /// Paragraph text.
        paragraph: BlockText,
    },
}

impl Block {
    /// Creates a top-level heading from text runs.
    #[must_use]
    pub const fn heading_1(rich_text: Vec<RichText>) -> Self {
        Self::Heading1 {
            heading_1: BlockText { rich_text },
        }
    }

    /// Creates a second-level heading from text runs.
    #[must_use]
    pub const fn heading_2(rich_text: Vec<RichText>) -> Self {
        Self::Heading2 {
            heading_2: BlockText { rich_text },
        }
    }

    /// Creates a paragraph from text runs.
    #[must_use]
    pub const fn paragraph(rich_text: Vec<RichText>) -> Self {
        Self::Paragraph {
            paragraph: BlockText { rich_text },
        }
    }

    /// Returns the text runs of the block.
    #[must_use]
    pub fn rich_text(&self) -> &[RichText] {
        match self {
            Self::Heading1 { heading_1: text }
            | Self::Heading2 { heading_2: text }
            | Self::Paragraph { paragraph: text } => &text.rich_text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DatabaseParent<'a> {
    pub(crate) database_id: &'a DatabaseId,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreatePageBody<'a> {
    pub(crate) parent: DatabaseParent<'a>,
    pub(crate) properties: &'a Properties,
    pub(crate) children: &'a [Block],
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AppendChildrenBody<'a> {
    pub(crate) children: &'a [Block],
}

/// Page returned by a successful creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPage {
    /// Page identifier.
    pub id: String,
    /// Public URL of the page.
    #[serde(default)]
    pub url: Option<String>,
}

/// Database metadata returned by the existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSummary {
    /// Database identifier as Notion reports it.
    pub id: String,
    /// Plain-text database title.
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiDatabase {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) title: Vec<ApiPlainText>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPlainText {
    #[serde(default)]
    pub(crate) plain_text: String,
}

impl From<ApiDatabase> for DatabaseSummary {
    fn from(value: ApiDatabase) -> Self {
        Self {
            id: value.id,
            title: value
                .title
                .into_iter()
                .map(|text| text.plain_text)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}
