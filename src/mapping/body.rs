//! Page body rendering: description, headings, and comment paragraphs.

use crate::github::{Comment, PullRequest};
use crate::notion::{Block, RichText};

/// Longest text Notion accepts in a single rich text run.
pub const MAX_TEXT_CHARS: usize = 2000;

/// Characters kept when a body exceeds [`MAX_TEXT_CHARS`].
pub const TRUNCATED_CHARS: usize = 1990;

const ELLIPSIS: &str = "...";
const SPEAKER_MARKER: &str = "\u{1f5e3}\u{fe0f} ";

/// Shortens text longer than [`MAX_TEXT_CHARS`] characters to its first
/// [`TRUNCATED_CHARS`] characters followed by `...`.
///
/// Lengths are counted in Unicode scalar values, so multi-byte characters
/// are never split.
///
/// # Example
///
/// ```
/// use archivist::mapping::truncate_comment_body;
///
/// let long = "x".repeat(2001);
/// assert_eq!(truncate_comment_body(&long).chars().count(), 1993);
/// assert_eq!(truncate_comment_body("short"), "short");
/// ```
#[must_use]
pub fn truncate_comment_body(body: &str) -> String {
    if body.chars().count() <= MAX_TEXT_CHARS {
        return body.to_owned();
    }

    let mut truncated: String = body.chars().take(TRUNCATED_CHARS).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Renders a comment as a paragraph: a speaker marker, the author and
/// timestamp linked to the comment, then the (possibly truncated) body.
#[must_use]
pub fn comment_paragraph(comment: &Comment) -> Block {
    let author = comment.author.as_deref().unwrap_or("unknown");
    let byline = format!(
        "{author} on {timestamp}: ",
        timestamp = comment.created_at.format("%Y-%m-%d at %H:%M")
    );

    Block::paragraph(vec![
        RichText::plain(SPEAKER_MARKER),
        RichText::linked(byline, comment.html_url.as_str()),
        RichText::plain(truncate_comment_body(&comment.body)),
    ])
}

fn heading_1(text: &str) -> Block {
    Block::heading_1(vec![RichText::plain(text)])
}

fn heading_2(text: &str) -> Block {
    Block::heading_2(vec![RichText::plain(text)])
}

/// Builds the full page body for a pull request.
///
/// Review comments come before issue comments; each stream gets its own
/// heading only when it has entries.
#[must_use]
pub fn page_body(
    pull_request: &PullRequest,
    issue_comments: &[Comment],
    review_comments: &[Comment],
) -> Vec<Block> {
    let link_text = "URL to Original PR";
    let link_heading = pull_request.html_url.as_deref().map_or_else(
        || heading_1(link_text),
        |url| Block::heading_1(vec![RichText::linked(link_text, url)]),
    );
    let description = pull_request.body.as_deref().unwrap_or_default();

    let mut blocks = vec![
        link_heading,
        heading_1("Description"),
        Block::paragraph(vec![RichText::plain(truncate_comment_body(description))]),
        heading_1("Comments"),
    ];

    if !review_comments.is_empty() {
        blocks.push(heading_2("Review comments"));
        blocks.extend(review_comments.iter().map(comment_paragraph));
    }

    if !issue_comments.is_empty() {
        blocks.push(heading_2("In-line comments"));
        blocks.extend(issue_comments.iter().map(comment_paragraph));
    }

    blocks
}
