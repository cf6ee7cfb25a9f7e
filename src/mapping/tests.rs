//! Tests for pull request to page property mapping.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::json;

use super::{StatusTag, build_properties, columns};
use crate::github::{PullRequest, PullRequestState, Review, ReviewState};

#[fixture]
fn pull_request() -> PullRequest {
    PullRequest {
        number: 42,
        title: "Add desktop search".to_owned(),
        state: PullRequestState::Closed,
        created_at: Utc
            .with_ymd_and_hms(2020, 1, 2, 3, 4, 5)
            .single()
            .expect("timestamp should be valid"),
        merged_at: Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).single(),
        author: Some("octocat".to_owned()),
        requested_reviewers: vec!["erin".to_owned(), "frank".to_owned(), "erin".to_owned()],
        labels: vec![
            "desktop".to_owned(),
            "search".to_owned(),
            "surfaces".to_owned(),
            "bug".to_owned(),
        ],
        body: None,
        html_url: None,
    }
}

fn review(login: &str, state: ReviewState) -> Review {
    Review {
        reviewer: Some(login.to_owned()),
        state,
    }
}

#[rstest]
fn builds_deduplicated_raci_properties(pull_request: PullRequest) {
    let reviews = vec![
        review("alice", ReviewState::Approved),
        review("bob", ReviewState::Commented),
        review("alice", ReviewState::Approved),
    ];

    let properties = build_properties(&pull_request, &reviews);

    assert_eq!(properties.title, "Add desktop search");
    assert_eq!(properties.status, StatusTag::Approved);
    assert_eq!(properties.driver.as_deref(), Some("octocat"));
    assert_eq!(properties.accountable, vec!["alice"]);
    assert_eq!(properties.contributors, vec!["erin", "frank"]);
    assert_eq!(properties.informed, vec!["bob", "guild-surfaces", "search"]);
    assert_eq!(properties.services_surfaces, vec!["desktop"]);
}

#[rstest]
fn reviewer_matching_a_team_tag_is_listed_once(mut pull_request: PullRequest) {
    pull_request.labels = vec!["sre".to_owned()];
    let reviews = vec![review("sre", ReviewState::Commented)];

    let properties = build_properties(&pull_request, &reviews);

    assert_eq!(properties.informed, vec!["sre"]);
}

#[rstest]
fn notion_properties_cover_every_column(pull_request: PullRequest) {
    let reviews = vec![review("alice", ReviewState::Approved)];

    let notion = build_properties(&pull_request, &reviews).to_notion();
    let value = serde_json::to_value(&notion).expect("properties should serialise");

    assert_eq!(
        value[columns::NAME],
        json!({
            "type": "title",
            "title": [{ "type": "text", "text": { "content": "Add desktop search" } }]
        })
    );
    assert_eq!(
        value[columns::STATUS],
        json!({
            "type": "multi_select",
            "multi_select": [{ "name": "Approved", "color": "green" }]
        })
    );
    assert_eq!(
        value[columns::TYPE],
        json!({
            "type": "multi_select",
            "multi_select": [{ "name": "legacy", "color": "blue" }]
        })
    );
    assert_eq!(
        value[columns::CREATED_AT],
        json!({ "type": "date", "date": { "start": "2020-01-02T03:04:05Z" } })
    );
    assert_eq!(
        value[columns::CONTRIBUTORS]["rich_text"][0]["text"]["content"],
        "erin, frank"
    );
    assert_eq!(
        value[columns::SERVICES_SURFACES]["multi_select"],
        json!([{ "name": "desktop", "color": "blue" }])
    );
    assert_eq!(notion.len(), 9);
}

#[rstest]
fn driver_is_omitted_without_author(mut pull_request: PullRequest) {
    pull_request.author = None;

    let notion = build_properties(&pull_request, &[]).to_notion();

    assert!(!notion.contains_key(columns::DRIVER));
    assert_eq!(notion.len(), 8);
}

#[rstest]
fn empty_lists_serialise_as_empty_text(mut pull_request: PullRequest) {
    pull_request.requested_reviewers.clear();
    pull_request.labels.clear();

    let notion = build_properties(&pull_request, &[]).to_notion();
    let value = serde_json::to_value(&notion).expect("properties should serialise");

    assert_eq!(
        value[columns::ACCOUNTABLE]["rich_text"][0]["text"]["content"],
        ""
    );
    assert_eq!(value[columns::SERVICES_SURFACES]["multi_select"], json!([]));
}

#[rstest]
fn oversized_lists_are_capped_to_one_text_run(mut pull_request: PullRequest) {
    pull_request.requested_reviewers = (0..400).map(|index| format!("reviewer-{index:04}")).collect();

    let notion = build_properties(&pull_request, &[]).to_notion();
    let value = serde_json::to_value(&notion).expect("properties should serialise");
    let content = value[columns::CONTRIBUTORS]["rich_text"][0]["text"]["content"]
        .as_str()
        .expect("contributors should be text");

    assert_eq!(content.chars().count(), 1993);
    assert!(content.starts_with("reviewer-0000, reviewer-0001"), "{content}");
    assert!(content.ends_with("..."), "{content}");
}

#[rstest]
fn lists_at_the_limit_are_kept_whole(mut pull_request: PullRequest) {
    // 200 names of 8 chars plus 199 separators = 1998 chars.
    pull_request.requested_reviewers = (0..200).map(|index| format!("user{index:04}")).collect();

    let notion = build_properties(&pull_request, &[]).to_notion();
    let value = serde_json::to_value(&notion).expect("properties should serialise");
    let content = value[columns::CONTRIBUTORS]["rich_text"][0]["text"]["content"]
        .as_str()
        .expect("contributors should be text");

    assert_eq!(content.chars().count(), 1998);
    assert!(content.ends_with("user0199"), "{content}");
}
