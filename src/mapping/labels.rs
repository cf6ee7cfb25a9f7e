//! Static routing of pull request labels to team and surface tags.

use super::tag_set::TagSet;

/// Tags a single label contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRoute {
    /// Label name as it appears on GitHub.
    pub label: &'static str,
    /// Teams to list under `Informed`.
    pub informed: &'static [&'static str],
    /// Entries for `Services/Surfaces`.
    pub surfaces: &'static [&'static str],
}

/// Known labels and the tags they route to. Labels not listed route nowhere.
pub const LABEL_ROUTES: &[LabelRoute] = &[
    LabelRoute {
        label: "data",
        informed: &["data"],
        surfaces: &[],
    },
    LabelRoute {
        label: "desktop",
        informed: &["guild-surfaces"],
        surfaces: &["desktop"],
    },
    LabelRoute {
        label: "marketplace-core",
        informed: &["monetization"],
        surfaces: &[],
    },
    LabelRoute {
        label: "search",
        informed: &["search"],
        surfaces: &[],
    },
    LabelRoute {
        label: "sig-backend",
        informed: &["guild-api"],
        surfaces: &[],
    },
    LabelRoute {
        label: "sre",
        informed: &["sre"],
        surfaces: &[],
    },
    LabelRoute {
        label: "studio",
        informed: &["ltb"],
        surfaces: &[],
    },
    LabelRoute {
        label: "surfaces",
        informed: &["guild-surfaces"],
        surfaces: &[],
    },
    LabelRoute {
        label: "vert-cc",
        informed: &["ltb"],
        surfaces: &[],
    },
    LabelRoute {
        label: "vert-gear",
        informed: &["creator tools", "monetization"],
        surfaces: &[],
    },
    LabelRoute {
        label: "vert-sounds",
        informed: &["catalog"],
        surfaces: &[],
    },
];

/// Looks up the route for a label.
#[must_use]
pub fn route_for(label: &str) -> Option<&'static LabelRoute> {
    LABEL_ROUTES.iter().find(|route| route.label == label)
}

/// Tags accumulated from a pull request's labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTags {
    /// Deduplicated team tags.
    pub informed: TagSet,
    /// Deduplicated surface tags.
    pub surfaces: TagSet,
}

/// Routes every label through [`LABEL_ROUTES`], returning the deduplicated
/// union of the per-label tags in first-seen order.
#[must_use]
pub fn route_labels<I, S>(labels: I) -> LabelTags
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = LabelTags::default();
    for route in labels
        .into_iter()
        .filter_map(|label| route_for(label.as_ref()))
    {
        tags.informed.extend(route.informed);
        tags.surfaces.extend(route.surfaces);
    }
    tags
}
