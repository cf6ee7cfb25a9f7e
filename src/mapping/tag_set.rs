//! Insertion-ordered, duplicate-free string collection.

use std::collections::HashSet;

/// Collects tags in first-seen order, dropping repeats.
///
/// # Example
///
/// ```
/// use archivist::mapping::TagSet;
///
/// let mut tags = TagSet::default();
/// tags.extend(["ltb", "sre", "ltb"]);
/// assert_eq!(tags.into_vec(), vec!["ltb".to_owned(), "sre".to_owned()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl TagSet {
    /// Adds a tag, returning false when it was already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.seen.insert(tag.to_owned());
        self.ordered.push(tag.to_owned());
        true
    }

    /// Adds every tag from the iterator.
    pub fn extend<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.insert(tag.as_ref());
        }
    }

    /// Returns true when `tag` has been inserted.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns true when no tag has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Borrow the tags in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    /// Consumes the set, returning tags in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::default();
        tags.extend(iter);
        tags
    }
}
