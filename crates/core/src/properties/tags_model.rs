//! Tags on folder-contained assets.
//!
//! The service renders the `tags` field as a wrapped object-or-array over
//! SOAP and as a plain array over REST; deserialization accepts every
//! shape (see [`crate::utils::shapes`]) and edits always send the plain
//! array. The mutation helpers keep the list free of duplicates and in
//! insertion order; the service rejects edits whose tag list is not
//! sequential.

use serde::{Deserialize, Serialize};

/// A single tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }
}

/// Returns true if a tag with this name is present.
pub fn has_tag(tags: &[Tag], name: &str) -> bool {
    tags.iter().any(|t| t.name == name)
}

/// Adds a tag unless it is blank or already present. Returns whether the
/// list changed.
pub fn add_tag(tags: &mut Vec<Tag>, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || has_tag(tags, name) {
        return false;
    }
    tags.push(Tag::new(name));
    true
}

/// Adds each of the given tags, skipping blanks and duplicates.
pub fn add_tags<I, S>(tags: &mut Vec<Tag>, names: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for name in names {
        add_tag(tags, name.as_ref());
    }
}

/// Removes a tag if present. Returns whether the list changed.
pub fn remove_tag(tags: &mut Vec<Tag>, name: &str) -> bool {
    let before = tags.len();
    tags.retain(|t| t.name != name);
    tags.len() != before
}
