//! Normalization of the service's "one or many" list shapes.
//!
//! The SOAP rendering of the service wraps every list in a singular-keyed
//! object and collapses single-element lists to a bare object:
//!
//! ```json
//! {"tags": {"tag": {"name": "news"}}}
//! {"tags": {"tag": [{"name": "news"}, {"name": "events"}]}}
//! {"tags": {}}
//! ```
//!
//! while the REST rendering returns a plain array:
//!
//! ```json
//! {"tags": [{"name": "news"}]}
//! ```
//!
//! [`normalized_list`] accepts all of these (plus `null` and absent fields)
//! and always produces a `Vec`. Serialization always emits the plain array
//! the REST edit endpoint expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(v) => v,
            OneOrMany::One(x) => vec![x],
        }
    }
}

// The wrapped alternative must be tried before the bare-object one: a
// wrapper like {"fieldValue": {...}} would otherwise satisfy a payload type
// whose fields are all optional.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListShape<T> {
    Many(Vec<T>),
    Wrapped(BTreeMap<String, OneOrMany<T>>),
    One(T),
}

/// Deserializes a list field that may arrive in any of the service's
/// shapes. Use with `#[serde(default, deserialize_with = "normalized_list")]`.
pub fn normalized_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let shape = Option::<ListShape<T>>::deserialize(deserializer)?;
    Ok(match shape {
        None => Vec::new(),
        Some(ListShape::Many(v)) => v,
        Some(ListShape::One(x)) => vec![x],
        Some(ListShape::Wrapped(map)) => {
            map.into_values().flat_map(OneOrMany::into_vec).collect()
        }
    })
}
