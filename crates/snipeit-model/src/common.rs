//! Shapes shared by several resources.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field, mapping an explicit JSON `null` to the type's default.
///
/// The API sends `null` for most unset attributes; records treat that the
/// same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Embedded `{id, name}` reference to another object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    /// Remote ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Update/delete permissions reported for the requesting user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Actions {
    /// The object may be updated
    #[serde(deserialize_with = "null_as_default")]
    pub update: bool,
    /// The object may be deleted
    #[serde(deserialize_with = "null_as_default")]
    pub delete: bool,
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Wrapper returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    /// Number of matching objects on the server, not the length of `rows`
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    /// Objects in the requested page
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub rows: Vec<T>,
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self {
            total: 0,
            rows: Vec::new(),
        }
    }
}
