//! Categories.

use crate::common::{null_as_default, Actions, SortOrder};
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryListOptions {
    /// Page size
    pub limit: u32,
    /// Page offset
    pub offset: u32,
    /// Free-text search
    pub search: String,
    /// Column to sort by
    pub sort: String,
    /// Sort direction
    pub order: Option<SortOrder>,
}

/// A Snipe-IT category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Category ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Image URL
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// One of `asset`, `accessory`, `consumable`, `component`, `license`
    #[serde(deserialize_with = "null_as_default")]
    pub category_type: String,
    /// Assets in this category use the category EULA
    #[serde(deserialize_with = "null_as_default")]
    pub eula: bool,
    /// Users get an email on checkin
    #[serde(deserialize_with = "null_as_default")]
    pub checkin_email: bool,
    /// Users must accept assets in this category
    #[serde(deserialize_with = "null_as_default")]
    pub require_acceptance: bool,
    /// Assets in this category
    #[serde(deserialize_with = "null_as_default")]
    pub assets_count: i64,
    /// Accessories in this category
    #[serde(deserialize_with = "null_as_default")]
    pub accessories_count: i64,
    /// Consumables in this category
    #[serde(deserialize_with = "null_as_default")]
    pub consumables_count: i64,
    /// Components in this category
    #[serde(deserialize_with = "null_as_default")]
    pub components_count: i64,
    /// Licenses in this category
    #[serde(deserialize_with = "null_as_default")]
    pub licenses_count: i64,
    /// Creation time
    pub created_at: Timestamp,
    /// Last update time
    pub updated_at: Timestamp,
    /// Permitted actions
    #[serde(rename = "available_actions", deserialize_with = "null_as_default")]
    pub actions: Actions,
}
