//! Locations.

use crate::common::{null_as_default, Actions, NamedRef, SortOrder};
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET locations`.
///
/// Zero-valued fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationListOptions {
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

/// A Snipe-IT location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Location ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Image URL
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// Street address
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    /// Second address line
    #[serde(deserialize_with = "null_as_default")]
    pub address2: String,
    /// City
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    /// State or region
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// Country
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    /// Postal code
    #[serde(deserialize_with = "null_as_default")]
    pub zip: String,
    /// Assets checked out to this location
    #[serde(rename = "assigned_assets_count", deserialize_with = "null_as_default")]
    pub assets_assigned: i64,
    /// Assets whose current location is this one
    #[serde(rename = "assets_count", deserialize_with = "null_as_default")]
    pub assets: i64,
    /// Users based at this location
    #[serde(rename = "users_count", deserialize_with = "null_as_default")]
    pub users: i64,
    /// Currency code used for purchases
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// Creation time
    pub created_at: Timestamp,
    /// Last update time
    pub updated_at: Timestamp,
    /// Parent location
    #[serde(deserialize_with = "null_as_default")]
    pub parent: NamedRef,
    /// Manager name
    #[serde(deserialize_with = "null_as_default")]
    pub manager: String,
    /// Direct child locations
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<Location>,
    /// Permitted actions
    #[serde(rename = "available_actions", deserialize_with = "null_as_default")]
    pub actions: Actions,
}
