//! Hardware assets.

use crate::category::Category;
use crate::common::{null_as_default, NamedRef, SortOrder};
use crate::location::Location;
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters accepted by `GET hardware`.
///
/// Zero-valued fields are left out of the query string, so filtering on an
/// ID of `0` is not expressible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HardwareListOptions {
    /// Page size
    pub limit: u32,
    /// Page offset
    pub offset: u32,
    /// Free-text search
    pub search: String,
    /// Purchase order number
    pub order_number: String,
    /// Column to sort by
    pub sort: String,
    /// Sort direction
    pub order: Option<SortOrder>,
    /// Asset model ID
    pub model_id: i64,
    /// Category ID
    pub category_id: i64,
    /// Manufacturer ID
    pub manufacturer_id: i64,
    /// Company ID
    pub company_id: i64,
    /// Location ID
    pub location_id: i64,
    /// Status keyword (`RTD`, `Deployed`, `Archived`, ...)
    pub status: String,
    /// Status label ID
    pub status_id: i64,
}

/// A Snipe-IT hardware asset.
///
/// `location`, `rtd_location` and `category` embed the full referenced
/// object; the server usually fills only `id` and `name`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hardware {
    /// Asset ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Asset tag
    #[serde(deserialize_with = "null_as_default")]
    pub asset_tag: String,
    /// Serial number
    #[serde(deserialize_with = "null_as_default")]
    pub serial: String,
    /// Asset model
    #[serde(deserialize_with = "null_as_default")]
    pub model: NamedRef,
    /// Model number
    #[serde(deserialize_with = "null_as_default")]
    pub model_number: String,
    /// Current status
    #[serde(deserialize_with = "null_as_default")]
    pub status_label: StatusLabel,
    /// Category of the asset model
    pub category: Option<Category>,
    /// Manufacturer
    #[serde(deserialize_with = "null_as_default")]
    pub manufacturer: NamedRef,
    /// Supplier
    #[serde(deserialize_with = "null_as_default")]
    pub supplier: NamedRef,
    /// Free-text notes
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    /// Purchase order number
    #[serde(deserialize_with = "null_as_default")]
    pub order_number: String,
    /// Owning company
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    /// Current location
    pub location: Option<Location>,
    /// Default location the asset returns to when checked in
    pub rtd_location: Option<Location>,
    /// Image URL
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// Current assignee
    #[serde(deserialize_with = "null_as_default")]
    pub assigned_to: Assignee,
    /// Free-form: the server sends a number or a string such as `"12 months"`
    pub warranty_months: Value,
    /// Warranty end date, as sent by the server
    pub warranty_expires: Value,
    /// Creation time
    pub created_at: Timestamp,
    /// Last update time
    pub updated_at: Timestamp,
    /// Soft-delete time
    pub deleted_at: Timestamp,
    /// Purchase date
    pub purchase_date: Timestamp,
    /// Time of the last checkout
    pub last_checkout: Timestamp,
    /// Expected checkin time
    pub expected_checkin: Timestamp,
    /// Formatted currency amount, e.g. `"1,299.00"`
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_cost: String,
    /// The asset is deployable and unassigned
    #[serde(deserialize_with = "null_as_default")]
    pub user_can_checkout: bool,
    /// Custom field values keyed by field name
    pub custom_fields: Value,
    /// Permitted actions
    #[serde(deserialize_with = "null_as_default")]
    pub available_actions: HardwareActions,
}

/// Status label attached to an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusLabel {
    /// Status label ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `deployable`, `pending`, `archived` or `deployed`
    #[serde(deserialize_with = "null_as_default")]
    pub status_meta: String,
}

/// The user, location or asset an asset is checked out to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Assignee {
    /// Remote ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Login name, for users
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Given name
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    /// Family name
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    /// Employee number
    #[serde(deserialize_with = "null_as_default")]
    pub employee_number: String,
    /// `user`, `location` or `asset`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Actions the requesting user may perform on an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct HardwareActions {
    /// May be checked out
    #[serde(deserialize_with = "null_as_default")]
    pub checkout: bool,
    /// May be checked in
    #[serde(deserialize_with = "null_as_default")]
    pub checkin: bool,
    /// May be cloned
    #[serde(deserialize_with = "null_as_default")]
    pub clone: bool,
    /// May be restored after deletion
    #[serde(deserialize_with = "null_as_default")]
    pub restore: bool,
    /// May be updated
    #[serde(deserialize_with = "null_as_default")]
    pub update: bool,
    /// May be deleted
    #[serde(deserialize_with = "null_as_default")]
    pub delete: bool,
}
