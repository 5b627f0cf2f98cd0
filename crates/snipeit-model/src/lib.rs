//! # Snipe-IT Model
//!
//! Typed records for the Snipe-IT REST API.
//!
//! This crate provides:
//! - Read-only records for hardware assets, locations and categories
//! - Per-resource list options rendered as query parameters
//! - The `{datetime, formatted}` timestamp codec
//! - The `{total, rows}` list envelope
//!
//! Every record field is optional on the wire. Missing fields and explicit
//! `null`s both decode to the field's zero value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod common;
pub mod hardware;
pub mod location;
pub mod timestamp;

pub use category::{Category, CategoryListOptions};
pub use common::{Actions, ListEnvelope, NamedRef, SortOrder};
pub use hardware::{Assignee, Hardware, HardwareActions, HardwareListOptions, StatusLabel};
pub use location::{Location, LocationListOptions};
pub use timestamp::{Timestamp, TimestampError};
