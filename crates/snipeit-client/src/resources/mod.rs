//! Per-resource accessors.
//!
//! Each service borrows the [`Client`](crate::Client) it was created from and
//! adds nothing but the resource path and record type.

mod categories;
mod hardware;
mod locations;

pub use categories::CategoriesService;
pub use hardware::HardwareService;
pub use locations::LocationsService;
