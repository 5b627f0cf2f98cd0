//! # Snipe-IT Client
//!
//! Typed, read-only client for the Snipe-IT asset management REST API.
//!
//! ## Request pipeline
//!
//! 1. List options are rendered into a query string ([`query::add_options`])
//! 2. [`Client::new_request`] resolves the path against the base URL and adds
//!    `Accept`/`Content-Type: application/json` and the bearer token
//! 3. [`Client::execute`] sends the request and decodes a 2xx body
//!
//! Non-2xx responses are returned as `Ok` with the body left undecoded;
//! check [`Response::status`]. Nothing is retried.
//!
//! ```no_run
//! use snipeit_client::Client;
//! use snipeit_model::HardwareListOptions;
//!
//! # async fn example() -> Result<(), snipeit_client::Error> {
//! let client = Client::new("https://assets.example.org/api/v1", "token")?;
//! let opts = HardwareListOptions {
//!     location_id: 1,
//!     ..Default::default()
//! };
//! let (assets, response) = client.hardware().list(Some(&opts)).await?;
//! if response.is_success() {
//!     for asset in assets {
//!         println!("{} {}", asset.asset_tag, asset.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;
pub mod response;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{DecodeError, Error, RequestBuildError};
pub use resources::{CategoriesService, HardwareService, LocationsService};
pub use response::{DecodeTarget, Response};
