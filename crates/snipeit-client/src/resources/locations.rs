use crate::client::Client;
use crate::error::Error;
use crate::query::add_options;
use crate::response::Response;
use snipeit_model::{ListEnvelope, Location, LocationListOptions};

/// Access to `locations` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LocationsService<'c> {
    client: &'c Client,
}

impl<'c> LocationsService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// List locations matching `options`.
    ///
    /// Snipe-IT API doc: <https://snipe-it.readme.io/reference/locations>
    ///
    /// # Errors
    ///
    /// See [`Error`]. A non-2xx status is not an error; the returned list is
    /// then empty.
    pub async fn list(
        &self,
        options: Option<&LocationListOptions>,
    ) -> Result<(Vec<Location>, Response), Error> {
        let path = add_options("locations", options)?;
        let (envelope, response) = self
            .client
            .get_json::<ListEnvelope<Location>>(&path)
            .await?;
        Ok((envelope.rows, response))
    }

    /// Fetch one location by ID.
    ///
    /// Snipe-IT API doc: <https://snipe-it.readme.io/reference/locations-1>
    ///
    /// # Errors
    ///
    /// See [`Error`]. A non-2xx status is not an error; the returned record
    /// is then `Location::default()`.
    pub async fn get(&self, id: i64) -> Result<(Location, Response), Error> {
        self.client.get_json(&format!("locations/{id}")).await
    }
}
