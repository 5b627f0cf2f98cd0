use crate::client::Client;
use crate::error::Error;
use crate::query::add_options;
use crate::response::Response;
use snipeit_model::{Hardware, HardwareListOptions, ListEnvelope};

/// Access to `hardware` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct HardwareService<'c> {
    client: &'c Client,
}

impl<'c> HardwareService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// List assets matching `options`.
    ///
    /// Snipe-IT API doc: <https://snipe-it.readme.io/reference/hardware-list>
    ///
    /// # Errors
    ///
    /// See [`Error`]. A non-2xx status is not an error; the returned list is
    /// then empty.
    pub async fn list(
        &self,
        options: Option<&HardwareListOptions>,
    ) -> Result<(Vec<Hardware>, Response), Error> {
        let path = add_options("hardware", options)?;
        let (envelope, response) = self
            .client
            .get_json::<ListEnvelope<Hardware>>(&path)
            .await?;
        Ok((envelope.rows, response))
    }
}
