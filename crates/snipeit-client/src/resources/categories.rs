use crate::client::Client;
use crate::error::Error;
use crate::query::add_options;
use crate::response::Response;
use snipeit_model::{Category, CategoryListOptions, ListEnvelope};

/// Access to `categories` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CategoriesService<'c> {
    client: &'c Client,
}

impl<'c> CategoriesService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// List categories matching `options`.
    ///
    /// Snipe-IT API doc: <https://snipe-it.readme.io/reference/categories-1>
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn list(
        &self,
        options: Option<&CategoryListOptions>,
    ) -> Result<(Vec<Category>, Response), Error> {
        let path = add_options("categories", options)?;
        let (envelope, response) = self
            .client
            .get_json::<ListEnvelope<Category>>(&path)
            .await?;
        Ok((envelope.rows, response))
    }

    /// Fetch one category by ID.
    ///
    /// Snipe-IT API doc: <https://snipe-it.readme.io/reference/category>
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, id: i64) -> Result<(Category, Response), Error> {
        self.client.get_json(&format!("categories/{id}")).await
    }
}
