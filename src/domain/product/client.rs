//! Products sub-client.

use crate::client::FreedaiyClient;
use crate::domain::product::{Product, ProductFilter};
use crate::error::SdkError;

pub struct Products<'a> {
    pub(crate) client: &'a FreedaiyClient,
}

impl<'a> Products<'a> {
    pub async fn list(&self) -> Result<Vec<Product>, SdkError> {
        Ok(self.client.http.get_products().await?)
    }

    /// Fetch the catalog and keep products matching `filter`.
    ///
    /// Filtering happens client-side; the backend always returns the full list.
    pub async fn list_filtered(&self, filter: ProductFilter) -> Result<Vec<Product>, SdkError> {
        let products = self.list().await?;
        Ok(products.into_iter().filter(|p| filter.matches(p)).collect())
    }
}
