//! Posts sub-client.

use crate::client::FreedaiyClient;
use crate::domain::post::Post;
use crate::error::SdkError;

pub struct Posts<'a> {
    pub(crate) client: &'a FreedaiyClient,
}

impl<'a> Posts<'a> {
    pub async fn list(&self) -> Result<Vec<Post>, SdkError> {
        Ok(self.client.http.get_posts().await?)
    }
}
