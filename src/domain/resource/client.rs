//! Resources sub-client.

use crate::client::FreedaiyClient;
use crate::domain::resource::Resource;
use crate::error::SdkError;

pub struct Resources<'a> {
    pub(crate) client: &'a FreedaiyClient,
}

impl<'a> Resources<'a> {
    pub async fn list(&self) -> Result<Vec<Resource>, SdkError> {
        Ok(self.client.http.get_resources().await?)
    }
}
