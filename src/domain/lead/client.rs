//! Leads sub-client — hire-form submission.

use crate::client::FreedaiyClient;
use crate::domain::lead::LeadRequest;
use crate::error::SdkError;

pub struct Leads<'a> {
    pub(crate) client: &'a FreedaiyClient,
}

impl<'a> Leads<'a> {
    /// Submit a lead as-is. Blank fields are sent blank.
    pub async fn submit(&self, lead: &LeadRequest) -> Result<serde_json::Value, SdkError> {
        Ok(self.client.http.submit_lead(lead).await?)
    }
}
