//! Subscriptions sub-client — newsletter sign-up.

use crate::client::FreedaiyClient;
use crate::domain::subscription::SubscriptionRequest;
use crate::error::SdkError;

pub struct Subscriptions<'a> {
    pub(crate) client: &'a FreedaiyClient,
}

impl<'a> Subscriptions<'a> {
    /// Subscribe `email` with no interests.
    pub async fn subscribe(&self, email: &str) -> Result<serde_json::Value, SdkError> {
        self.send(&SubscriptionRequest::new(email)).await
    }

    pub async fn subscribe_with_interests(
        &self,
        email: &str,
        interests: &[String],
    ) -> Result<serde_json::Value, SdkError> {
        let request = SubscriptionRequest::new(email).with_interests(interests.iter().cloned());
        self.send(&request).await
    }

    pub async fn send(&self, request: &SubscriptionRequest) -> Result<serde_json::Value, SdkError> {
        Ok(self.client.http.subscribe(request).await?)
    }
}
