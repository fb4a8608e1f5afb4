//! Content sub-client — loads every landing section at once.

use crate::client::FreedaiyClient;
use crate::domain::content::LandingContent;

use futures_util::future::join3;

pub struct Content<'a> {
    pub(crate) client: &'a FreedaiyClient,
}

impl<'a> Content<'a> {
    /// Fetch posts, products and resources concurrently.
    ///
    /// Issues exactly three requests and never fails as a whole.
    pub async fn load_landing(&self) -> LandingContent {
        let (posts, products, resources) = join3(
            self.client.posts().list(),
            self.client.products().list(),
            self.client.resources().list(),
        )
        .await;

        let content = LandingContent {
            posts,
            products,
            resources,
        };
        for err in content.errors() {
            tracing::warn!(error = %err, "Landing section unavailable");
        }
        content
    }
}
