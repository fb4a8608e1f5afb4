//! Landing content — everything the page fetches on load.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::post::Post;
use crate::domain::product::Product;
use crate::domain::resource::Resource;
use crate::error::SdkError;

/// Posts, products and resources, each loaded independently.
///
/// A failed section does not affect the others.
#[derive(Debug)]
pub struct LandingContent {
    pub posts: Result<Vec<Post>, SdkError>,
    pub products: Result<Vec<Product>, SdkError>,
    pub resources: Result<Vec<Resource>, SdkError>,
}

impl LandingContent {
    pub fn posts_or_empty(&self) -> &[Post] {
        self.posts.as_deref().unwrap_or_default()
    }

    pub fn products_or_empty(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }

    pub fn resources_or_empty(&self) -> &[Resource] {
        self.resources.as_deref().unwrap_or_default()
    }

    /// Errors of the sections that failed to load.
    pub fn errors(&self) -> Vec<&SdkError> {
        [
            self.posts.as_ref().err(),
            self.products.as_ref().err(),
            self.resources.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.posts.is_ok() && self.products.is_ok() && self.resources.is_ok()
    }
}
