//! Load the landing page content and optionally subscribe an email.
//!
//! ```bash
//! FREEDAIY_BACKEND_URL=http://localhost:8000 \
//!     cargo run --example landing --features native -- you@example.com
//! ```

use freedaiy_sdk::domain::subscription;
use freedaiy_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = FreedaiyClientBuilder::from_env().build()?;
    println!("Backend: {}", client.base_url());

    let landing = client.content().load_landing().await;

    println!("\nInsights ({})", landing.posts_or_empty().len());
    for post in landing.posts_or_empty() {
        println!("  [{}] {} • {}", post.category, post.title, post.reading_time);
    }

    for filter in ProductFilter::ALL {
        let visible = filter.apply(landing.products_or_empty());
        println!("\nProducts: {} ({})", filter, visible.len());
        for p in visible {
            println!("  {} • {}  {}", p.tag, p.level, p.title);
        }
    }

    println!("\nDownloads ({})", landing.resources_or_empty().len());
    for r in landing.resources_or_empty() {
        println!("  {} [{}]", r.title, r.tags().join(", "));
    }

    if let Some(email) = std::env::args().nth(1) {
        let request = SubscriptionRequest::new(email);
        if let Err(e) = request.validate() {
            println!("\n{}", e);
            return Ok(());
        }
        let result = client.subscriptions().send(&request).await;
        let status = SubmissionStatus::from_result(&result);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Subscription failed");
        }
        println!("\n{}", subscription::status_message(status));
    }

    Ok(())
}
