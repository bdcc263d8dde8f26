//! Print the conversation list and each thread's response-time report.
//!
//! Reads `DATABASE_URL` (defaults to `sqlite:crm.db?mode=rwc`). Run with:
//!
//! ```sh
//! cargo run -p inbox --example inbox_report
//! ```

use crm_core::format_timestamp;
use inbox::{page, InboxFilter, InboxService, SortBy};
use message_store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:crm.db?mode=rwc".to_string());
    let store = Store::connect(&url).await?;
    store.migrate().await?;

    let service = InboxService::new(store);
    let summaries = service
        .conversations(&InboxFilter::all(), SortBy::LastMessageDesc)
        .await?;

    println!("{} conversas\n", summaries.len());
    for summary in page(&summaries, 20) {
        println!(
            "{} ({}) - {} recebidas, última em {}",
            summary.counterpart.name,
            summary.counterpart.phone,
            summary.received_count,
            format_timestamp(summary.last_message_at),
        );

        let thread = service
            .thread(&summary.counterpart.name, &summary.counterpart.phone)
            .await?;
        for entry in &thread.responses {
            println!(
                "    {}  {}",
                format_timestamp(entry.received_at),
                entry.formatted()
            );
        }
        println!();
    }

    Ok(())
}
