//! market-brief: end-of-day US index summary and headline page.
//!
//! One run fetches recent daily closes for a fixed set of index tickers and a
//! handful of RSS/Atom feeds, renders a static HTML page, and writes it as
//! `index.html` plus a dated archive copy. Per-ticker and per-feed failures
//! are logged and skipped; only configuration and write failures end a run.

pub mod config;
pub mod core;
pub mod history;
pub mod news;
pub mod prices;
pub mod render;
pub mod writer;

pub use config::{FeedSource, ReportConfig};
pub use crate::core::{BriefClient, BriefClientBuilder, BriefError};
pub use history::{DailyClose, Interval, Range};
pub use news::NewsItem;
pub use prices::{IndexQuote, TickerSpec};
pub use render::Report;
pub use writer::WrittenReport;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Fetch prices and headlines concurrently and assemble the report for `now`.
pub async fn build_report(
    client: &BriefClient,
    config: &ReportConfig,
    feeds: &[FeedSource],
    now: DateTime<Tz>,
) -> Report {
    let (indices, news) = tokio::join!(
        prices::fetch_indices(client, config),
        news::fetch_news(client, config, feeds),
    );
    tracing::info!(indices = indices.len(), news = news.len(), "data collected");
    Report::new(config, now, indices, news)
}

/// Run the whole pipeline once at instant `now`.
///
/// # Errors
///
/// Fails only for an unreadable or malformed feed list, a template failure,
/// or an output write failure.
pub async fn generate_report_at(
    client: &BriefClient,
    config: &ReportConfig,
    now: DateTime<Tz>,
) -> Result<WrittenReport, BriefError> {
    let feeds = config::load_feeds(&config.feeds_path)?;
    let report = build_report(client, config, &feeds, now).await;
    let html = report.render()?;
    let stem = now.format(&config.archive_date_format).to_string();
    writer::write_report(&config.output_dir, &stem, &html)
}

/// Run the whole pipeline once using the current time in the configured zone.
///
/// # Errors
///
/// See [`generate_report_at`].
pub async fn generate_report(
    client: &BriefClient,
    config: &ReportConfig,
) -> Result<WrittenReport, BriefError> {
    let now = Utc::now().with_timezone(&config.timezone);
    generate_report_at(client, config, now).await
}
