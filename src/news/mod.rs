//! Headlines from the configured RSS/Atom feeds.
//!
//! Feeds are fetched independently, each under its own timeout. A feed that
//! fails to load or parse is skipped with a warning. Surviving items are
//! merged in feed order, deduplicated by title, and capped.

mod excerpt;
mod feed;
mod model;

pub use excerpt::{excerpt, strip_markup};
pub use feed::parse_feed;
pub use model::{FeedEntry, FeedOutcome, NewsItem};

use std::collections::HashSet;
use std::time::Duration;

use futures::future::join_all;
use url::Url;

use crate::config::{FeedSource, ReportConfig};
use crate::core::{BriefClient, BriefError, net};

/// Download and parse one feed, bounded by `timeout`.
///
/// # Errors
///
/// `Url` for an unparsable feed URL, `Timeout` when the budget runs out,
/// `Status`/`Http` for transport problems and `Feed` for unknown formats.
#[tracing::instrument(skip(client, source, timeout), fields(feed = %source.name))]
pub async fn fetch_feed_entries(
    client: &BriefClient,
    source: &FeedSource,
    timeout: Duration,
) -> Result<Vec<FeedEntry>, BriefError> {
    let url = Url::parse(&source.url)?;
    let download = async {
        let resp = net::get_ok(client.http(), url).await?;
        net::get_bytes(resp, "feed", &source.name).await
    };

    let body = tokio::time::timeout(timeout, download)
        .await
        .map_err(|_| BriefError::Timeout(timeout))??;

    parse_feed(&body)
}

/// Turn raw entries into at most `per_source` valid items.
///
/// Entries without a title or link are dropped and do not count toward the cap.
pub fn items_from_entries(
    source: &FeedSource,
    entries: Vec<FeedEntry>,
    per_source: usize,
    excerpt_chars: usize,
) -> Vec<NewsItem> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.as_deref().map(str::trim).unwrap_or_default();
            let link = entry.link.as_deref().map(str::trim).unwrap_or_default();
            if title.is_empty() || link.is_empty() {
                return None;
            }
            let summary = entry
                .summary
                .as_deref()
                .map(|s| excerpt(&strip_markup(s), excerpt_chars))
                .unwrap_or_default();

            Some(NewsItem {
                title: title.to_string(),
                link: link.to_string(),
                source: source.name.clone(),
                summary,
            })
        })
        .take(per_source)
        .collect()
}

/// Case-insensitive title key used for deduplication.
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// First occurrence of each title wins; then truncate to `limit`.
pub fn dedup_and_cap(items: Vec<NewsItem>, limit: usize) -> Vec<NewsItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(title_key(&item.title)))
        .take(limit)
        .collect()
}

/// One feed, start to finish; never fails.
pub async fn fetch_source(
    client: &BriefClient,
    source: &FeedSource,
    config: &ReportConfig,
) -> FeedOutcome {
    match fetch_feed_entries(client, source, config.feed_timeout).await {
        Ok(entries) => FeedOutcome::Fetched {
            feed: source.name.clone(),
            items: items_from_entries(
                source,
                entries,
                config.news_per_source,
                config.excerpt_chars,
            ),
        },
        Err(e) => FeedOutcome::Skipped {
            feed: source.name.clone(),
            reason: e.to_string(),
        },
    }
}

/// Merge per-feed outcomes in the given order, then dedup and cap.
pub fn merge_outcomes(outcomes: Vec<FeedOutcome>, limit: usize) -> Vec<NewsItem> {
    let merged = outcomes
        .into_iter()
        .flat_map(|outcome| match outcome {
            FeedOutcome::Fetched { feed, items } => {
                tracing::debug!(%feed, count = items.len(), "feed parsed");
                items
            }
            FeedOutcome::Skipped { feed, reason } => {
                tracing::warn!(%feed, %reason, "skipping feed");
                Vec::new()
            }
        })
        .collect();

    dedup_and_cap(merged, limit)
}

/// Fetch every feed and return the curated headline list.
pub async fn fetch_news(
    client: &BriefClient,
    config: &ReportConfig,
    feeds: &[FeedSource],
) -> Vec<NewsItem> {
    let attempts = feeds
        .iter()
        .map(|source| fetch_source(client, source, config));

    merge_outcomes(join_all(attempts).await, config.news_limit)
}
