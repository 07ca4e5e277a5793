//! Run configuration.
//!
//! [`ReportConfig`] is built once at process start and handed by reference to
//! every stage. The only external input is the feed source list, a YAML file
//! with a top-level `feeds:` key.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::core::BriefError;
use crate::history::{Interval, Range};
use crate::prices::TickerSpec;

/// Default report heading.
pub const DEFAULT_TITLE: &str = "미국 증시 마감 요약 & 주요 뉴스";

/// Footer disclaimer shown on every page.
pub const DEFAULT_DISCLAIMER: &str = "본 자료는 교육/정보 제공 목적이며 투자권유가 아닙니다.";

/// Where the feed list is read from, relative to the working directory.
pub const DEFAULT_FEEDS_PATH: &str = "config/rss_sources.yaml";

/// A single syndication source as listed in the feed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedSource {
    /// Human-readable label; shown as the badge next to each headline.
    pub name: String,
    /// Where the RSS or Atom document is fetched from.
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Deserialize)]
struct FeedFile {
    feeds: Vec<FeedSource>,
}

/// Parse a feed list document.
///
/// # Errors
///
/// Returns `BriefError::Config` on YAML syntax errors, a missing `feeds` key,
/// or an entry without `name` or `url`.
pub fn parse_feeds(yaml: &str) -> Result<Vec<FeedSource>, BriefError> {
    let file: FeedFile = serde_yaml::from_str(yaml)
        .map_err(|e| BriefError::Config(format!("invalid feed list: {e}")))?;
    Ok(file.feeds)
}

/// Read and parse the feed list at `path`.
///
/// # Errors
///
/// A missing or unreadable file is reported as `BriefError::Config` carrying
/// the path; malformed content as in [`parse_feeds`].
pub fn load_feeds(path: &Path) -> Result<Vec<FeedSource>, BriefError> {
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| BriefError::Config(format!("cannot read {}: {e}", path.display())))?;
    let feeds = parse_feeds(&yaml)?;
    tracing::debug!(path = %path.display(), count = feeds.len(), "feed list loaded");
    Ok(feeds)
}

/// Everything a run needs besides the network client.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub title: String,
    /// Tracked series, in display order.
    pub tickers: Vec<TickerSpec>,
    /// Trailing window requested per ticker; wide enough to span a long weekend.
    pub range: Range,
    pub interval: Interval,
    /// Upper bound on headlines after dedup.
    pub news_limit: usize,
    /// Upper bound on headlines taken from any single feed.
    pub news_per_source: usize,
    /// Character budget for summary excerpts.
    pub excerpt_chars: usize,
    pub feed_timeout: Duration,
    pub feeds_path: PathBuf,
    pub output_dir: PathBuf,
    pub disclaimer: String,
    pub timezone: Tz,
    /// `strftime` pattern for the "generated at" line.
    pub timestamp_format: String,
    /// `strftime` pattern for the archive file stem.
    pub archive_date_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tickers: vec![
                TickerSpec::new("^GSPC", "S&P 500"),
                TickerSpec::new("^IXIC", "NASDAQ"),
                TickerSpec::new("^DJI", "Dow Jones"),
                TickerSpec::new("^VIX", "VIX"),
                // quoted as yield x10 (42.5 means 4.25%)
                TickerSpec::new("^TNX", "US 10Y").divided_by(10.0),
            ],
            range: Range::D10,
            interval: Interval::D1,
            news_limit: 12,
            news_per_source: 5,
            excerpt_chars: 220,
            feed_timeout: Duration::from_secs(15),
            feeds_path: PathBuf::from(DEFAULT_FEEDS_PATH),
            output_dir: PathBuf::from("site"),
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
            timezone: chrono_tz::Asia::Seoul,
            timestamp_format: "%Y-%m-%d %H:%M %Z".to_string(),
            archive_date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn with_tickers(mut self, tickers: Vec<TickerSpec>) -> Self {
        self.tickers = tickers;
        self
    }

    #[must_use]
    pub fn with_news_caps(mut self, limit: usize, per_source: usize) -> Self {
        self.news_limit = limit;
        self.news_per_source = per_source;
        self
    }

    #[must_use]
    pub fn with_feed_timeout(mut self, dur: Duration) -> Self {
        self.feed_timeout = dur;
        self
    }

    #[must_use]
    pub fn with_feeds_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.feeds_path = path.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = tz;
        self
    }
}
