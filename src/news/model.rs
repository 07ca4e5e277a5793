/// A curated headline as it appears on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Trimmed, never empty.
    pub title: String,
    /// Trimmed, never empty.
    pub link: String,
    /// Name of the feed this came from.
    pub source: String,
    /// Short excerpt; may be empty.
    pub summary: String,
}

/// An entry as parsed from a feed, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
}

/// Result of one per-feed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    Fetched { feed: String, items: Vec<NewsItem> },
    Skipped { feed: String, reason: String },
}
