//! The HTML page.
//!
//! Rendering is pure: the same [`Report`] always yields the same bytes.

use askama::Template;
use chrono::DateTime;
use chrono_tz::Tz;

use crate::config::ReportConfig;
use crate::core::BriefError;
use crate::news::NewsItem;
use crate::prices::IndexQuote;

/// Everything shown on one page, built fresh per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    /// Already formatted in the configured timezone.
    pub generated_at: String,
    pub indices: Vec<IndexQuote>,
    pub news: Vec<NewsItem>,
    pub disclaimer: String,
}

impl Report {
    /// Assemble a report, formatting `now` with the configured pattern.
    pub fn new(
        config: &ReportConfig,
        now: DateTime<Tz>,
        indices: Vec<IndexQuote>,
        news: Vec<NewsItem>,
    ) -> Self {
        Self {
            title: config.title.clone(),
            generated_at: now.format(&config.timestamp_format).to_string(),
            indices,
            news,
            disclaimer: config.disclaimer.clone(),
        }
    }

    /// Render to a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::Template` if the template engine fails.
    pub fn render(&self) -> Result<String, BriefError> {
        let page = ReportPage {
            title: &self.title,
            generated_at: &self.generated_at,
            rows: self.indices.iter().map(IndexRow::from).collect(),
            news: &self.news,
            disclaimer: &self.disclaimer,
        };
        Ok(page.render()?)
    }
}

/// Signed, two-decimal percent text; `n/a` for a missing change.
pub fn format_change(change_pct: f64) -> String {
    if change_pct.is_finite() {
        // folds -0.0 into +0.00
        let v = change_pct + 0.0;
        format!("{v:+.2}%")
    } else {
        "n/a".to_string()
    }
}

/// `up` for zero and above, `dn` otherwise (including a missing change).
pub fn change_class(change_pct: f64) -> &'static str {
    if change_pct >= 0.0 { "up" } else { "dn" }
}

struct IndexRow<'a> {
    name: &'a str,
    last: String,
    change: String,
    class: &'static str,
}

impl<'a> From<&'a IndexQuote> for IndexRow<'a> {
    fn from(q: &'a IndexQuote) -> Self {
        Self {
            name: &q.name,
            last: format!("{:.2}", q.last),
            change: format_change(q.change_pct),
            class: change_class(q.change_pct),
        }
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage<'a> {
    title: &'a str,
    generated_at: &'a str,
    rows: Vec<IndexRow<'a>>,
    news: &'a [NewsItem],
    disclaimer: &'a str,
}
