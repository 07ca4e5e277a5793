//! Index closes and day-over-day change.
//!
//! Each ticker is fetched on its own request so a bad symbol or an odd
//! payload only costs that one row. Output order follows the configured
//! ticker list, not completion order.

mod model;

pub use model::{IndexQuote, QuoteOutcome, TickerSpec};

use futures::future::join_all;

use crate::config::ReportConfig;
use crate::core::BriefClient;
use crate::history::{self, DailyClose, Interval, Range};

/// `(last / prev - 1) * 100`, or `NaN` when `prev` is zero or non-finite.
pub fn pct_change(last: f64, prev: f64) -> f64 {
    if prev == 0.0 || !prev.is_finite() || !last.is_finite() {
        return f64::NAN;
    }
    (last / prev - 1.0) * 100.0
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Build a quote from complete bars, oldest first.
///
/// Fewer than two bars is a skip, not an error.
pub fn quote_from_closes(spec: &TickerSpec, bars: &[DailyClose]) -> QuoteOutcome {
    let [.., prev, last] = bars else {
        return QuoteOutcome::Skipped {
            symbol: spec.symbol.clone(),
            reason: format!("need 2 closes, got {}", bars.len()),
        };
    };

    let change = pct_change(last.close, prev.close);
    let display_last = last.close / spec.display_divisor;

    if let Some(session) = last.datetime_utc() {
        tracing::debug!(symbol = %spec.symbol, session = %session.date_naive(), "latest session");
    }

    QuoteOutcome::Quoted(IndexQuote {
        ticker: spec.symbol.clone(),
        name: spec.name.clone(),
        last: round2(display_last),
        change_pct: round2(change),
    })
}

/// One request for one ticker; every failure becomes a `Skipped` outcome.
pub async fn fetch_quote(
    client: &BriefClient,
    spec: &TickerSpec,
    range: Range,
    interval: Interval,
) -> QuoteOutcome {
    match history::fetch_daily_closes(client, &spec.symbol, range, interval).await {
        Ok(bars) => quote_from_closes(spec, &bars),
        Err(e) => QuoteOutcome::Skipped {
            symbol: spec.symbol.clone(),
            reason: e.to_string(),
        },
    }
}

/// Fetch all configured tickers, logging and dropping the ones that fail.
pub async fn fetch_indices(client: &BriefClient, config: &ReportConfig) -> Vec<IndexQuote> {
    let attempts = config
        .tickers
        .iter()
        .map(|spec| fetch_quote(client, spec, config.range, config.interval));

    collect_quotes(join_all(attempts).await)
}

/// Keep successful quotes in input order; warn once per skipped ticker.
pub fn collect_quotes(outcomes: Vec<QuoteOutcome>) -> Vec<IndexQuote> {
    outcomes
        .into_iter()
        .filter_map(|outcome| {
            if let QuoteOutcome::Skipped { symbol, reason } = &outcome {
                tracing::warn!(%symbol, %reason, "skipping ticker");
            }
            outcome.into_quote()
        })
        .collect()
}
