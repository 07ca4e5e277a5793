/// A tracked series and how it is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSpec {
    pub symbol: String,
    pub name: String,
    /// Raw closes are divided by this before display; `1.0` for ordinary indices.
    pub display_divisor: f64,
}

impl TickerSpec {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            display_divisor: 1.0,
        }
    }

    /// Show `close / divisor` instead of the raw close.
    #[must_use]
    pub fn divided_by(mut self, divisor: f64) -> Self {
        self.display_divisor = divisor;
        self
    }
}

/// Last close and day-over-day change for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexQuote {
    pub ticker: String,
    pub name: String,
    /// Display value, rounded to 2 decimals.
    pub last: f64,
    /// Signed percent change vs the previous session, rounded to 2 decimals.
    /// `NaN` when the previous close was zero or not a number.
    pub change_pct: f64,
}

/// Result of one per-ticker attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    Quoted(IndexQuote),
    Skipped { symbol: String, reason: String },
}

impl QuoteOutcome {
    pub fn into_quote(self) -> Option<IndexQuote> {
        match self {
            QuoteOutcome::Quoted(q) => Some(q),
            QuoteOutcome::Skipped { .. } => None,
        }
    }
}
