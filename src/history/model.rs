use chrono::{DateTime, TimeZone, Utc};

/// One complete daily bar, reduced to what the report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyClose {
    pub ts: i64,
    pub close: f64,
}

impl DailyClose {
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.ts, 0).single()
    }
}
