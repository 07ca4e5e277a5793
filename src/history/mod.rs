//! Daily bars from the Yahoo v8 chart endpoint, one request per symbol.

mod model;
mod params;
mod wire;

pub use model::DailyClose;
pub use params::{Interval, Range};

use crate::core::{BriefClient, BriefError, net};
use wire::ChartEnvelope;

/// Fetch the trailing window of complete daily bars for `symbol`.
///
/// # Errors
///
/// `Status` on a non-2xx answer, `Data` when Yahoo reports an error or the
/// payload lacks a result/quote block, `Http` on transport failures.
#[tracing::instrument(skip(client))]
pub async fn fetch_daily_closes(
    client: &BriefClient,
    symbol: &str,
    range: Range,
    interval: Interval,
) -> Result<Vec<DailyClose>, BriefError> {
    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("range", range.as_str())
        .append_pair("interval", interval.as_str())
        .append_pair("includePrePost", "false");

    let resp = net::get_ok(client.http(), url).await?;
    let body = net::get_text(resp, "history_chart", symbol).await?;
    decode_chart(&body)
}

/// Decode a chart payload, keeping only rows where every OHLC field is present.
///
/// # Errors
///
/// Returns `BriefError::Data` for malformed JSON, a Yahoo-side error object,
/// or a payload without a result or quote block.
pub fn decode_chart(body: &str) -> Result<Vec<DailyClose>, BriefError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| BriefError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| BriefError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(BriefError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let mut results = chart
        .result
        .ok_or_else(|| BriefError::Data("missing result".into()))?;

    let r0 = results
        .pop()
        .ok_or_else(|| BriefError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let q = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| BriefError::Data("missing quote".into()))?;

    let out = ts
        .iter()
        .enumerate()
        .filter_map(|(i, &t)| {
            let get = |v: &Vec<Option<f64>>| v.get(i).copied().flatten().filter(|x| x.is_finite());
            // a bar with any hole counts as missing data
            get(&q.open)?;
            get(&q.high)?;
            get(&q.low)?;
            let close = get(&q.close)?;
            Some(DailyClose { ts: t, close })
        })
        .collect();

    Ok(out)
}
