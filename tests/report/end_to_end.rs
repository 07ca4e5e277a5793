use std::fs;
use std::path::Path;

use chrono::TimeZone;
use chrono_tz::Asia::Seoul;
use httpmock::MockServer;

use crate::common::{chart_body, client_for, closes, mock_chart, mock_feed, rss_body, setup_server};
use market_brief::{BriefError, ReportConfig, TickerSpec, generate_report_at};

fn write_feed_list(dir: &Path, server: &MockServer, names: &[&str]) -> std::path::PathBuf {
    let mut yaml = String::from(if names.is_empty() { "feeds: []\n" } else { "feeds:\n" });
    for name in names {
        yaml.push_str(&format!(
            "  - name: {name}\n    url: {}\n",
            server.url(format!("/feeds/{name}.xml"))
        ));
    }
    let path = dir.join("rss_sources.yaml");
    fs::write(&path, yaml).unwrap();
    path
}

fn config_for(dir: &Path, feeds_path: std::path::PathBuf) -> ReportConfig {
    ReportConfig::default()
        .with_tickers(vec![
            TickerSpec::new("UPX", "Up Index"),
            TickerSpec::new("DNX", "Down Index"),
            TickerSpec::new("TNX", "US 10Y").divided_by(10.0),
            TickerSpec::new("MISSING", "Never Served"),
        ])
        .with_feeds_path(feeds_path)
        .with_output_dir(dir.join("site"))
}

#[tokio::test]
async fn full_run_writes_current_and_archive_pages() {
    let server = setup_server();
    let dir = tempfile::tempdir().unwrap();

    let _up = mock_chart(&server, "UPX", chart_body(&closes(&[100.0, 102.0])));
    let _dn = mock_chart(&server, "DNX", chart_body(&closes(&[100.0, 98.0])));
    let _tnx = mock_chart(&server, "TNX", chart_body(&closes(&[42.0, 42.5])));
    let _wire = mock_feed(
        &server,
        "wire",
        rss_body(&[(
            "Fed Holds Rates Steady",
            "https://wire.example.com/fed",
            "Stocks rose today. Analysts are optimistic about next quarter and beyond.",
        )]),
    );
    let _echo = mock_feed(
        &server,
        "echo",
        rss_body(&[("fed holds rates steady", "https://echo.example.com/fed", "")]),
    );

    let feeds_path = write_feed_list(dir.path(), &server, &["wire", "echo", "offline"]);
    let cfg = config_for(dir.path(), feeds_path);
    let client = client_for(&server);
    let now = Seoul.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();

    let written = generate_report_at(&client, &cfg, now).await.unwrap();

    assert_eq!(written.current, dir.path().join("site/index.html"));
    assert_eq!(written.archive, dir.path().join("site/2024-05-01.html"));
    let html = fs::read_to_string(&written.current).unwrap();
    assert_eq!(html, fs::read_to_string(&written.archive).unwrap());

    assert!(html.contains("2024-05-01 07:30 KST"));
    assert!(html.contains(r#"<td class="chp up">+2.00%</td>"#));
    assert!(html.contains(r#"<td class="chp dn">-2.00%</td>"#));
    assert!(html.contains(r#"<td class="chp">4.25</td>"#));
    assert!(!html.contains("Never Served"));
    assert_eq!(html.matches("Fed Holds Rates Steady").count(), 1);
    assert!(!html.contains("fed holds rates steady"));
    assert!(html.contains("<div>Stocks rose today.</div>"));
}

#[tokio::test]
async fn same_day_rerun_overwrites_with_new_data() {
    let dir = tempfile::tempdir().unwrap();
    let now = Seoul.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();

    let first = {
        let server = MockServer::start();
        let _up = mock_chart(&server, "UPX", chart_body(&closes(&[100.0, 102.0])));
        let feeds_path = write_feed_list(dir.path(), &server, &[]);
        let cfg = config_for(dir.path(), feeds_path)
            .with_tickers(vec![TickerSpec::new("UPX", "Up Index")]);
        generate_report_at(&client_for(&server), &cfg, now).await.unwrap();
        fs::read_to_string(dir.path().join("site/index.html")).unwrap()
    };

    let server = MockServer::start();
    let _up = mock_chart(&server, "UPX", chart_body(&closes(&[100.0, 103.0])));
    let feeds_path = write_feed_list(dir.path(), &server, &[]);
    let cfg = config_for(dir.path(), feeds_path)
        .with_tickers(vec![TickerSpec::new("UPX", "Up Index")]);
    let later = Seoul.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
    let written = generate_report_at(&client_for(&server), &cfg, later).await.unwrap();

    let second = fs::read_to_string(&written.current).unwrap();
    assert_ne!(first, second);
    assert!(second.contains("+3.00%"));
    assert_eq!(fs::read_to_string(&written.archive).unwrap(), second);
    assert_eq!(fs::read_dir(dir.path().join("site")).unwrap().count(), 2);
}

#[tokio::test]
async fn empty_data_still_produces_a_page() {
    let server = setup_server();
    let dir = tempfile::tempdir().unwrap();
    let feeds_path = write_feed_list(dir.path(), &server, &["offline"]);
    let cfg = config_for(dir.path(), feeds_path);
    let now = Seoul.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();

    let written = generate_report_at(&client_for(&server), &cfg, now).await.unwrap();

    let html = fs::read_to_string(&written.current).unwrap();
    assert!(html.contains("<tbody>"));
    assert!(!html.contains(r#"<div class="news-item">"#));
}

#[tokio::test]
async fn missing_feed_list_is_fatal_and_writes_nothing() {
    let server = setup_server();
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_for(dir.path(), dir.path().join("absent.yaml"));
    let now = Seoul.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();

    let err = generate_report_at(&client_for(&server), &cfg, now)
        .await
        .unwrap_err();

    assert!(matches!(err, BriefError::Config(_)), "got {err:?}");
    assert!(!dir.path().join("site").exists());
}
