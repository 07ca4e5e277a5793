//! RSS 2.0 and Atom documents reduced to title/link/summary triples.

use crate::core::BriefError;
use crate::news::model::FeedEntry;

/// Parse a feed body, trying RSS first and Atom second.
///
/// # Errors
///
/// Returns `BriefError::Feed` when the body is neither.
pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>, BriefError> {
    let rss_err = match rss::Channel::read_from(body) {
        Ok(channel) => return Ok(channel.items().iter().map(from_rss).collect()),
        Err(e) => e,
    };

    match atom_syndication::Feed::read_from(body) {
        Ok(feed) => Ok(feed.entries().iter().map(from_atom).collect()),
        Err(atom_err) => Err(BriefError::Feed(format!(
            "not RSS ({rss_err}) nor Atom ({atom_err})"
        ))),
    }
}

fn from_rss(item: &rss::Item) -> FeedEntry {
    FeedEntry {
        title: item.title().map(str::to_string),
        link: item.link().map(str::to_string),
        summary: first_non_blank(item.description(), item.content()),
    }
}

fn from_atom(entry: &atom_syndication::Entry) -> FeedEntry {
    let links = entry.links();
    let link = links
        .iter()
        .find(|l| l.rel() == "alternate")
        .or_else(|| links.first())
        .map(|l| l.href().to_string());

    FeedEntry {
        title: Some(entry.title().as_str().to_string()),
        link,
        summary: first_non_blank(
            entry.summary().map(|s| s.as_str()),
            entry.content().and_then(|c| c.value()),
        ),
    }
}

fn first_non_blank(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    primary
        .filter(|s| !s.trim().is_empty())
        .or(fallback)
        .map(str::to_string)
}
