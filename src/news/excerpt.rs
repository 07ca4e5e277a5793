//! Summary shortening.
//!
//! The cut is a heuristic: the first `". "` inside the budget ends the
//! excerpt, otherwise the text is hard-truncated at the budget. Abbreviations
//! like "U.S. " will cut early.

/// Collapse whitespace, then cut at the first sentence end within `max_chars`.
///
/// Counts characters, not bytes, so multi-byte text never splits a code point.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = collapsed.chars().collect();
    let dot = chars.windows(2).position(|w| w == ['.', ' ']);
    let end = match dot {
        Some(k) if k > 0 && k < max_chars => k + 1,
        _ => max_chars,
    };

    let cut: String = chars.iter().take(end).collect();
    cut.trim_end().to_string()
}

/// Tags that end a line of text; closing one of these separates words.
const BLOCK_TAGS: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "tr", "td", "th", "table", "blockquote", "hr",
    "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Drop markup tags and decode the handful of entities feeds commonly emit.
///
/// A `<` only opens a tag when followed by a letter, `/` or `!`; anything
/// else is kept as text, as is an unterminated tag at the end of input.
pub fn strip_markup(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        if in_tag {
            tag.push(c);
            if c == '>' {
                in_tag = false;
                if is_block_tag(&tag) {
                    result.push(' ');
                }
                tag.clear();
            }
        } else if c == '<'
            && chars
                .peek()
                .is_some_and(|n| n.is_ascii_alphabetic() || *n == '/' || *n == '!')
        {
            in_tag = true;
            tag.push(c);
        } else {
            result.push(c);
        }
    }
    if in_tag {
        result.push_str(&tag);
    }

    result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn is_block_tag(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCK_TAGS.contains(&name.as_str())
}
