use market_brief::news::{excerpt, strip_markup};

#[test]
fn cuts_after_first_sentence() {
    let s = "Stocks rose today. Analysts are optimistic about next quarter and beyond.";
    assert_eq!(excerpt(s, 220), "Stocks rose today.");
}

#[test]
fn hard_truncates_when_no_sentence_end_fits() {
    let long = "word ".repeat(100);
    let out = excerpt(&long, 220);
    assert!(out.chars().count() <= 220);
    assert!(out.starts_with("word word"));

    // sentence end exists but only past the budget
    let late = format!("{}. tail", "x".repeat(300));
    assert_eq!(excerpt(&late, 220), "x".repeat(220));
}

#[test]
fn collapses_whitespace_and_newlines() {
    assert_eq!(
        excerpt("  Futures  edged\nhigher\n\n in early trade  ", 220),
        "Futures edged higher in early trade"
    );
}

#[test]
fn empty_input_gives_empty_excerpt() {
    assert_eq!(excerpt("", 220), "");
    assert_eq!(excerpt(" \n\t ", 220), "");
}

#[test]
fn abbreviations_cut_early() {
    assert_eq!(excerpt("U.S. stocks rallied. More text.", 220), "U.S.");
}

#[test]
fn counts_characters_not_bytes() {
    let korean = "가".repeat(300);
    let out = excerpt(&korean, 220);
    assert_eq!(out.chars().count(), 220);
}

#[test]
fn excerpt_is_idempotent_on_clean_short_text() {
    for s in [
        "Stocks rose today.",
        "Treasury yields slipped after the data",
        "Oil steady. Gold firm.",
        "",
    ] {
        let once = excerpt(s, 220);
        assert_eq!(excerpt(&once, 220), once, "input: {s:?}");
    }
}

#[test]
fn markup_is_stripped_before_excerpting() {
    let html = "<p>Stocks <b>rose</b> today.</p> <p>More &amp; more.</p>";
    assert_eq!(excerpt(&strip_markup(html), 220), "Stocks rose today.");
    assert_eq!(strip_markup("AT&amp;T"), "AT&T");
}

#[test]
fn bare_comparison_signs_are_text_not_tags() {
    let s = "S&P 500 < 5,000 as yields rise; Nasdaq > 16k";
    assert_eq!(strip_markup(s), s);
    assert_eq!(
        excerpt(&strip_markup("Yields < 4% after data. More."), 220),
        "Yields < 4% after data."
    );
}

#[test]
fn unterminated_tag_at_end_is_kept() {
    assert_eq!(strip_markup("Futures up <b"), "Futures up <b");
}

#[test]
fn inline_tags_do_not_split_words() {
    assert_eq!(strip_markup("stock<b>s</b> rallied"), "stocks rallied");
    assert_eq!(excerpt(&strip_markup("<p>a</p><p>b</p>"), 220), "a b");
    assert_eq!(excerpt(&strip_markup("one<br/>two"), 220), "one two");
}
