use super::*;

fn feed(items: &str) -> String {
    format!(r#"<?xml version="1.0" encoding="utf-8"?><rss version="2.0"><channel><title>Logs</title>{items}</channel></rss>"#)
}

fn item(n: usize) -> String {
    let weekday = ["Mon", "Tue", "Wed", "Thu", "Fri"][n - 1];
    format!(
        "<item><title>Post {n}</title><link>https://blog.example/{n}/</link>\
         <pubDate>{weekday}, 0{n} Jan 2024 10:00:00 +0000</pubDate>\
         <description>&lt;p&gt;Body {n}&lt;/p&gt;</description></item>"
    )
}

// =============================================================
// parse_feed
// =============================================================

#[test]
fn five_items_render_first_three_in_document_order() {
    let xml = feed(&(1..=5).map(item).collect::<String>());
    let items = parse_feed(&xml, &FeedConfig::default()).unwrap();
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Post 1", "Post 2", "Post 3"]);
}

#[test]
fn feed_without_items_parses_to_empty_list() {
    let items = parse_feed(&feed(""), &FeedConfig::default()).unwrap();
    assert!(items.is_empty());
}

#[test]
fn malformed_xml_is_parse_error() {
    let err = parse_feed("<rss><channel><item></channel>", &FeedConfig::default()).unwrap_err();
    assert!(matches!(err, FeedError::Parse(_)), "got {err:?}");
}

#[test]
fn item_fields_are_extracted_and_formatted() {
    let items = parse_feed(&feed(&item(2)), &FeedConfig::default()).unwrap();
    assert_eq!(
        items,
        vec![FeedItem {
            title: "Post 2".into(),
            link: "https://blog.example/2/".into(),
            description: "Body 2...".into(),
            published: "Jan 2, 2024".into(),
            read_minutes: 1,
        }]
    );
}

#[test]
fn missing_fields_fall_back() {
    let items = parse_feed(&feed("<item><title>  </title></item>"), &FeedConfig::default()).unwrap();
    let only = &items[0];
    assert_eq!(only.title, UNTITLED_POST);
    assert_eq!(only.link, FALLBACK_LINK);
    assert_eq!(only.description, ELLIPSIS);
    assert_eq!(only.published, RECENT_DATE);
    assert_eq!(only.read_minutes, 1);
}

#[test]
fn cdata_description_is_cleaned() {
    let xml = feed("<item><title>T</title><description><![CDATA[<p>Fish &amp; <em>chips</em></p>]]></description></item>");
    let items = parse_feed(&xml, &FeedConfig::default()).unwrap();
    assert_eq!(items[0].description, "Fish & chips...");
}

#[test]
fn respects_configured_post_limit() {
    let config = FeedConfig { max_posts: 1, ..FeedConfig::default() };
    let xml = feed(&(1..=4).map(item).collect::<String>());
    assert_eq!(parse_feed(&xml, &config).unwrap().len(), 1);
}

#[test]
fn long_description_is_cut_to_exactly_limit_plus_ellipsis() {
    let body = "<b>word</b> ".repeat(60);
    let xml = feed(&format!(
        "<item><title>T</title><description><![CDATA[{body}]]></description></item>"
    ));
    let items = parse_feed(&xml, &FeedConfig::default()).unwrap();
    let description = &items[0].description;

    assert!(!description.contains('<'));
    let cut = description.strip_suffix(ELLIPSIS).unwrap();
    assert_eq!(cut.chars().count(), 150);
}

// =============================================================
// helpers
// =============================================================

#[test]
fn clean_text_strips_tags_and_decodes_entities() {
    assert_eq!(clean_text("  <h1 class=\"x\">Hi</h1>&nbsp;<a href='#'>there</a> &#39;you&#x27; &copy;  "), "Hi\u{a0}there 'you' ©");
}

#[test]
fn clean_text_decodes_any_named_entity() {
    assert_eq!(clean_text("<p>Caf&eacute; &copy; 2024 &rarr; next</p>"), "Café © 2024 → next");
}

#[test]
fn clean_text_keeps_comparisons_that_are_not_tags() {
    assert_eq!(clean_text("if a < b and c > d"), "if a < b and c > d");
    assert_eq!(clean_text("x <3 y <!-- note --> z </p>"), "x <3 y  z");
}

#[test]
fn escaped_named_entities_in_description_are_decoded() {
    let xml = feed(
        "<item><title>T</title>\
         <description>&lt;p&gt;Caf&amp;eacute; &amp;copy; 2024 &amp;rarr; next&lt;/p&gt;</description></item>",
    );
    let items = parse_feed(&xml, &FeedConfig::default()).unwrap();
    assert_eq!(items[0].description, "Café © 2024 → next...");
}

#[test]
fn read_time_counts_truncated_card_text() {
    let body = "word ".repeat(600);
    let xml = feed(&format!("<item><title>T</title><description>{body}</description></item>"));
    let items = parse_feed(&xml, &FeedConfig::default()).unwrap();
    assert_eq!(items[0].read_minutes, 1);
}

#[test]
fn truncate_counts_characters_not_bytes() {
    let text = "é".repeat(200);
    let out = truncate_description(&text, 150);
    assert_eq!(out.chars().count(), 153);
    assert!(out.ends_with("..."));
}

#[test]
fn truncate_appends_ellipsis_even_when_short() {
    assert_eq!(truncate_description("short", 150), "short...");
}

#[test]
fn invalid_date_falls_back_to_recent() {
    assert_eq!(format_date(Some("not-a-date")), "Recent");
    assert_eq!(format_date(Some("   ")), "Recent");
    assert_eq!(format_date(None), "Recent");
}

#[test]
fn rfc2822_and_rfc3339_dates_are_formatted() {
    assert_eq!(format_date(Some("Tue, 14 Nov 2023 08:30:00 -0500")), "Nov 14, 2023");
    assert_eq!(format_date(Some("2024-03-09T12:00:00Z")), "Mar 9, 2024");
}

#[test]
fn bare_iso_date_is_formatted() {
    assert_eq!(format_date(Some("2024-01-15")), "Jan 15, 2024");
    assert_eq!(format_date(Some("2024-13-01")), "Recent");
}

#[test]
fn read_time_rounds_and_has_floor_of_one() {
    let words = |n: usize| vec!["w"; n].join(" ");
    assert_eq!(estimate_read_minutes("", 200), 1);
    assert_eq!(estimate_read_minutes(&words(99), 200), 1);
    assert_eq!(estimate_read_minutes(&words(300), 200), 2);
    assert_eq!(estimate_read_minutes(&words(299), 200), 1);
    assert_eq!(estimate_read_minutes(&words(1_000), 200), 5);
}
