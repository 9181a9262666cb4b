use super::*;

#[test]
fn summary_round_trips_through_json() {
    let summary = ArticleSummary {
        slug: "20250712_hello".to_owned(),
        title: "Hello".to_owned(),
        date: "2025-07-12".to_owned(),
        category: "notes".to_owned(),
        summary: "A first post.".to_owned(),
    };
    let json = serde_json::to_string(&summary).unwrap();
    let back: ArticleSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn doc_omits_absent_see_more() {
    let doc = ArticleDoc {
        slug: "a".to_owned(),
        title: "A".to_owned(),
        date: "2025-07-12".to_owned(),
        category: "uncategorized".to_owned(),
        body_html: "<p>body</p>".to_owned(),
        see_more_html: None,
    };
    let json = serde_json::to_string(&doc).unwrap();
    assert!(!json.contains("see_more_html"));

    let back: ArticleDoc = serde_json::from_str(&json).unwrap();
    assert_eq!(back.see_more_html, None);
}

#[test]
fn doc_preserves_see_more_when_present() {
    let doc = ArticleDoc {
        slug: "a".to_owned(),
        title: "A".to_owned(),
        date: "2025-07-12".to_owned(),
        category: "uncategorized".to_owned(),
        body_html: "<p>body</p>".to_owned(),
        see_more_html: Some("<p><a href=\"https://example.com\">more</a></p>".to_owned()),
    };
    let json = serde_json::to_string(&doc).unwrap();
    let back: ArticleDoc = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}
