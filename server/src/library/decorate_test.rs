use super::*;

fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// Inline vocabulary
// =============================================================

#[test]
fn strong_and_em() {
    assert_eq!(
        decorate("a **bold** and *leaning* word"),
        "a <strong>bold</strong> and <em>leaning</em> word"
    );
}

#[test]
fn code_and_strikethrough() {
    assert_eq!(
        decorate("run `cargo doc` and ~~forget it~~"),
        "run <code>cargo doc</code> and <del>forget it</del>"
    );
}

#[test]
fn links() {
    assert_eq!(
        decorate("see [the docs](https://example.com/docs)"),
        r#"see <a href="https://example.com/docs">the docs</a>"#
    );
}

#[test]
fn images_keep_their_bang() {
    assert_eq!(
        decorate("![a lamp](lamp.png)"),
        r#"<img src="lamp.png" alt="a lamp">"#
    );
}

#[test]
fn image_and_link_on_one_line() {
    assert_eq!(
        decorate("![icon](i.svg) then [home](/)"),
        r#"<img src="i.svg" alt="icon"> then <a href="/">home</a>"#
    );
}

// =============================================================
// Headings
// =============================================================

#[test]
fn heading_levels() {
    assert_eq!(decorate("### Section"), "<h3>Section</h3>");
    assert_eq!(decorate("#### Detail"), "<h4>Detail</h4>");
}

#[test]
fn heading_must_start_the_line() {
    assert_eq!(decorate("not a ### heading"), "not a ### heading");
}

// =============================================================
// Comments and tags
// =============================================================

#[test]
fn strip_comments_removes_inline_comment() {
    assert_eq!(strip_comments("before <!-- hidden --> after"), "before  after");
}

#[test]
fn strip_comments_spans_lines() {
    assert_eq!(strip_comments("a\n<!-- one\ntwo -->\nb"), "a\n\nb");
}

#[test]
fn strip_tags_keeps_text() {
    assert_eq!(strip_tags("a <em>quiet</em> word"), "a quiet word");
}

// =============================================================
// Paragraphs
// =============================================================

#[test]
fn blank_lines_split_paragraphs() {
    let body = lines(&["first line", "second line", "", "new paragraph"]);
    assert_eq!(
        render_body(&body),
        "<p>first line<br>\nsecond line</p>\n<p>new paragraph</p>"
    );
}

#[test]
fn headings_stand_alone() {
    let body = lines(&["### Heading", "text under it"]);
    assert_eq!(render_body(&body), "<h3>Heading</h3>\n<p>text under it</p>");
}

#[test]
fn horizontal_rule_breaks_the_paragraph() {
    let body = lines(&["above", "---", "below"]);
    assert_eq!(render_body(&body), "<p>above</p>\n<hr>\n<p>below</p>");
}

#[test]
fn comment_only_lines_leave_a_paragraph_break() {
    let body = lines(&["a", "<!-- note to self -->", "b"]);
    assert_eq!(render_body(&body), "<p>a</p>\n<p>b</p>");
}

#[test]
fn empty_body_renders_empty() {
    assert_eq!(render_body(&lines(&[])), "");
    assert_eq!(render_body(&lines(&["", "  ", ""])), "");
}

#[test]
fn body_combines_inline_and_blocks() {
    let body = lines(&[
        "An **opening** line.",
        "",
        "### Reading",
        "See [the index](/).",
    ]);
    assert_eq!(
        render_body(&body),
        "<p>An <strong>opening</strong> line.</p>\n<h3>Reading</h3>\n<p>See <a href=\"/\">the index</a>.</p>"
    );
}

// =============================================================
// Summaries
// =============================================================

#[test]
fn summary_is_plain_text() {
    let summary = lines(&["A <em>short</em> teaser", "", "over   two lines"]);
    assert_eq!(render_summary(&summary), "A short teaser over two lines");
}

#[test]
fn summary_drops_comments() {
    let summary = lines(&["visible <!-- invisible -->"]);
    assert_eq!(render_summary(&summary), "visible");
}
