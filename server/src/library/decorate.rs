//! Markdown-lite rendering for article bodies.
//!
//! The source format supports a small inline vocabulary (bold, emphasis,
//! code, strikethrough, images, links), two heading levels, and horizontal
//! rules. `# ` and `## ` are reserved by the sectioned source format, so
//! headings start at `### `. HTML comments are stripped everywhere.
//! Summaries render to plain text instead of HTML.

#[cfg(test)]
#[path = "decorate_test.rs"]
mod decorate_test;

use std::sync::LazyLock;

use regex::Regex;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));

static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("strong regex"));

static EM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("em regex"));

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").expect("code regex"));

static DEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.*?)~~").expect("del regex"));

// Images must be rewritten before links: a link pattern would otherwise
// consume the bracketed part of `![alt](src)` and leave a stray `!`.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex"));

static H4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#### +(.*?)$").expect("h4 regex"));

static H3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### +(.*?)$").expect("h3 regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

/// Remove HTML comments, including multi-line ones.
#[must_use]
pub fn strip_comments(text: &str) -> String {
    COMMENT_RE.replace_all(text, "").into_owned()
}

/// Remove HTML tags, leaving their text content.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Apply the inline vocabulary and headings.
#[must_use]
pub fn decorate(text: &str) -> String {
    let text = STRONG_RE.replace_all(text, "<strong>${1}</strong>");
    let text = EM_RE.replace_all(&text, "<em>${1}</em>");
    let text = CODE_RE.replace_all(&text, "<code>${1}</code>");
    let text = DEL_RE.replace_all(&text, "<del>${1}</del>");
    let text = IMAGE_RE.replace_all(&text, r#"<img src="${2}" alt="${1}">"#);
    let text = LINK_RE.replace_all(&text, r#"<a href="${2}">${1}</a>"#);
    let text = H4_RE.replace_all(&text, "<h4>${1}</h4>");
    let text = H3_RE.replace_all(&text, "<h3>${1}</h3>");
    text.into_owned()
}

/// Render body section lines to HTML: strip comments, decorate, then group
/// lines into paragraphs.
#[must_use]
pub fn render_body(lines: &[String]) -> String {
    let text = lines.join("\n");
    let text = strip_comments(&text);
    let text = decorate(&text);
    paragraphize(&text)
}

/// Render summary lines to plain text: comments and tags stripped,
/// whitespace collapsed. Markdown markers are left as written.
#[must_use]
pub fn render_summary(lines: &[String]) -> String {
    let text = lines.join("\n");
    let text = strip_comments(&text);
    let text = strip_tags(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Group decorated lines into blocks: blank lines separate paragraphs,
/// lines within a paragraph are joined with `<br>`, and heading /
/// horizontal-rule lines stand alone.
fn paragraphize(decorated: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in decorated.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut blocks, &mut paragraph);
        } else if line.starts_with("---") {
            flush(&mut blocks, &mut paragraph);
            blocks.push("<hr>".to_owned());
        } else if line.starts_with("<h3>") || line.starts_with("<h4>") {
            flush(&mut blocks, &mut paragraph);
            blocks.push(line.to_owned());
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut blocks, &mut paragraph);
    blocks.join("\n")
}

fn flush(blocks: &mut Vec<String>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(format!("<p>{}</p>", paragraph.join("<br>\n")));
        paragraph.clear();
    }
}
