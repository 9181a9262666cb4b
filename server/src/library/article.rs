//! Article source parsing.
//!
//! An article file is sectioned text:
//!
//! ```text
//! # A signature line opening the metadata block
//! * title: My first post
//! * date: 20250712
//! * category: notes
//!
//! ## summary
//! One or two plain-text teaser lines.
//!
//! ## article
//! The body, in markdown-lite syntax.
//!
//! ## see more
//! Optional trailing links.
//! ```
//!
//! Metadata falls back to the filename: `20250712_My_First_Post.md` carries
//! both a date and a title. `date` falls back to today when neither is
//! present, `category` to "uncategorized", and the slug to the sanitized
//! filename stem.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::LibraryError;
use super::decorate;

/// Category used when the source names none.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Compact date form used in metadata and filenames.
const COMPACT_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year][month][day]");

/// ISO date form used on the wire and in page metadata.
const DISPLAY_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

static METADATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\* (\w+): (.*)$").expect("metadata regex"));

static DATED_STEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{8})_(.+)$").expect("dated stem regex"));

static UNSAFE_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/*?:"<>| ]"#).expect("slug regex"));

/// One fully rendered article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub date: Date,
    pub category: String,
    /// Plain-text teaser (tags and comments stripped).
    pub summary: String,
    /// Rendered HTML body.
    pub body_html: String,
    /// Rendered "see more" section, absent when the source has none.
    pub see_more_html: Option<String>,
}

impl Article {
    /// Parse and render one article source.
    ///
    /// `stem` is the filename without extension; `today` is the fallback
    /// date, injected so parsing stays deterministic under test.
    ///
    /// # Errors
    ///
    /// Returns an error when a date (metadata or filename) does not parse
    /// as `YYYYMMDD`.
    pub fn from_source(stem: &str, raw: &str, today: Date) -> Result<Self, LibraryError> {
        let sections = split_sections(raw);

        let mut slug = sanitize_slug(stem);
        let mut title;
        let mut date = None;
        let mut category = DEFAULT_CATEGORY.to_owned();

        if let Some(caps) = DATED_STEM_RE.captures(stem) {
            date = Some(parse_date(stem, &caps[1])?);
            title = caps[2].replace('_', " ");
        } else {
            title = stem.replace('_', " ");
        }

        for (key, value) in &sections.metadata {
            match key.as_str() {
                "title" => title = value.clone(),
                "slug" => slug = sanitize_slug(value),
                "date" => date = Some(parse_date(stem, value)?),
                "category" => category = value.clone(),
                // Unknown keys are allowed so sources can carry their own
                // annotations.
                _ => {}
            }
        }

        let see_more_html = if sections.see_more.iter().all(|l| l.trim().is_empty()) {
            None
        } else {
            Some(decorate::render_body(&sections.see_more))
        };

        Ok(Self {
            slug,
            title,
            date: date.unwrap_or(today),
            category,
            summary: decorate::render_summary(&sections.summary),
            body_html: decorate::render_body(&sections.article),
            see_more_html,
        })
    }

    /// ISO `YYYY-MM-DD` form of the article date.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE).unwrap_or_default()
    }
}

/// Replace filesystem- and URL-unsafe characters with underscores.
#[must_use]
pub fn sanitize_slug(value: &str) -> String {
    UNSAFE_SLUG_RE.replace_all(value, "_").into_owned()
}

fn parse_date(file: &str, value: &str) -> Result<Date, LibraryError> {
    Date::parse(value, COMPACT_DATE).map_err(|_| LibraryError::InvalidDate {
        file: file.to_owned(),
        value: value.to_owned(),
    })
}

#[derive(Debug, Default)]
struct Sections {
    metadata: Vec<(String, String)>,
    summary: Vec<String>,
    article: Vec<String>,
    see_more: Vec<String>,
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Preamble,
    Metadata,
    Summary,
    Article,
    SeeMore,
}

/// Split a source into its metadata block and body sections. Section
/// headers themselves are not part of the content; blank lines are kept so
/// paragraph breaks survive rendering.
fn split_sections(raw: &str) -> Sections {
    let mut sections = Sections::default();
    let mut mode = Mode::Preamble;

    for line in raw.lines() {
        let line = line.trim_end();
        if line.starts_with("# ") {
            mode = Mode::Metadata;
            continue;
        }
        if line.starts_with("## ") {
            mode = match line[3..].trim() {
                "summary" => Mode::Summary,
                "article" => Mode::Article,
                "see more" => Mode::SeeMore,
                // An unknown section reads as body text ending the previous
                // section; keep scanning without collecting it.
                _ => Mode::Preamble,
            };
            continue;
        }

        match mode {
            Mode::Preamble => {}
            Mode::Metadata => {
                if let Some(caps) = METADATA_RE.captures(line) {
                    sections.metadata.push((caps[1].to_owned(), caps[2].to_owned()));
                }
            }
            Mode::Summary => sections.summary.push(line.to_owned()),
            Mode::Article => sections.article.push(line.to_owned()),
            Mode::SeeMore => sections.see_more.push(line.to_owned()),
        }
    }
    sections
}
