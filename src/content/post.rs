//! Post model

use serde::Serialize;
use std::path::PathBuf;

use super::{markdown, FrontMatter, PostEntry};
use crate::config::SiteConfig;
use crate::helpers::canonical_url;

/// A post with its metadata resolved and body rendered
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Slug (URL-friendly name)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as written by the author, possibly empty
    pub date: String,

    /// Post category
    pub category: String,

    /// Short summary, possibly empty
    pub summary: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Rendered HTML fragment
    pub content: String,

    /// Full canonical URL
    pub permalink: String,

    /// Source markdown file
    pub source: PathBuf,
}

impl Post {
    /// Resolve a post from its manifest entry and raw source document
    ///
    /// Manifest values win over front-matter values for the same field.
    pub fn from_source(
        config: &SiteConfig,
        entry: &PostEntry,
        raw: &str,
        source: PathBuf,
    ) -> Self {
        let (fm, body) = FrontMatter::parse(raw);

        let pick = |manifest: &Option<String>, key: &str| {
            manifest
                .clone()
                .or_else(|| fm.get(key).map(str::to_string))
        };

        Self {
            slug: entry.slug.clone(),
            title: pick(&entry.title, "title").unwrap_or_else(|| entry.slug.clone()),
            date: pick(&entry.date, "date").unwrap_or_default(),
            category: pick(&entry.category, "category")
                .unwrap_or_else(|| config.default_category.clone()),
            summary: pick(&entry.summary, "summary").unwrap_or_default(),
            tags: entry.tags.clone().unwrap_or_else(|| fm.tags()),
            content: markdown::render(body),
            permalink: canonical_url(config, &entry.slug),
            source,
        }
    }

    /// Tags to display, silently capped at `max`
    pub fn visible_tags(&self, max: usize) -> &[String] {
        &self.tags[..self.tags.len().min(max)]
    }
}
