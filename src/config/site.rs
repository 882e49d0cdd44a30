//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub language: String,
    pub theme_color: String,

    // URL
    pub url: String,
    pub stylesheet: String,

    // Directory
    pub source_dir: String,
    pub manifest: String,
    pub post_dir: String,
    pub sitemap: String,

    // Writing
    pub default_category: String,
    pub max_tags: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            subtitle: "News • Forecasts • Reviews • Notes".to_string(),
            author: "John Doe".to_string(),
            language: "en".to_string(),
            theme_color: "#0b1020".to_string(),

            url: "http://example.com".to_string(),
            stylesheet: "styles.css".to_string(),

            source_dir: "posts".to_string(),
            manifest: "index.json".to_string(),
            post_dir: "p".to_string(),
            sitemap: "sitemap.xml".to_string(),

            default_category: "post".to_string(),
            max_tags: 10,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
