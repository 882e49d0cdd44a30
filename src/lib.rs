//! build-posts: render a manifest of markdown posts into HTML pages and a sitemap
//!
//! Reads `posts/index.json` and `posts/<slug>.md`, writes
//! `p/<slug>/index.html` for every post whose source exists, then
//! `sitemap.xml` at the site root.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;

pub use error::BuildError;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the manifest and markdown sources
    pub source_dir: PathBuf,
    /// Output directory for post pages
    pub post_dir: PathBuf,
    /// Output path of the sitemap
    pub sitemap_path: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.source_dir);
        let post_dir = base_dir.join(&config.post_dir);
        let sitemap_path = base_dir.join(&config.sitemap);

        Self {
            config,
            base_dir,
            source_dir,
            post_dir,
            sitemap_path,
        }
    }

    /// Path of the post manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.source_dir.join(&self.config.manifest)
    }

    /// Path of the markdown source for a slug
    pub fn source_path(&self, slug: &str) -> PathBuf {
        self.source_dir.join(format!("{}.md", slug))
    }

    /// Generate every post page and the sitemap
    pub fn generate(&self) -> Result<commands::generate::BuildReport> {
        commands::generate::run(self)
    }
}
