//! Generator module - assembles post pages and the sitemap and writes them out

mod page;
mod sitemap;

pub use page::{article_json_ld, render_document, render_post, DocumentMeta};
pub use sitemap::render_sitemap;

use anyhow::Result;
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Post;
use crate::Site;

/// Writes rendered pages into the output tree
pub struct Generator {
    site: Site,
    year: i32,
}

impl Generator {
    /// Create a new generator stamping pages with the current year
    pub fn new(site: &Site) -> Self {
        Self::with_year(site, chrono::Local::now().year())
    }

    /// Create a generator with a fixed copyright year
    pub fn with_year(site: &Site, year: i32) -> Self {
        Self {
            site: site.clone(),
            year,
        }
    }

    /// Render a post and write it to `<post_dir>/<slug>/index.html`
    pub fn write_post(&self, post: &Post) -> Result<PathBuf> {
        let html = render_post(&self.site.config, post, self.year)?;
        let output_path = self.site.post_dir.join(&post.slug).join("index.html");
        write_file(&output_path, &html)?;
        tracing::debug!("Generated post: {:?}", output_path);
        Ok(output_path)
    }

    /// Write the sitemap listing the site root and `urls`
    pub fn write_sitemap(&self, urls: &[String]) -> Result<PathBuf> {
        let xml = render_sitemap(&self.site.config, urls);
        write_file(&self.site.sitemap_path, &xml)?;
        tracing::debug!("Generated sitemap: {:?}", self.site.sitemap_path);
        Ok(self.site.sitemap_path.clone())
    }
}

/// Write a file, creating parent directories as needed
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
    }
    fs::write(path, content).map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", path, e))?;
    Ok(())
}
