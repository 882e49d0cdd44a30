//! Generate post pages and the sitemap

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::{Manifest, Post};
use crate::generator::Generator;
use crate::Site;

/// Outcome of a build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Canonical URLs of the generated pages, in manifest order
    pub urls: Vec<String>,
    /// Source files named by the manifest that do not exist
    pub skipped: Vec<PathBuf>,
    /// Where the sitemap was written
    pub sitemap: PathBuf,
}

impl BuildReport {
    pub fn generated(&self) -> usize {
        self.urls.len()
    }
}

/// Generate the site
pub fn run(site: &Site) -> Result<BuildReport> {
    run_with_generator(site, &Generator::new(site))
}

/// Generate the site with a preconfigured generator
pub fn run_with_generator(site: &Site, generator: &Generator) -> Result<BuildReport> {
    let start = std::time::Instant::now();

    let manifest = Manifest::load(&site.manifest_path())?;
    tracing::info!("Loaded {} posts from manifest", manifest.posts.len());

    fs::create_dir_all(&site.post_dir)?;

    let mut report = BuildReport::default();

    for entry in &manifest.posts {
        let source = site.source_path(&entry.slug);
        if !source.exists() {
            tracing::warn!("Missing md: {}", source.display());
            report.skipped.push(source);
            continue;
        }

        let raw = fs::read_to_string(&source)?;
        let post = Post::from_source(&site.config, entry, &raw, source);
        generator.write_post(&post)?;
        report.urls.push(post.permalink);
    }

    report.sitemap = generator.write_sitemap(&report.urls)?;

    if !report.skipped.is_empty() {
        tracing::warn!("Skipped {} posts with missing sources", report.skipped.len());
    }
    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}
