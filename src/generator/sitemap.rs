//! XML sitemap

use crate::config::SiteConfig;
use crate::helpers::{full_url_for, html_escape};

/// Build `sitemap.xml` for the site root followed by `urls` in order
pub fn render_sitemap(config: &SiteConfig, urls: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');
    push_entry(&mut xml, &full_url_for(config, ""), "daily", "1.0");
    for url in urls {
        push_entry(&mut xml, url, "weekly", "0.7");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn push_entry(xml: &mut String, loc: &str, changefreq: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", html_escape(loc)));
    xml.push_str(&format!("    <changefreq>{}</changefreq>\n", changefreq));
    xml.push_str(&format!("    <priority>{}</priority>\n", priority));
    xml.push_str("  </url>\n");
}
