//! Post page assembly

use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{full_url_for, html_escape};

/// Head-level metadata of a rendered document
pub struct DocumentMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub canonical: &'a str,
}

/// Render the complete HTML document for a post
pub fn render_post(config: &SiteConfig, post: &Post, year: i32) -> Result<String> {
    let title = format!("{} — {}", post.title, config.title);
    let description = if post.summary.is_empty() {
        format!("Post on {}", config.title)
    } else {
        post.summary.clone()
    };

    let body = format!(
        "{}<div class=\"postBody\">{}</div>",
        post_header(config, post),
        post.content
    );

    let meta = DocumentMeta {
        title: &title,
        description: &description,
        canonical: &post.permalink,
    };
    let json_ld = script_safe_json(&article_json_ld(config, post))?;

    Ok(render_document(config, &meta, &body, &json_ld, year))
}

/// Kicker, title, optional summary and tags above the post body
fn post_header(config: &SiteConfig, post: &Post) -> String {
    let mut html = String::new();

    html.push_str("\n      <div class=\"kicker\">");
    html.push_str(&html_escape(&post.category));
    if !post.date.is_empty() {
        html.push_str(" • ");
        html.push_str(&html_escape(&post.date));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "      <h1 class=\"h2\" style=\"margin-top:8px;\">{}</h1>\n",
        html_escape(&post.title)
    ));

    if !post.summary.is_empty() {
        html.push_str(&format!(
            "      <p class=\"muted\">{}</p>\n",
            html_escape(&post.summary)
        ));
    }

    let tags = post.visible_tags(config.max_tags);
    if !tags.is_empty() {
        html.push_str("      <div class=\"tags\" style=\"margin-top:10px;\">");
        for tag in tags {
            html.push_str(&format!("<span class=\"tag\">{}</span>", html_escape(tag)));
        }
        html.push_str("</div>\n");
    }

    html.push_str(
        "      <hr style=\"border:0;border-top:1px solid rgba(255,255,255,.10);margin:14px 0;\">\n    ",
    );
    html
}

/// schema.org Article record for a post
pub fn article_json_ld(config: &SiteConfig, post: &Post) -> Value {
    let mut ld = Map::new();
    ld.insert("@context".into(), json!("https://schema.org"));
    ld.insert("@type".into(), json!("Article"));
    ld.insert("headline".into(), json!(post.title));
    if !post.date.is_empty() {
        ld.insert("datePublished".into(), json!(post.date));
    }
    ld.insert(
        "author".into(),
        json!({"@type": "Person", "name": config.author}),
    );
    ld.insert(
        "publisher".into(),
        json!({"@type": "Organization", "name": config.author}),
    );
    ld.insert("mainEntityOfPage".into(), json!(post.permalink));
    ld.insert("url".into(), json!(post.permalink));
    Value::Object(ld)
}

/// Serialize JSON for embedding in a `<script>` element
fn script_safe_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Wrap a body fragment in the site chrome
pub fn render_document(
    config: &SiteConfig,
    meta: &DocumentMeta,
    body: &str,
    json_ld: &str,
    year: i32,
) -> String {
    let title = html_escape(meta.title);
    let description = html_escape(meta.description);
    let canonical = html_escape(meta.canonical);
    let author = html_escape(&config.author);
    let site_title = html_escape(&config.title);
    let subtitle = html_escape(&config.subtitle);
    let home = html_escape(&full_url_for(config, ""));
    let stylesheet = html_escape(&full_url_for(config, &config.stylesheet));

    format!(
        r##"<!doctype html>
<html lang="{lang}">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width,initial-scale=1,viewport-fit=cover"/>
  <meta name="theme-color" content="{theme_color}"/>

  <title>{title}</title>
  <meta name="description" content="{description}"/>
  <meta name="author" content="{author}"/>
  <meta name="publisher" content="{author}"/>

  <link rel="canonical" href="{canonical}"/>

  <meta property="og:title" content="{title}"/>
  <meta property="og:description" content="{description}"/>
  <meta property="og:type" content="article"/>
  <meta property="og:url" content="{canonical}"/>

  <meta name="twitter:card" content="summary"/>
  <meta name="twitter:title" content="{title}"/>
  <meta name="twitter:description" content="{description}"/>

  <script type="application/ld+json">{json_ld}</script>

  <link rel="stylesheet" href="{stylesheet}"/>
</head>
<body>
  <header class="header" id="top">
    <div class="container header__row">
      <a class="brand" href="{home}" aria-label="Home">
        <span class="brand__mark" aria-hidden="true"></span>
        <span class="brand__text">
          <span class="brand__title">{site_title}</span>
          <span class="brand__sub">{subtitle}</span>
        </span>
      </a>
      <nav class="nav" aria-label="Primary">
        <a class="nav__link" href="{home}#feed">Posts</a>
        <a class="nav__link" href="{home}#about">About</a>
        <a class="nav__link" href="{home}#contact">Contact</a>
      </nav>
    </div>
  </header>

  <main class="section">
    <div class="container">
      <article class="contactCard">
        {body}
        <div class="footer" style="margin-top:18px;">
          <span class="muted">© {year} {author}</span>
          <span class="muted"><a href="{home}#feed">Back to feed</a></span>
        </div>
      </article>
    </div>
  </main>
</body>
</html>"##,
        lang = html_escape(&config.language),
        theme_color = html_escape(&config.theme_color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> SiteConfig {
        SiteConfig {
            title: "Site".to_string(),
            author: "Jane <Doe>".to_string(),
            url: "https://example.com".to_string(),
            ..SiteConfig::default()
        }
    }

    fn test_post() -> Post {
        Post {
            slug: "hello".to_string(),
            title: "Hello <World>".to_string(),
            date: "2024-01-15".to_string(),
            category: "news".to_string(),
            summary: String::new(),
            tags: Vec::new(),
            content: "<p>Body</p>".to_string(),
            permalink: "https://example.com/p/hello/".to_string(),
            source: PathBuf::from("posts/hello.md"),
        }
    }

    #[test]
    fn test_render_post_head() {
        let html = render_post(&test_config(), &test_post(), 2026).unwrap();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Hello &lt;World&gt; — Site</title>"));
        assert!(html.contains(r#"<meta name="description" content="Post on Site"/>"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/p/hello/"/>"#));
        assert!(html.contains(r#"<meta name="author" content="Jane &lt;Doe&gt;"/>"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="https://example.com/styles.css"/>"#));
        assert!(html.contains("© 2026 Jane &lt;Doe&gt;"));
    }

    #[test]
    fn test_render_post_body() {
        let html = render_post(&test_config(), &test_post(), 2026).unwrap();
        assert!(html.contains(r#"<div class="kicker">news • 2024-01-15</div>"#));
        assert!(html.contains(r#"<div class="postBody"><p>Body</p></div>"#));
        assert!(!html.contains(r#"<p class="muted">"#));
        assert!(!html.contains(r#"<div class="tags""#));
    }

    #[test]
    fn test_optional_blocks() {
        let mut post = test_post();
        post.date = String::new();
        post.summary = "A & B".to_string();
        post.tags = (0..11).map(|i| format!("<t{i}>")).collect();

        let html = render_post(&test_config(), &post, 2026).unwrap();
        assert!(html.contains(r#"<div class="kicker">news</div>"#));
        assert!(html.contains(r#"<p class="muted">A &amp; B</p>"#));
        assert!(html.contains(r#"<meta name="description" content="A &amp; B"/>"#));
        assert_eq!(html.matches(r#"<span class="tag">"#).count(), 10);
        assert!(html.contains(r#"<span class="tag">&lt;t9&gt;</span>"#));
        assert!(!html.contains("t10"));
    }

    #[test]
    fn test_article_json_ld() {
        let ld = article_json_ld(&test_config(), &test_post());
        assert_eq!(ld["@type"], "Article");
        assert_eq!(ld["headline"], "Hello <World>");
        assert_eq!(ld["datePublished"], "2024-01-15");
        assert_eq!(ld["author"]["name"], "Jane <Doe>");
        assert_eq!(ld["publisher"]["@type"], "Organization");
        assert_eq!(ld["url"], "https://example.com/p/hello/");

        let mut post = test_post();
        post.date = String::new();
        let ld = article_json_ld(&test_config(), &post);
        assert!(ld.get("datePublished").is_none());
    }

    #[test]
    fn test_json_ld_cannot_close_script() {
        let mut post = test_post();
        post.title = "</script><script>alert(1)</script>".to_string();
        let html = render_post(&test_config(), &post, 2026).unwrap();
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r#""headline":"\u003c/script\u003e"#));
    }
}
