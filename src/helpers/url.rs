//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a single URL path segment
pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "styles.css") // -> "https://example.com/styles.css"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!("{}/{}", config.base_url(), path.trim_start_matches('/'))
}

/// Canonical URL of a post page
///
/// # Examples
/// ```ignore
/// canonical_url(&config, "hello world") // -> "https://example.com/p/hello%20world/"
/// ```
pub fn canonical_url(config: &SiteConfig, slug: &str) -> String {
    format!(
        "{}/{}/{}/",
        config.base_url(),
        config.post_dir.trim_matches('/'),
        encode_component(slug)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/blog/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_component("a b/c?d"), "a%20b%2Fc%3Fd");
        assert_eq!(encode_component("привет"), "%D0%BF%D1%80%D0%B8%D0%B2%D0%B5%D1%82");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, ""), "https://example.com/blog/");
        assert_eq!(
            full_url_for(&config, "/styles.css"),
            "https://example.com/blog/styles.css"
        );
    }

    #[test]
    fn test_canonical_url() {
        let config = test_config();
        assert_eq!(
            canonical_url(&config, "first post"),
            "https://example.com/blog/p/first%20post/"
        );
    }
}
