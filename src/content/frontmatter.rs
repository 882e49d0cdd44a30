//! Front-matter parsing

use std::collections::BTreeMap;

/// Front-matter delimiter
const DELIMITER: &str = "---";

/// Key-value metadata from the header of a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: BTreeMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, trimmed_body)
    ///
    /// A document without an opening `---`, or whose header is never closed,
    /// is all body.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(rest) = content.strip_prefix(DELIMITER) else {
            return (FrontMatter::default(), content.trim());
        };

        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content.trim());
        };

        let header = rest[..end_pos].trim();
        let body = rest[end_pos + 4..].trim();

        let fields = header.split('\n').filter_map(parse_field).collect();

        (FrontMatter { fields }, body)
    }

    /// Get a field value, treating empty values as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Comma separated `tags` field
    pub fn tags(&self) -> Vec<String> {
        self.get("tags")
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Split a `key: value` line on its first colon
fn parse_field(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    if key.is_empty() {
        return None;
    }
    Some((key.trim().to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let (fm, body) = FrontMatter::parse("---\ntitle: X\n---\nBody");
        assert_eq!(fm.get("title"), Some("X"));
        assert_eq!(fm.len(), 1);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "\n  # Hello\n\nSome text.\n\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content.trim());
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let content = "---\ntitle: Never closed\n\nBody text";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content.trim());
    }

    #[test]
    fn test_leading_whitespace_is_not_frontmatter() {
        let (fm, body) = FrontMatter::parse("\n---\ntitle: X\n---\nBody");
        assert!(fm.is_empty());
        assert!(body.starts_with("---"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let content = "---\nsummary: Time: 10:30\nurl:  https://a.com/x \n---\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get("summary"), Some("Time: 10:30"));
        assert_eq!(fm.get("url"), Some("https://a.com/x"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_malformed_lines_ignored() {
        let content = "---\njust some words\n: no key\ntitle: Kept\n---\nBody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.get("title"), Some("Kept"));
    }

    #[test]
    fn test_crlf_frontmatter() {
        let (fm, body) = FrontMatter::parse("---\r\ntitle: X\r\ndate: 2024-01-15\r\n---\r\nBody\r\n");
        assert_eq!(fm.get("title"), Some("X"));
        assert_eq!(fm.get("date"), Some("2024-01-15"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_tags() {
        let (fm, _) = FrontMatter::parse("---\ntags: rust, , markdown ,ssg\n---\n");
        assert_eq!(fm.tags(), vec!["rust", "markdown", "ssg"]);

        let (fm, _) = FrontMatter::parse("---\ntags:\n---\n");
        assert!(fm.tags().is_empty());
        assert_eq!(fm.get("tags"), None);
    }
}
