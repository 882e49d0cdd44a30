//! Post manifest (`posts/index.json`)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::BuildError;

/// One entry of the manifest's `posts` list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    pub slug: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    /// `Some` only when the manifest gives an actual list
    pub tags: Option<Vec<String>>,
}

impl PostEntry {
    /// Build an entry from a raw manifest value
    ///
    /// Returns `None` for non-objects and entries without a usable slug.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| object.get(key).and_then(scalar_string);

        let slug = field("slug")?;
        let tags = object
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(scalar_string).collect());

        Some(Self {
            slug,
            title: field("title"),
            date: field("date"),
            category: field("category"),
            summary: field("summary"),
            tags,
        })
    }
}

/// Stringify a JSON scalar, treating empty strings as absent
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The ordered list of posts to build
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub posts: Vec<PostEntry>,
}

impl Manifest {
    /// Load the manifest from disk
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        if !path.exists() {
            return Err(BuildError::ManifestNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| BuildError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse manifest JSON; a missing or non-array `posts` is an empty list
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let raw: Value = serde_json::from_str(content)?;
        let posts = raw
            .get("posts")
            .and_then(Value::as_array)
            .map(|posts| posts.iter().filter_map(PostEntry::from_value).collect())
            .unwrap_or_default();
        Ok(Self { posts })
    }
}
