//! Content module - handles the manifest, posts, and markdown processing

mod frontmatter;
pub mod manifest;
pub mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use manifest::{Manifest, PostEntry};
pub use post::Post;
