//! Helper functions shared by the converter and the assemblers

mod html;
mod url;

pub use html::*;
pub use url::*;
