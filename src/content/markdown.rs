//! Restricted markdown to safe HTML
//!
//! The dialect covers `#`/`##`/`###` headings, flat `-` lists, paragraphs and
//! the inline spans code, bold, italic and link. Everything else is text.
//! Output only ever contains the tags `h1 h2 h3 ul li p code b i a`; all other
//! content is escaped before any markup is produced.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::helpers::{external_link, html_escape};

lazy_static! {
    static ref H3: Regex = Regex::new(r"^###\s+").unwrap();
    static ref H2: Regex = Regex::new(r"^##\s+").unwrap();
    static ref H1: Regex = Regex::new(r"^#\s+").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"^-\s+").unwrap();
    static ref CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
}

/// Whether a `<ul>` is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Closed,
    Open,
}

/// Line-at-a-time markdown renderer
struct MarkdownRenderer {
    html: String,
    list: ListState,
}

impl MarkdownRenderer {
    fn new() -> Self {
        Self {
            html: String::new(),
            list: ListState::Closed,
        }
    }

    fn push_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.close_list();
            return;
        }

        // Longest marker first so `###` never reads as `#`
        for (marker, tag) in [(&*H3, "h3"), (&*H2, "h2"), (&*H1, "h1")] {
            if let Some(m) = marker.find(line) {
                self.close_list();
                self.push_element(tag, &line[m.end()..]);
                return;
            }
        }

        if let Some(m) = LIST_ITEM.find(line) {
            self.open_list();
            self.push_element("li", &line[m.end()..]);
            return;
        }

        self.close_list();
        self.push_element("p", line);
    }

    fn push_element(&mut self, tag: &str, text: &str) {
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push('>');
        self.html.push_str(&inline(text));
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');
    }

    fn open_list(&mut self) {
        if self.list == ListState::Closed {
            self.html.push_str("<ul>");
            self.list = ListState::Open;
        }
    }

    fn close_list(&mut self) {
        if self.list == ListState::Open {
            self.html.push_str("</ul>");
            self.list = ListState::Closed;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.html
    }
}

/// Render a markdown body to an HTML fragment
pub fn render(markdown: &str) -> String {
    let markdown = markdown.replace("\r\n", "\n");
    let mut renderer = MarkdownRenderer::new();
    for line in markdown.split('\n') {
        renderer.push_line(line.trim_end());
    }
    renderer.finish()
}

/// Render the inline spans of a single line
///
/// Order matters: escape, then code, bold, italic, link. Every step after the
/// first works on already escaped text.
pub fn inline(text: &str) -> String {
    let out = html_escape(text);
    let out = CODE.replace_all(&out, |caps: &Captures| {
        format!("<code>{}</code>", html_escape(&caps[1]))
    });
    let out = BOLD.replace_all(&out, "<b>${1}</b>");
    let out = ITALIC.replace_all(&out, "<i>${1}</i>");
    let out = LINK.replace_all(&out, |caps: &Captures| {
        external_link(&caps[2], &caps[1]).unwrap_or_else(|| html_escape(&caps[1]))
    });
    out.into_owned()
}
