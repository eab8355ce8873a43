//! Render Tools

mod tests;
pub mod types;

pub use types::*;

use crate::types::{ChartEntry, DEFAULT_OUTPUT_CAP};
use url::Url;

/// Fallback artwork service.
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://via.placeholder.com/260x170";

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the carousel content with a single informational message.
    pub fn show_message(&mut self, text: &str) {
        self.children.clear();
        self.children.push(CarouselNode::Message {
            text: text.to_string(),
        });
    }

    pub fn items(&self) -> impl Iterator<Item = &CarouselItem> {
        self.children.iter().filter_map(|node| match node {
            CarouselNode::Item(item) => Some(item),
            CarouselNode::Message { .. } => None,
        })
    }

    pub fn message(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            CarouselNode::Message { text } => Some(text.as_str()),
            CarouselNode::Item(_) => None,
        })
    }

    /// Serialize as an HTML fragment suitable for the `.content-carousel` element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                CarouselNode::Message { text } => {
                    out.push_str(r#"<p class="chart-message">"#);
                    out.push_str(&html_escape::encode_text(text));
                    out.push_str("</p>");
                }
                CarouselNode::Item(item) => {
                    out.push_str(r#"<img loading="lazy" role="listitem" alt=""#);
                    out.push_str(&html_escape::encode_double_quoted_attribute(&item.alt));
                    out.push_str(r#"" src=""#);
                    out.push_str(&html_escape::encode_double_quoted_attribute(&item.src));
                    out.push_str(r#"">"#);
                }
            }
        }
        out
    }
}

/// Render `entries` into `target` with the default placeholder service and cap.
pub fn render(target: &mut Carousel, entries: &[ChartEntry]) {
    render_with(target, entries, DEFAULT_PLACEHOLDER_BASE, DEFAULT_OUTPUT_CAP);
}

/// Replace everything in `target` with at most `cap` tiles built from `entries`.
///
/// An empty list renders the no-data message instead.
pub fn render_with(
    target: &mut Carousel,
    entries: &[ChartEntry],
    placeholder_base: &str,
    cap: usize,
) {
    if entries.is_empty() {
        target.show_message(NO_DATA_MESSAGE);
        return;
    }

    target.children = entries
        .iter()
        .take(cap)
        .enumerate()
        .map(|(idx, entry)| {
            let rank = entry.rank.unwrap_or(idx as u32 + 1);
            let title = entry.title.trim();
            let src = entry
                .image
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| placeholder_uri(placeholder_base, rank, title));
            let label = if title.is_empty() { "Title" } else { title };
            CarouselNode::Item(CarouselItem {
                rank,
                title: entry.title.clone(),
                src,
                alt: format!("{label} (Rank {rank})"),
            })
        })
        .collect();
}

/// Placeholder artwork URI carrying `"<rank>. <title>"` as URL-encoded text.
pub fn placeholder_uri(base: &str, rank: u32, title: &str) -> String {
    let title = if title.trim().is_empty() { "Top" } else { title.trim() };
    let text = format!("{rank}. {title}");
    match Url::parse(base) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("text", &text);
            url.to_string()
        }
        Err(_) => {
            let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
            format!("{base}?text={encoded}")
        }
    }
}
