use serde::{Deserialize, Serialize};

/// Shown when there is nothing to render.
pub const NO_DATA_MESSAGE: &str = "No chart data available.";

/// Shown when every source failed.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load charts right now.";

/// One rendered chart tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    /// Display rank: source-provided, else the 1-based list position.
    pub rank: u32,
    pub title: String,
    pub src: String,
    /// Accessible label combining title and display rank.
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CarouselNode {
    Message { text: String },
    Item(CarouselItem),
}

/// A section's render target. Every render replaces all of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    pub children: Vec<CarouselNode>,
}
