use serde::{Deserialize, Serialize};

use crate::types::ChartEntry;

/// Ways of finding Top 10 item containers on the primary source, tried in
/// order until one matches any element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStrategy {
    /// `data-uia` hooks and list items.
    Top10Hooks,
    /// Any article, list item or div that carries an image.
    ImageBearing,
}

pub const PRIMARY_STRATEGIES: [CandidateStrategy; 2] =
    [CandidateStrategy::Top10Hooks, CandidateStrategy::ImageBearing];

/// Primary extraction result with the evidence behind its ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryExtraction {
    pub entries: Vec<ChartEntry>,
    /// Strategy whose candidates were used, `None` when no strategy matched.
    pub strategy: Option<CandidateStrategy>,
    /// Titled candidates inside the inspection window.
    pub candidates: usize,
    /// How many of those carried a rank.
    pub ranked: usize,
    pub sorted_by_rank: bool,
}
