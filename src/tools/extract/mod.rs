//! Extract Tools
//!
//! Heuristic chart parsers. Both are pure and never fail: markup they cannot
//! make sense of yields an empty list.

pub mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::types::{ChartEntry, RankTrust, DEFAULT_OUTPUT_CAP};
use scraper::Html;

/// Extract a Top 10 list from primary-source markup with the default
/// rank-trust policy and output cap.
pub fn extract_primary(markup: &str) -> Vec<ChartEntry> {
    extract_primary_with(markup, &RankTrust::default(), DEFAULT_OUTPUT_CAP).entries
}

/// Extract a Top 10 list from primary-source markup.
///
/// The first strategy in [`PRIMARY_STRATEGIES`] order that matches any
/// candidate element is used, even when none of its candidates carry a title.
/// Titled candidates are capped at `trust.window`; when at least `trust.threshold`
/// of them carry a rank the list is sorted by rank (unranked last), otherwise
/// document order is kept. The result is capped at `cap`.
pub fn extract_primary_with(markup: &str, trust: &RankTrust, cap: usize) -> PrimaryExtraction {
    let doc = Html::parse_document(markup);

    let Some((strategy, found)) = PRIMARY_STRATEGIES.iter().find_map(|strategy| {
        let found = candidates(&doc, *strategy);
        (!found.is_empty()).then_some((*strategy, found))
    }) else {
        return PrimaryExtraction {
            entries: Vec::new(),
            strategy: None,
            candidates: 0,
            ranked: 0,
            sorted_by_rank: false,
        };
    };

    let mut items = titled_entries(found);
    items.truncate(trust.window);
    let titled = items.len();
    let ranked = items.iter().filter(|item| item.rank.is_some()).count();
    let sorted_by_rank = ranked >= trust.threshold;

    let entries = order_by_rank_trust(items, sorted_by_rank, cap);

    PrimaryExtraction {
        entries,
        strategy: Some(strategy),
        candidates: titled,
        ranked,
        sorted_by_rank,
    }
}

/// Extract a ranked list from fallback-source table markup, capped at the
/// default output cap.
pub fn extract_fallback(markup: &str) -> Vec<ChartEntry> {
    extract_fallback_with(markup, DEFAULT_OUTPUT_CAP)
}

/// Extract a ranked list from fallback-source table markup.
///
/// Only rows with both a numeric rank and a non-empty title are kept, in
/// source order.
pub fn extract_fallback_with(markup: &str, cap: usize) -> Vec<ChartEntry> {
    let doc = Html::parse_document(markup);
    table_entries(&doc, cap)
}
