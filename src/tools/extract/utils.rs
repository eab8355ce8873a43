use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::types::CandidateStrategy;
use crate::selectors::{
    BROAD_CONTAINER_SELECTOR, CELL_SELECTOR, CELL_TITLE_SELECTOR, IMG_SELECTOR, RANK_SELECTORS,
    TABLE_ROW_SELECTOR, TITLE_SELECTORS, TOP10_ITEM_SELECTOR,
};
use crate::types::ChartEntry;

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Rank used for unranked entries when sorting, so they land last.
const UNRANKED_SENTINEL: u32 = u32::MAX;

/// First run of digits as a positive rank.
pub(crate) fn parse_rank(text: &str) -> Option<u32> {
    DIGITS_REGEX
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
}

/// Collapse runs of whitespace and trim.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn text_of(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// First strict descendant of `el` matching `selector` (the element itself is
/// never a match).
fn first_descendant<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|d| selector.matches(d))
}

/// Elements matched by `strategy`, in document order.
pub(super) fn candidates<'a>(doc: &'a Html, strategy: CandidateStrategy) -> Vec<ElementRef<'a>> {
    match strategy {
        CandidateStrategy::Top10Hooks => doc.select(&TOP10_ITEM_SELECTOR).collect(),
        CandidateStrategy::ImageBearing => doc
            .select(&BROAD_CONTAINER_SELECTOR)
            .filter(|el| first_descendant(*el, &IMG_SELECTOR).is_some())
            .collect(),
    }
}

/// Entries for the candidates that yield a title, in document order.
pub(super) fn titled_entries(found: Vec<ElementRef<'_>>) -> Vec<ChartEntry> {
    found
        .into_iter()
        .filter_map(entry_from_candidate)
        .collect()
}

fn entry_from_candidate(el: ElementRef<'_>) -> Option<ChartEntry> {
    let title = TITLE_SELECTORS
        .iter()
        .filter_map(|sel| first_descendant(el, sel))
        .map(text_of)
        .find(|t| !t.is_empty())?;

    let rank = RANK_SELECTORS
        .iter()
        .find_map(|sel| first_descendant(el, sel))
        .and_then(|r| parse_rank(&text_of(r)));

    let image = first_descendant(el, &IMG_SELECTOR).and_then(|img| {
        let attrs = img.value();
        ["data-src", "src"]
            .iter()
            .filter_map(|name| attrs.attr(name))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    });

    Some(ChartEntry { rank, title, image })
}

/// Sort by rank when trusted (stable, unranked last), then cap.
pub(super) fn order_by_rank_trust(
    mut items: Vec<ChartEntry>,
    trusted: bool,
    cap: usize,
) -> Vec<ChartEntry> {
    if trusted {
        items.sort_by_key(|item| item.rank.unwrap_or(UNRANKED_SENTINEL));
    }
    items.truncate(cap);
    items
}

pub(super) fn table_entries(doc: &Html, cap: usize) -> Vec<ChartEntry> {
    doc.select(&TABLE_ROW_SELECTOR)
        .filter_map(row_entry)
        .take(cap)
        .collect()
}

fn row_entry(row: ElementRef<'_>) -> Option<ChartEntry> {
    let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
    if cells.len() < 2 {
        return None;
    }

    let rank = parse_rank(&text_of(cells[0]))?;

    let title = first_descendant(cells[1], &CELL_TITLE_SELECTOR)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| text_of(cells[1]));
    if title.is_empty() {
        return None;
    }

    Some(ChartEntry {
        rank: Some(rank),
        title,
        image: None,
    })
}
