//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Structure-specific Top 10 item hooks on the primary source.
pub static TOP10_ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"[data-uia="top10-item"], [data-uia="top10-row"] article, li"#)
        .expect("valid top10 item selector")
});

/// Broad containers scanned by the generic image-bearing strategy.
pub static BROAD_CONTAINER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article, li, div").expect("valid container selector"));

/// Rank-labeled sub-elements, highest priority first.
pub static RANK_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        r#"[data-uia="top10-rank"]"#,
        ".rank",
        ".top10-rank",
        r#"[class*="rank"]"#,
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("valid rank selector"))
    .collect()
});

/// Title-shaped sub-elements, highest priority first.
pub static TITLE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        r#"[data-uia="title"]"#,
        "h3",
        "h2",
        ".title",
        "figcaption",
        r#"[class*="title"]"#,
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("valid title selector"))
    .collect()
});

/// Selector for `<img>` elements.
pub static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("valid img selector"));

/// Table rows on the fallback source.
pub static TABLE_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table tr").expect("valid table row selector"));

/// Selector for `<td>` cells.
pub static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid cell selector"));

/// Inline title carriers inside a fallback table cell.
pub static CELL_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a, span").expect("valid cell title selector"));

/// Chart sections declared by the page.
pub static CHART_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#charts .row").expect("valid chart row selector"));

/// Render target inside a chart section.
pub static CAROUSEL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".content-carousel").expect("valid carousel selector"));
