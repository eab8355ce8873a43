//! Page Tools
//!
//! Reads chart section declarations from page markup:
//!
//! ```html
//! <div id="charts">
//!   <section class="row" data-source="tudum" data-region="india" data-type="films">
//!     <div class="content-carousel"></div>
//!   </section>
//! </div>
//! ```

mod tests;

use crate::selectors::{CAROUSEL_SELECTOR, CHART_ROW_SELECTOR};
use crate::types::{ChartSection, HydrateConfig, MediaType, Source};
use scraper::Html;

/// Chart sections declared by the page, in document order.
pub fn read_sections(markup: &str, cfg: &HydrateConfig) -> Vec<ChartSection> {
    let doc = Html::parse_document(markup);

    doc.select(&CHART_ROW_SELECTOR)
        .enumerate()
        .map(|(idx, row)| {
            let attrs = row.value();
            let region = attrs
                .attr("data-region")
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .unwrap_or(cfg.default_region.as_str());
            let label = attrs
                .attr("id")
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("section-{}", idx + 1));

            ChartSection {
                label,
                source: Source::from_attr(attrs.attr("data-source")),
                region: region.to_string(),
                media_type: MediaType::from_attr(attrs.attr("data-type")),
                has_target: row.select(&CAROUSEL_SELECTOR).next().is_some(),
            }
        })
        .collect()
}
