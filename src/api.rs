use crate::engine::{Engine, HydrationReport};
use crate::error::Result;
use crate::tools::extract::{extract_fallback_with, extract_primary_with};
use crate::tools::fetch::{Fetcher, ReqwestFetcher};
use crate::types::{ChartEntry, ChartSection, HydrateConfig, MediaType, Source};

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Box<dyn Fetcher>,
    pub config: HydrateConfig,
}

impl Components {
    /// Network-backed components.
    pub fn new(config: HydrateConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = ReqwestFetcher::new(&config)?;
        Ok(Self {
            fetcher: Box::new(fetcher),
            config,
        })
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetcher>, config: HydrateConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn engine(&self) -> Engine<'_> {
        Engine::new(&*self.fetcher, self.config.clone())
    }
}

/* ------------ hydration ------------ */

/// Hydrate every chart section declared in page markup.
pub async fn hydrate_page(markup: &str, components: &Components) -> HydrationReport {
    components.engine().hydrate_page(markup).await
}

/// Hydrate a single ad-hoc chart request.
pub async fn hydrate_chart(
    source: Source,
    region: Option<&str>,
    media_type: MediaType,
    components: &Components,
) -> HydrationReport {
    let region = region
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(components.config.default_region.as_str());
    let section = ChartSection::new("chart", source, region, media_type);
    components.engine().hydrate(&[section]).await
}

/* ------------ offline extraction ------------ */

/// Run one source's extractor over saved markup.
pub fn parse_markup(source: Source, markup: &str, config: &HydrateConfig) -> Vec<ChartEntry> {
    match source {
        Source::Primary => {
            extract_primary_with(markup, &config.rank_trust, config.output_cap).entries
        }
        Source::Fallback => extract_fallback_with(markup, config.output_cap),
    }
}
