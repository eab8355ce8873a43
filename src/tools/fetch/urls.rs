use crate::error::{ChartError, Result};
use crate::types::{HydrateConfig, MediaType, Source};
use url::Url;

/// `<primary_base>/tudum/top10/<region>/<films|tv>`
pub fn primary_url(cfg: &HydrateConfig, region: &str, media_type: MediaType) -> Result<Url> {
    build(
        &cfg.primary_base,
        &["tudum", "top10", region, media_type.path_segment()],
    )
}

/// `<fallback_base>/top10/netflix/<country>/`, country lowercased.
pub fn fallback_url(cfg: &HydrateConfig, country: &str) -> Result<Url> {
    let country = country.to_lowercase();
    build(&cfg.fallback_base, &["top10", "netflix", &country, ""])
}

pub fn source_url(
    cfg: &HydrateConfig,
    source: Source,
    region: &str,
    media_type: MediaType,
) -> Result<Url> {
    match source {
        Source::Primary => primary_url(cfg, region, media_type),
        Source::Fallback => fallback_url(cfg, region),
    }
}

fn build(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| ChartError::InvalidUrl(format!("{base} cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
