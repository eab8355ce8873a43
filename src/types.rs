use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{ChartError, Result};

/// One ranked chart item.
///
/// Serializes to the normalized `{rank, title, img}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    pub title: String,
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ChartEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            rank: None,
            title: title.into(),
            image: None,
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Tudum Top 10 pages: richer markup, less stable layout.
    #[default]
    Primary,
    /// FlixPatrol tables.
    Fallback,
}

impl Source {
    /// Interpret a `data-source` attribute. Anything that is not the primary
    /// source (or blank) selects the fallback source.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("primary") | Some("tudum") => Source::Primary,
            Some(_) => Source::Fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Primary => "primary",
            Source::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Films,
    Tv,
}

impl MediaType {
    /// Unrecognized values normalize to films.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("tv") => MediaType::Tv,
            _ => MediaType::Films,
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaType::Films => "films",
            MediaType::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// One configured chart request, rendered into its own target area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSection {
    pub label: String,
    pub source: Source,
    pub region: String,
    pub media_type: MediaType,
    /// False when the page declared no carousel for this section.
    #[serde(default = "default_true")]
    pub has_target: bool,
}

fn default_true() -> bool {
    true
}

impl ChartSection {
    pub fn new(
        label: impl Into<String>,
        source: Source,
        region: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Self {
            label: label.into(),
            source,
            region: region.into(),
            media_type,
            has_target: true,
        }
    }
}

/// How much rank evidence the primary extractor needs before it trusts ranks
/// for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankTrust {
    /// Minimum ranked candidates inside the window.
    pub threshold: usize,
    /// Raw candidates kept (and inspected) before the final cap.
    pub window: usize,
}

pub const DEFAULT_RANK_TRUST_THRESHOLD: usize = 5;
pub const DEFAULT_CANDIDATE_WINDOW: usize = 20;
pub const DEFAULT_OUTPUT_CAP: usize = 10;

impl Default for RankTrust {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_RANK_TRUST_THRESHOLD,
            window: DEFAULT_CANDIDATE_WINDOW,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrateConfig {
    pub primary_base: String,
    pub fallback_base: String,
    pub default_region: String,
    pub placeholder_base: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub rank_trust: RankTrust,
    pub output_cap: usize,
    /// Sections hydrated at once. 1 keeps the declared order strictly sequential.
    pub concurrency: usize,
}

impl Default for HydrateConfig {
    fn default() -> Self {
        Self {
            primary_base: "https://www.netflix.com".into(),
            fallback_base: "https://flixpatrol.com".into(),
            default_region: "india".into(),
            placeholder_base: "https://via.placeholder.com/260x170".into(),
            timeout_ms: 30_000,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".into(),
            rank_trust: RankTrust::default(),
            output_cap: DEFAULT_OUTPUT_CAP,
            concurrency: 1,
        }
    }
}

impl HydrateConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: HydrateConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_cap == 0 {
            return Err(ChartError::Config("output_cap must be at least 1".into()));
        }
        if self.rank_trust.window < self.output_cap {
            return Err(ChartError::Config(format!(
                "rank_trust.window ({}) must not be smaller than output_cap ({})",
                self.rank_trust.window, self.output_cap
            )));
        }
        if self.concurrency == 0 {
            return Err(ChartError::Config("concurrency must be at least 1".into()));
        }
        for (name, base) in [
            ("primary_base", &self.primary_base),
            ("fallback_base", &self.fallback_base),
            ("placeholder_base", &self.placeholder_base),
        ] {
            url::Url::parse(base)
                .map_err(|e| ChartError::Config(format!("{name}: {e}")))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
