use crate::error::{ChartError, Result};
use crate::tools::batch::batch_ordered;
use crate::tools::extract::{extract_fallback_with, extract_primary_with};
use crate::tools::fetch::{source_url, Fetcher};
use crate::tools::page::read_sections;
use crate::tools::render::{render_with, Carousel, UNAVAILABLE_MESSAGE};
use crate::types::{ChartEntry, ChartSection, HydrateConfig, Source};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Which leg of the failover a section was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Primary,
    Fallback,
}

/// Per-section hydration state.
///
/// `Idle -> FetchingPrimary -> {Rendered | FetchingFallback}`, then
/// `FetchingFallback -> {Rendered | Failed}`. `Rendered` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum HydrationState {
    Idle,
    /// First attempt, against the section's declared source.
    FetchingPrimary { source: Source },
    FetchingFallback { cause: String },
    Rendered { stage: Stage, source: Source },
    Failed { reason: String },
}

impl HydrationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            HydrationState::Rendered { .. } | HydrationState::Failed { .. }
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section: ChartSection,
    /// Terminal state.
    pub state: HydrationState,
    /// Every state visited, starting at `Idle`.
    pub trail: Vec<HydrationState>,
    /// Entries handed to the renderer; empty on failure.
    pub entries: Vec<ChartEntry>,
    pub carousel: Carousel,
    pub html: String,
}

impl SectionReport {
    pub fn is_rendered(&self) -> bool {
        matches!(self.state, HydrationState::Rendered { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationReport {
    pub hydrated_at: DateTime<Utc>,
    pub sections: Vec<SectionReport>,
}

impl HydrationReport {
    pub fn rendered(&self) -> usize {
        self.sections.iter().filter(|s| s.is_rendered()).count()
    }

    pub fn failed(&self) -> usize {
        self.sections.len() - self.rendered()
    }
}

pub struct Engine<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub config: HydrateConfig,
}

impl<'a> Engine<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, config: HydrateConfig) -> Self {
        Self { fetcher, config }
    }

    /// Read the sections declared by `markup` and hydrate them.
    pub async fn hydrate_page(&self, markup: &str) -> HydrationReport {
        let sections = read_sections(markup, &self.config);
        if sections.is_empty() {
            debug!("page declares no chart sections");
        }
        self.hydrate(&sections).await
    }

    /// Hydrate every section in declared order. Section failures stay inside
    /// their own report.
    pub async fn hydrate(&self, sections: &[ChartSection]) -> HydrationReport {
        let reports = batch_ordered(sections.iter(), self.config.concurrency, |section| {
            self.hydrate_section(section)
        })
        .await;

        let report = HydrationReport {
            hydrated_at: Utc::now(),
            sections: reports,
        };
        info!(
            sections = report.sections.len(),
            rendered = report.rendered(),
            failed = report.failed(),
            "chart hydration finished"
        );
        report
    }

    /// Drive one section's state machine to a terminal state.
    pub async fn hydrate_section(&self, section: &ChartSection) -> SectionReport {
        let mut state = HydrationState::Idle;
        let mut trail = vec![state.clone()];
        let mut carousel = Carousel::new();
        let mut entries = Vec::new();

        while !state.is_terminal() {
            state = self
                .step(&state, section, &mut carousel, &mut entries)
                .await;
            trail.push(state.clone());
        }

        let html = carousel.to_html();
        SectionReport {
            section: section.clone(),
            state,
            trail,
            entries,
            carousel,
            html,
        }
    }

    async fn step(
        &self,
        state: &HydrationState,
        section: &ChartSection,
        carousel: &mut Carousel,
        rendered: &mut Vec<ChartEntry>,
    ) -> HydrationState {
        match state {
            HydrationState::Idle => HydrationState::FetchingPrimary {
                source: section.source,
            },
            HydrationState::FetchingPrimary { source } => {
                match self.run_stage(*source, section).await {
                    Ok(entries) => {
                        self.render_into(carousel, rendered, entries, section);
                        HydrationState::Rendered {
                            stage: Stage::Primary,
                            source: *source,
                        }
                    }
                    Err(e) => {
                        warn!(
                            section = %section.label,
                            source = %source,
                            error = %e,
                            "primary chart fetch failed, trying fallback"
                        );
                        HydrationState::FetchingFallback {
                            cause: e.to_string(),
                        }
                    }
                }
            }
            HydrationState::FetchingFallback { .. } => {
                match self.run_stage(Source::Fallback, section).await {
                    Ok(entries) => {
                        let entries = entries
                            .into_iter()
                            .enumerate()
                            .map(|(idx, mut entry)| {
                                entry.rank = entry.rank.or(Some(idx as u32 + 1));
                                entry
                            })
                            .collect();
                        self.render_into(carousel, rendered, entries, section);
                        HydrationState::Rendered {
                            stage: Stage::Fallback,
                            source: Source::Fallback,
                        }
                    }
                    Err(e) => {
                        error!(
                            section = %section.label,
                            error = %e,
                            "fallback chart fetch failed"
                        );
                        rendered.clear();
                        carousel.show_message(UNAVAILABLE_MESSAGE);
                        HydrationState::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            }
            terminal => terminal.clone(),
        }
    }

    /// Fetch and extract one source; an empty extraction counts as a failure.
    async fn run_stage(&self, source: Source, section: &ChartSection) -> Result<Vec<ChartEntry>> {
        let url = source_url(&self.config, source, &section.region, section.media_type)?;
        debug!(section = %section.label, source = %source, url = %url, "fetching chart");

        let markup = self.fetcher.fetch_markup(url.as_str()).await?;
        let entries = self.extract(source, markup).await?;

        if entries.is_empty() {
            return Err(ChartError::EmptyResult { origin: source });
        }
        Ok(entries)
    }

    async fn extract(&self, source: Source, markup: String) -> Result<Vec<ChartEntry>> {
        let trust = self.config.rank_trust;
        let cap = self.config.output_cap;
        tokio::task::spawn_blocking(move || match source {
            Source::Primary => {
                let extraction = extract_primary_with(&markup, &trust, cap);
                debug!(
                    strategy = ?extraction.strategy,
                    candidates = extraction.candidates,
                    ranked = extraction.ranked,
                    sorted_by_rank = extraction.sorted_by_rank,
                    "primary extraction"
                );
                extraction.entries
            }
            Source::Fallback => extract_fallback_with(&markup, cap),
        })
        .await
        .map_err(|e| ChartError::Parse(format!("extraction task failed: {e}")))
    }

    fn render_into(
        &self,
        carousel: &mut Carousel,
        rendered: &mut Vec<ChartEntry>,
        mut entries: Vec<ChartEntry>,
        section: &ChartSection,
    ) {
        entries.truncate(self.config.output_cap);
        render_with(
            carousel,
            &entries,
            &self.config.placeholder_base,
            self.config.output_cap,
        );
        info!(
            section = %section.label,
            entries = entries.len(),
            attached = section.has_target,
            "chart rendered"
        );
        *rendered = entries;
    }
}
