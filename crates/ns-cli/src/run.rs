//! `nsdecay analyze` / `nsdecay chain` orchestration.

use anyhow::{Context, Result};
use ns_core::ParticleRecord;
use ns_decay::{
    AnalysisConfig, AnalysisOutput, DecayChainAnalyzer, EventFile, TargetSelector, format_decay_chain,
    root_banner,
};
use std::path::Path;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub collection: Option<String>,
    pub target: Option<i32>,
    pub max_depth: Option<usize>,
}

impl Overrides {
    fn apply(&self, cfg: &mut AnalysisConfig) {
        if let Some(c) = &self.collection {
            cfg.collection = c.clone();
        }
        if let Some(t) = self.target {
            cfg.target_pdg_id = t;
        }
        if self.max_depth.is_some() {
            cfg.max_depth = self.max_depth;
        }
    }
}

pub fn read_analysis_config(path: &Path) -> Result<AnalysisConfig> {
    let bytes = std::fs::read(path)?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
    let cfg: AnalysisConfig = if ext == "json" {
        serde_json::from_slice(&bytes)?
    } else {
        // Default: YAML (serde_yaml_ng).
        serde_yaml_ng::from_slice(&bytes)?
    };
    Ok(cfg)
}

pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<AnalysisConfig> {
    let mut cfg = match path {
        Some(p) => read_analysis_config(p)
            .with_context(|| format!("failed to read config {}", p.display()))?,
        None => AnalysisConfig::default(),
    };
    overrides.apply(&mut cfg);
    cfg.validate()?;
    Ok(cfg)
}

fn read_events(input: &Path) -> Result<EventFile> {
    let file = EventFile::open(input)
        .with_context(|| format!("failed to read events {}", input.display()))?;
    tracing::info!(events = file.events.len(), input = %input.display(), "events loaded");
    Ok(file)
}

pub fn analyze(input: &Path, cfg: AnalysisConfig) -> Result<AnalysisOutput> {
    let events = read_events(input)?;

    let mut analyzer = DecayChainAnalyzer::initialize(cfg)?;
    for event in &events.events {
        analyzer.process_event(event);
    }

    let stats = *analyzer.stats();
    if stats.roots == 0 {
        log::warn!(
            "no particle with PDG ID {} found in {} events",
            analyzer.config().target_pdg_id,
            stats.events
        );
    }
    Ok(analyzer.finalize())
}

/// Render the original-style printout: banner plus indented chain per root.
pub fn chain_text(input: &Path, cfg: &AnalysisConfig) -> Result<String> {
    let events = read_events(input)?;
    let selector = TargetSelector::new(cfg.target_pdg_id);
    let walker = ns_decay::DecayTreeWalker::with_max_depth(cfg.max_depth);

    let mut out = String::new();
    for (i, event) in events.events.iter().enumerate() {
        let particles = event.collection(&cfg.collection);
        for (key, particle) in particles.iter().enumerate() {
            if !selector.matches(particle) {
                continue;
            }
            let id = event.event.unwrap_or(i as u64);
            out.push_str(&format!("# event {id}, particle {key} (PDG ID {})\n", particle.pdg_id()));
            out.push_str(&root_banner(&cfg.label, particle));
            out.push('\n');
            out.push_str(&format_decay_chain(particles, key, &walker));
        }
    }
    Ok(out)
}
