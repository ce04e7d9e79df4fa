//! Event-level driver: select roots, walk their decay chains, fill buckets.
//!
//! The host calls [`DecayChainAnalyzer::initialize`] once, then
//! [`DecayChainAnalyzer::process_event`] for every event, then
//! [`DecayChainAnalyzer::finalize`] to obtain the buckets and histograms.

use ns_core::{Error, ParticleCollection, ParticleRecord, Result};
use serde::{Deserialize, Serialize};

use crate::aggregator::Aggregator;
use crate::config::{AnalysisConfig, DAUGHTER_ETA, DAUGHTER_PDG, DAUGHTER_PT};
use crate::histogram::{FilledHistogram, HistogramSpec};
use crate::particle::GenEvent;
use crate::select::TargetSelector;
use crate::walker::{DecayTreeWalker, TraversalSummary};

/// Counters for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Events processed.
    pub events: u64,
    /// Selected roots.
    pub roots: u64,
    /// Traversal counters summed over all roots.
    pub traversal: TraversalSummary,
}

impl RunStats {
    /// Accumulate another worker's counters.
    pub fn merge(&mut self, other: &RunStats) {
        self.events += other.events;
        self.roots += other.roots;
        self.traversal.merge(&other.traversal);
    }
}

/// Result of one `process_event` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSummary {
    /// Roots selected in this event.
    pub roots: usize,
    /// Traversal counters over this event's roots.
    pub traversal: TraversalSummary,
}

/// Everything an analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// Configuration the run used.
    pub config: AnalysisConfig,
    /// Run counters.
    pub stats: RunStats,
    /// Raw samples per bucket.
    pub buckets: Aggregator,
    /// Histograms filled from `buckets`.
    pub histograms: Vec<FilledHistogram>,
}

#[derive(Debug, Clone)]
struct RootBuckets {
    pt: String,
    eta: String,
    mass: String,
}

/// Decay-chain analyzer for one run (or one worker of a parallel run).
#[derive(Debug, Clone)]
pub struct DecayChainAnalyzer {
    config: AnalysisConfig,
    bookings: Vec<HistogramSpec>,
    selector: TargetSelector,
    walker: DecayTreeWalker,
    root_buckets: RootBuckets,
    aggregator: Aggregator,
    stats: RunStats,
}

impl DecayChainAnalyzer {
    /// Validate `config` and declare every bucket.
    pub fn initialize(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let root_buckets = RootBuckets {
            pt: config.root_bucket("pt"),
            eta: config.root_bucket("eta"),
            mass: config.root_bucket("mass"),
        };
        let bookings = config.bookings();

        // validate() guarantees every booking reads one of these.
        let mut aggregator = Aggregator::new();
        for bucket in config.filled_buckets() {
            aggregator.declare(&bucket);
        }

        tracing::info!(
            collection = %config.collection,
            target_pdg_id = config.target_pdg_id,
            histograms = bookings.len(),
            "decay chain analyzer initialized"
        );

        Ok(Self {
            selector: TargetSelector::new(config.target_pdg_id),
            walker: DecayTreeWalker::with_max_depth(config.max_depth),
            bookings,
            root_buckets,
            aggregator,
            stats: RunStats::default(),
            config,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Buckets filled so far.
    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Counters so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Process the configured collection of `event`.
    pub fn process_event(&mut self, event: &GenEvent) -> EventSummary {
        let particles = event.collection(&self.config.collection);
        let summary = self.process_collection(particles);
        self.stats.events += 1;
        summary
    }

    /// Process one particle collection without counting it as an event.
    ///
    /// Roots are taken in collection order; every selected root gets its own
    /// traversal, so a root that is also a descendant of an earlier root is
    /// walked again.
    pub fn process_collection<C>(&mut self, particles: &C) -> EventSummary
    where
        C: ParticleCollection + ?Sized,
    {
        let mut summary = EventSummary::default();

        for key in 0..particles.len() {
            let Some(root) = particles.get(key) else {
                continue;
            };
            if !self.selector.matches(root) {
                continue;
            }
            summary.roots += 1;

            self.aggregator.record(&self.root_buckets.pt, root.pt());
            self.aggregator.record(&self.root_buckets.eta, root.eta());
            self.aggregator.record(&self.root_buckets.mass, root.mass());
            tracing::info!(
                key,
                pdg_id = root.pdg_id(),
                pt = root.pt(),
                eta = root.eta(),
                mass = root.mass(),
                "target particle found"
            );

            let aggregator = &mut self.aggregator;
            let traversal = self.walker.traverse(particles, key, |particle, visit| {
                tracing::debug!(
                    depth = visit.depth,
                    pdg_id = particle.pdg_id(),
                    status = particle.status(),
                    pt = particle.pt(),
                    eta = particle.eta(),
                    "decay chain node"
                );
                if visit.is_root() {
                    return;
                }
                aggregator.record(DAUGHTER_PDG, f64::from(particle.pdg_id()));
                aggregator.record(DAUGHTER_PT, particle.pt());
                aggregator.record(DAUGHTER_ETA, particle.eta());
            });

            if !traversal.is_clean() {
                log::warn!(
                    "decay chain of root {key} is incomplete: {} unresolved, {} revisited, {} truncated",
                    traversal.unresolved,
                    traversal.revisits,
                    traversal.truncated
                );
            }
            summary.traversal.merge(&traversal);
        }

        self.stats.roots += summary.roots as u64;
        self.stats.traversal.merge(&summary.traversal);
        summary
    }

    /// Fold another worker's buckets and counters into this analyzer.
    ///
    /// Both analyzers must have been initialized with the same configuration.
    pub fn merge(&mut self, other: DecayChainAnalyzer) -> Result<()> {
        if self.config != other.config {
            return Err(Error::Validation(
                "cannot merge analyzers with different configurations".into(),
            ));
        }
        self.aggregator.merge(other.aggregator);
        self.stats.merge(&other.stats);
        Ok(())
    }

    /// Fill the booked histograms and hand out everything collected.
    pub fn finalize(self) -> AnalysisOutput {
        let histograms: Vec<FilledHistogram> = self
            .bookings
            .iter()
            .map(|spec| spec.fill(self.aggregator.drain(&spec.bucket), self.config.flow_policy))
            .collect();

        tracing::info!(
            events = self.stats.events,
            roots = self.stats.roots,
            nodes = self.stats.traversal.visited,
            "decay chain analysis finished"
        );

        AnalysisOutput { config: self.config, stats: self.stats, buckets: self.aggregator, histograms }
    }
}
