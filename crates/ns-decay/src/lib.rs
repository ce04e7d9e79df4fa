//! # ns-decay
//!
//! Decay-chain traversal and aggregation over generator-level particle records.
//!
//! Select particles of a given species, walk their decay descendants and
//! collect kinematic samples into named buckets, then bin the buckets into
//! histograms at the end of the run.
//!
//! ## Example
//!
//! ```
//! use ns_core::PtEtaPhiM;
//! use ns_decay::{AnalysisConfig, DecayChainAnalyzer, GenEvent, GenParticle};
//!
//! let particles = vec![
//!     GenParticle::new(25, 62, PtEtaPhiM::new(120.5, 0.3, 0.0, 125.1)).with_daughters([1usize, 2]),
//!     GenParticle::new(5, 23, PtEtaPhiM::new(60.0, 0.1, 0.0, 4.8)),
//!     GenParticle::new(-5, 23, PtEtaPhiM::new(58.0, -0.2, 0.0, 4.8)),
//! ];
//!
//! let mut analyzer = DecayChainAnalyzer::initialize(AnalysisConfig::default()).unwrap();
//! analyzer.process_event(&GenEvent::with_collection("genParticles", particles));
//! let out = analyzer.finalize();
//! assert_eq!(out.buckets.drain("daughter_pt"), &[60.0, 58.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregator;
pub mod analyzer;
pub mod chain;
pub mod config;
pub mod histogram;
pub mod particle;
pub mod select;
pub mod walker;

pub use aggregator::Aggregator;
pub use analyzer::{AnalysisOutput, DecayChainAnalyzer, EventSummary, RunStats};
pub use chain::{format_decay_chain, node_line, root_banner};
pub use config::{AnalysisConfig, DAUGHTER_ETA, DAUGHTER_PDG, DAUGHTER_PT, default_histograms};
pub use histogram::{FilledHistogram, FlowPolicy, HistogramSpec};
pub use particle::{EventFile, GenEvent, GenParticle};
pub use select::{HIGGS_PDG_ID, TargetSelector};
pub use walker::{DecayTreeWalker, TraversalSummary, Visit};
