//! Analysis configuration.

use std::collections::HashSet;

use ns_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::histogram::{FlowPolicy, HistogramSpec};
use crate::select::HIGGS_PDG_ID;

/// Bucket holding daughter PDG identifiers.
pub const DAUGHTER_PDG: &str = "daughter_pdg";
/// Bucket holding daughter transverse momenta.
pub const DAUGHTER_PT: &str = "daughter_pt";
/// Bucket holding daughter pseudorapidities.
pub const DAUGHTER_ETA: &str = "daughter_eta";

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Input collection tag.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// PDG identifier of the decay-chain roots.
    #[serde(default = "default_target_pdg_id")]
    pub target_pdg_id: i32,

    /// Prefix of the root buckets (`<label>_pt`, ...).
    #[serde(default = "default_label")]
    pub label: String,

    /// Depth limit of the traversal (root = 0). Unlimited when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Under/overflow policy used when filling histograms.
    #[serde(default)]
    pub flow_policy: FlowPolicy,

    /// Histogram bookings. Defaults to [`default_histograms`] for `label`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histograms: Option<Vec<HistogramSpec>>,
}

fn default_collection() -> String {
    "genParticles".to_string()
}

fn default_target_pdg_id() -> i32 {
    HIGGS_PDG_ID
}

fn default_label() -> String {
    "higgs".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            target_pdg_id: default_target_pdg_id(),
            label: default_label(),
            max_depth: None,
            flow_policy: FlowPolicy::default(),
            histograms: None,
        }
    }
}

impl AnalysisConfig {
    /// Parse from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Bucket name for a root quantity, e.g. `root_bucket("pt")` = `higgs_pt`.
    pub fn root_bucket(&self, quantity: &str) -> String {
        format!("{}_{}", self.label, quantity)
    }

    /// Every bucket the analyzer fills: root pt/eta/mass and daughter pdg/pt/eta.
    pub fn filled_buckets(&self) -> [String; 6] {
        [
            self.root_bucket("pt"),
            self.root_bucket("eta"),
            self.root_bucket("mass"),
            DAUGHTER_PDG.to_string(),
            DAUGHTER_PT.to_string(),
            DAUGHTER_ETA.to_string(),
        ]
    }

    /// Effective histogram bookings.
    pub fn bookings(&self) -> Vec<HistogramSpec> {
        match &self.histograms {
            Some(h) => h.clone(),
            None => default_histograms(&self.label),
        }
    }

    /// Reject configurations the analyzer cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.collection.trim().is_empty() {
            return Err(Error::Config("input collection tag cannot be empty".into()));
        }
        if self.label.is_empty() || self.label.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!(
                "label must be non-empty without whitespace, got {:?}",
                self.label
            )));
        }

        let buckets = self.filled_buckets();
        let bookings = self.bookings();
        let mut names = HashSet::new();
        for spec in &bookings {
            spec.validate()?;
            if !buckets.contains(&spec.bucket) {
                return Err(Error::Validation(format!(
                    "histogram '{}' reads unknown bucket '{}' (expected one of: {})",
                    spec.name,
                    spec.bucket,
                    buckets.join(", ")
                )));
            }
            if !names.insert(spec.name.as_str()) {
                return Err(Error::Validation(format!("duplicate histogram name: {}", spec.name)));
            }
        }
        Ok(())
    }
}

/// Display form of a label: first letter upper-cased.
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Standard bookings: root pT/eta/mass and daughter PDG/pT/eta.
///
/// Binning follows the Higgs analysis (mass window 110–140 GeV).
pub fn default_histograms(label: &str) -> Vec<HistogramSpec> {
    let name = display_label(label);
    vec![
        HistogramSpec::new(
            format!("h_{label}_pt"),
            format!("{name} Transverse Momentum;p_{{T}} (GeV/c);Entries"),
            format!("{label}_pt"),
            100,
            0.0,
            400.0,
        ),
        HistogramSpec::new(
            format!("h_{label}_eta"),
            format!("{name} Pseudorapidity;#eta;Entries"),
            format!("{label}_eta"),
            60,
            -3.0,
            3.0,
        ),
        HistogramSpec::new(
            format!("h_{label}_mass"),
            format!("{name} Mass;Mass (GeV/c^2);Entries"),
            format!("{label}_mass"),
            50,
            110.0,
            140.0,
        ),
        HistogramSpec::new("h_daughter_pdg", "Daughter PDG ID;PDG ID;Entries", DAUGHTER_PDG, 50, -25.0, 25.0),
        HistogramSpec::new("h_daughter_pt", "Daughter p_{T};p_{T} (GeV/c);Entries", DAUGHTER_PT, 100, 0.0, 400.0),
        HistogramSpec::new("h_daughter_eta", "Daughter Eta;#eta;Entries", DAUGHTER_ETA, 60, -3.0, 3.0),
    ]
}
