//! Concrete generator-particle records and the JSON event format.

use std::collections::BTreeMap;
use std::path::Path;

use ns_core::{DaughterRef, ParticleRecord, PtEtaPhiM, Result};
use serde::{Deserialize, Serialize};

/// One generator-level particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenParticle {
    /// PDG particle-type code.
    pub pdg_id: i32,
    /// Generator status code.
    #[serde(default)]
    pub status: i32,
    /// Kinematics.
    #[serde(flatten)]
    pub p4: PtEtaPhiM,
    /// Ordered daughter references.
    #[serde(default)]
    pub daughters: Vec<DaughterRef>,
}

impl GenParticle {
    /// Create a particle without daughters.
    pub fn new(pdg_id: i32, status: i32, p4: PtEtaPhiM) -> Self {
        Self { pdg_id, status, p4, daughters: Vec::new() }
    }

    /// Builder-style daughter assignment.
    pub fn with_daughters<I, D>(mut self, daughters: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DaughterRef>,
    {
        self.daughters = daughters.into_iter().map(Into::into).collect();
        self
    }
}

impl ParticleRecord for GenParticle {
    #[inline]
    fn pdg_id(&self) -> i32 {
        self.pdg_id
    }

    #[inline]
    fn status(&self) -> i32 {
        self.status
    }

    #[inline]
    fn pt(&self) -> f64 {
        self.p4.pt
    }

    #[inline]
    fn eta(&self) -> f64 {
        self.p4.eta
    }

    #[inline]
    fn mass(&self) -> f64 {
        self.p4.mass
    }

    #[inline]
    fn daughters(&self) -> &[DaughterRef] {
        &self.daughters
    }
}

/// One event: named particle collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenEvent {
    /// Event number, if the producer recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<u64>,
    /// Collections keyed by input tag.
    #[serde(default)]
    pub collections: BTreeMap<String, Vec<GenParticle>>,
}

impl GenEvent {
    /// Event holding a single collection.
    pub fn with_collection(tag: impl Into<String>, particles: Vec<GenParticle>) -> Self {
        let mut collections = BTreeMap::new();
        collections.insert(tag.into(), particles);
        Self { event: None, collections }
    }

    /// Particles under `tag`. A missing tag yields an empty slice.
    pub fn collection(&self, tag: &str) -> &[GenParticle] {
        self.collections.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A file of events, as read by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFile {
    /// Events in file order.
    pub events: Vec<GenEvent>,
}

impl EventFile {
    /// Parse from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read and parse a JSON event file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_slice(&bytes)
    }
}
