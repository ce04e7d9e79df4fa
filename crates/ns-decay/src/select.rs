//! Root selection by PDG identifier.

use ns_core::ParticleRecord;

/// PDG code of the Higgs boson.
pub const HIGGS_PDG_ID: i32 = 25;

/// Selects decay-chain roots by exact PDG identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSelector {
    target: i32,
}

impl TargetSelector {
    /// Selector for `target`.
    pub fn new(target: i32) -> Self {
        Self { target }
    }

    /// Configured identifier.
    pub fn target(&self) -> i32 {
        self.target
    }

    /// True iff the particle's identifier equals the target. The sign matters:
    /// antiparticles are not selected.
    #[inline]
    pub fn matches<P: ParticleRecord + ?Sized>(&self, particle: &P) -> bool {
        particle.pdg_id() == self.target
    }
}

impl Default for TargetSelector {
    fn default() -> Self {
        Self::new(HIGGS_PDG_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::GenParticle;
    use ns_core::PtEtaPhiM;

    fn particle(pdg_id: i32) -> GenParticle {
        GenParticle::new(pdg_id, 1, PtEtaPhiM::default())
    }

    #[test]
    fn default_selects_higgs() {
        let sel = TargetSelector::default();
        assert_eq!(sel.target(), 25);
        assert!(sel.matches(&particle(25)));
        assert!(!sel.matches(&particle(5)));
        assert!(!sel.matches(&particle(-25)));
    }

    #[test]
    fn custom_target() {
        let sel = TargetSelector::new(-24);
        assert!(sel.matches(&particle(-24)));
        assert!(!sel.matches(&particle(24)));
    }
}
