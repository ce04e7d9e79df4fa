//! Core traits for generator-truth access
//!
//! This module defines the read-only seam between the decay-chain logic
//! (ns-decay) and whatever supplies event data. The traversal code depends
//! only on these traits, never on a concrete event format.

use crate::types::DaughterRef;

/// Read-only view of one generator particle.
pub trait ParticleRecord {
    /// PDG particle-type code.
    fn pdg_id(&self) -> i32;

    /// Generator status code (incoming / outgoing / intermediate, ...).
    fn status(&self) -> i32;

    /// Transverse momentum (GeV), >= 0.
    fn pt(&self) -> f64;

    /// Pseudorapidity.
    fn eta(&self) -> f64;

    /// Invariant mass (GeV), >= 0.
    fn mass(&self) -> f64;

    /// Ordered daughter references.
    fn daughters(&self) -> &[DaughterRef];
}

/// The particle store of one event.
///
/// Particles are addressed by a stable key (their position in the collection),
/// which is also the identity used for cycle detection.
pub trait ParticleCollection {
    /// Concrete record type.
    type Particle: ParticleRecord;

    /// Number of particles.
    fn len(&self) -> usize;

    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Particle at `key`, if any.
    fn get(&self, key: usize) -> Option<&Self::Particle>;

    /// Resolve a daughter reference to `(key, particle)`.
    ///
    /// Returns `None` for dangling or foreign references.
    fn resolve(&self, daughter: &DaughterRef) -> Option<(usize, &Self::Particle)> {
        let key = daughter.local_index()?;
        self.get(key).map(|p| (key, p))
    }
}

impl<P: ParticleRecord> ParticleCollection for [P] {
    type Particle = P;

    #[inline]
    fn len(&self) -> usize {
        <[P]>::len(self)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&P> {
        <[P]>::get(self, key)
    }
}

impl<P: ParticleRecord> ParticleCollection for Vec<P> {
    type Particle = P;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&P> {
        self.as_slice().get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyParticle {
        pdg_id: i32,
        daughters: Vec<DaughterRef>,
    }

    impl ParticleRecord for DummyParticle {
        fn pdg_id(&self) -> i32 {
            self.pdg_id
        }

        fn status(&self) -> i32 {
            1
        }

        fn pt(&self) -> f64 {
            0.0
        }

        fn eta(&self) -> f64 {
            0.0
        }

        fn mass(&self) -> f64 {
            0.0
        }

        fn daughters(&self) -> &[DaughterRef] {
            &self.daughters
        }
    }

    #[test]
    fn test_resolve_local_and_dangling() {
        let particles = vec![
            DummyParticle { pdg_id: 25, daughters: vec![DaughterRef::Local(1), DaughterRef::Local(7)] },
            DummyParticle { pdg_id: 5, daughters: vec![] },
        ];

        let (key, p) = particles.resolve(&particles[0].daughters[0]).unwrap();
        assert_eq!(key, 1);
        assert_eq!(p.pdg_id(), 5);
        assert!(particles.resolve(&particles[0].daughters[1]).is_none());
    }

    #[test]
    fn test_foreign_never_resolves() {
        let particles = vec![DummyParticle { pdg_id: 25, daughters: vec![] }];
        let r = DaughterRef::Foreign { collection: "recoCandidates".into(), index: 0 };
        assert!(particles.as_slice().resolve(&r).is_none());
        assert!(!particles.is_empty());
    }
}
