//! Common data types for generator-level particle records

use serde::{Deserialize, Serialize};

/// Reference from a particle to one of its daughters.
///
/// A reference is a relation, not ownership. It may fail to resolve, in which
/// case consumers skip the branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaughterRef {
    /// Index into the same particle collection.
    Local(usize),
    /// Index into a different product (e.g. a reconstructed candidate list).
    ///
    /// Never resolves to a generator particle.
    Foreign {
        /// Name of the product the daughter lives in.
        collection: String,
        /// Index inside that product.
        index: usize,
    },
}

impl DaughterRef {
    /// Local index if this reference points into the same collection.
    #[inline]
    pub fn local_index(&self) -> Option<usize> {
        match self {
            DaughterRef::Local(i) => Some(*i),
            DaughterRef::Foreign { .. } => None,
        }
    }
}

impl From<usize> for DaughterRef {
    fn from(index: usize) -> Self {
        DaughterRef::Local(index)
    }
}

/// Four-momentum in the (pT, eta, phi, m) parameterisation used by generator records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PtEtaPhiM {
    /// Transverse momentum (GeV).
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle (rad).
    #[serde(default)]
    pub phi: f64,
    /// Invariant mass (GeV).
    #[serde(default)]
    pub mass: f64,
}

impl PtEtaPhiM {
    /// Create a new four-momentum.
    pub fn new(pt: f64, eta: f64, phi: f64, mass: f64) -> Self {
        Self { pt, eta, phi, mass }
    }

    /// x component of the momentum.
    pub fn px(&self) -> f64 {
        self.pt * self.phi.cos()
    }

    /// y component of the momentum.
    pub fn py(&self) -> f64 {
        self.pt * self.phi.sin()
    }

    /// z component of the momentum.
    pub fn pz(&self) -> f64 {
        self.pt * self.eta.sinh()
    }

    /// Momentum magnitude.
    pub fn p(&self) -> f64 {
        self.pt * self.eta.cosh()
    }

    /// Energy, `sqrt(p^2 + m^2)`.
    pub fn energy(&self) -> f64 {
        self.p().hypot(self.mass)
    }
}
