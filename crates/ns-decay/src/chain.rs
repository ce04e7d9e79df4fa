//! Human-readable decay-chain printout.

use std::fmt::Write as _;

use ns_core::{ParticleCollection, ParticleRecord};

use crate::config::display_label;
use crate::walker::{DecayTreeWalker, Visit};

/// One line per node, indented two spaces per level.
pub fn node_line<P: ParticleRecord + ?Sized>(particle: &P, depth: usize) -> String {
    format!(
        "{:indent$}PDG ID: {} | Status: {} | pT: {} | Eta: {}",
        "",
        particle.pdg_id(),
        particle.status(),
        particle.pt(),
        particle.eta(),
        indent = depth * 2
    )
}

/// Summary line for a selected root, e.g. `Higgs found! pT: 120.5, Eta: 0.3, Mass: 125.1`.
pub fn root_banner<P: ParticleRecord + ?Sized>(label: &str, particle: &P) -> String {
    format!(
        "{} found! pT: {}, Eta: {}, Mass: {}",
        display_label(label),
        particle.pt(),
        particle.eta(),
        particle.mass()
    )
}

/// Render the subtree under `root` with `walker`.
///
/// Returns an empty string if `root` is not in the collection.
pub fn format_decay_chain<C>(collection: &C, root: usize, walker: &DecayTreeWalker) -> String
where
    C: ParticleCollection + ?Sized,
{
    let mut out = String::new();
    walker.traverse(collection, root, |particle, Visit { depth, .. }| {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", node_line(particle, depth));
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::GenParticle;
    use ns_core::PtEtaPhiM;

    #[test]
    fn renders_indented_chain() {
        let particles = vec![
            GenParticle::new(25, 62, PtEtaPhiM::new(120.5, 0.3, 0.0, 125.1)).with_daughters([1usize, 2]),
            GenParticle::new(5, 23, PtEtaPhiM::new(60.0, 0.1, 0.0, 4.8)),
            GenParticle::new(-5, 23, PtEtaPhiM::new(58.0, -0.2, 0.0, 4.8)),
        ];

        let text = format_decay_chain(&particles, 0, &DecayTreeWalker::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "PDG ID: 25 | Status: 62 | pT: 120.5 | Eta: 0.3",
                "  PDG ID: 5 | Status: 23 | pT: 60 | Eta: 0.1",
                "  PDG ID: -5 | Status: 23 | pT: 58 | Eta: -0.2",
            ]
        );

        assert_eq!(root_banner("higgs", &particles[0]), "Higgs found! pT: 120.5, Eta: 0.3, Mass: 125.1");
    }

    #[test]
    fn missing_root_renders_nothing() {
        let particles: Vec<GenParticle> = Vec::new();
        assert!(format_decay_chain(&particles, 0, &DecayTreeWalker::new()).is_empty());
    }
}
