//! # ns-core
//!
//! Shared error type, particle-record traits and kinematic types used by the
//! NextStat generator-truth crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{ParticleCollection, ParticleRecord};
pub use types::{DaughterRef, PtEtaPhiM};
