//! Population-based evolution of linear symbolic genomes toward a target fitness.
//!
//! The [`EvolutionEngine`] owns a fixed-size population of [`Genome`]s and scores them
//! through two collaborators: a [`Decoder`] turning a genome into a domain artifact and a
//! [`FitnessEvaluator`] scoring that artifact against a profile. The [`level`] module
//! provides a reference pair that evolves overground platformer levels.

pub mod config;
pub mod engines;
pub mod error;
pub mod level;

pub use crate::engines::evaluation::{Decoder, FitnessEvaluator, PostProcessor};
pub use crate::engines::generation::{EvolutionEngine, EvolutionOutcome, Genome};
pub use crate::error::{LevelforgeError, Result};
