//! Reference collaborators for the engine: a decoder that lays a genome out as an overground
//! level and an evaluator that scores the level against a player's preferences.

pub mod decoder;
pub mod profile;

pub use decoder::{Level, LevelDecoder, SegmentKind};
pub use profile::{PlayerProfile, ProfileEvaluator};
