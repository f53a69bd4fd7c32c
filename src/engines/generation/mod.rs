pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod progress;
pub mod selection;
pub mod termination;

pub use evolution_engine::{EvolutionEngine, EvolutionOutcome, GenerationReport, ProgressCallback};
pub use genome::{Alphabet, Genome, DEFAULT_ALPHABET};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressMessage, SilentProgressCallback};
pub use selection::Offspring;
pub use termination::{StopReason, TerminationPolicy};
