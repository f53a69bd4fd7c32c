pub mod evaluator;
pub mod traits;

pub use evaluator::evaluate_population;
pub use traits::{Decoder, FitnessEvaluator, IdentityPostProcessor, PostProcessor, SequenceDecoder};
