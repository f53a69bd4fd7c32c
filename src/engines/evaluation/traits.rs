use crate::engines::generation::genome::Genome;
use anyhow::Result;

/// Turns a genome into the domain artifact that gets scored
pub trait Decoder: Send + Sync {
    type Artifact;

    /// Must accept any genome built from the engine's alphabet and length
    fn decode(&self, genome: &Genome) -> Result<Self::Artifact>;
}

/// Scores an artifact against a profile of preferences; higher is fitter
pub trait FitnessEvaluator<A, P: ?Sized>: Send + Sync {
    fn evaluate(&self, artifact: &A, profile: &P) -> Result<f64>;
}

impl<A, P, F> FitnessEvaluator<A, P> for F
where
    P: ?Sized,
    F: Fn(&A, &P) -> Result<f64> + Send + Sync,
{
    fn evaluate(&self, artifact: &A, profile: &P) -> Result<f64> {
        self(artifact, profile)
    }
}

/// Post-processing applied to the winning genome before it is decoded
pub trait PostProcessor: Send + Sync {
    fn process(&self, genome: Genome) -> Result<Genome>;
}

/// Leaves the genome as it is
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPostProcessor;

impl PostProcessor for IdentityPostProcessor {
    fn process(&self, genome: Genome) -> Result<Genome> {
        Ok(genome)
    }
}

/// Decodes a genome into its symbol string
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceDecoder;

impl Decoder for SequenceDecoder {
    type Artifact = String;

    fn decode(&self, genome: &Genome) -> Result<String> {
        Ok(genome.to_string())
    }
}
