use super::traits::{Decoder, FitnessEvaluator};
use crate::engines::generation::genome::Genome;
use crate::error::{LevelforgeError, Result};
use rayon::prelude::*;

/// Decode and score every genome of a batch.
///
/// Evaluations inside a batch are independent, so with `parallel` set they are spread over
/// the rayon pool. Results keep input order either way. The first failure aborts the batch.
pub fn evaluate_population<D, E, P>(
    genomes: Vec<Genome>,
    decoder: &D,
    evaluator: &E,
    profile: &P,
    parallel: bool,
) -> Result<Vec<Genome>>
where
    D: Decoder,
    E: FitnessEvaluator<D::Artifact, P>,
    P: Sync + ?Sized,
{
    if parallel {
        genomes
            .into_par_iter()
            .enumerate()
            .map(|(index, genome)| evaluate_one(index, genome, decoder, evaluator, profile))
            .collect()
    } else {
        genomes
            .into_iter()
            .enumerate()
            .map(|(index, genome)| evaluate_one(index, genome, decoder, evaluator, profile))
            .collect()
    }
}

fn evaluate_one<D, E, P>(
    index: usize,
    genome: Genome,
    decoder: &D,
    evaluator: &E,
    profile: &P,
) -> Result<Genome>
where
    D: Decoder,
    E: FitnessEvaluator<D::Artifact, P>,
    P: ?Sized,
{
    let artifact = decoder
        .decode(&genome)
        .map_err(|e| evaluation_failed(index, format!("decode: {:#}", e)))?;

    let fitness = evaluator
        .evaluate(&artifact, profile)
        .map_err(|e| evaluation_failed(index, format!("evaluate: {:#}", e)))?;

    if fitness.is_nan() {
        return Err(evaluation_failed(index, "evaluator returned NaN".to_string()));
    }

    Ok(genome.with_fitness(fitness))
}

fn evaluation_failed(index: usize, reason: String) -> LevelforgeError {
    LevelforgeError::EvaluationFailed { index, reason }
}
