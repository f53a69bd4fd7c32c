use crate::engines::generation::genome::Genome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Every individual reached the fitness threshold
    ThresholdReached,
    /// Generation counter hit the cap without every individual reaching the threshold
    MaxGenerations,
}

/// Stops the run once the whole population is fit enough or the generation cap is hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminationPolicy {
    pub fitness_threshold: f64,
    pub max_generations: usize,
}

impl TerminationPolicy {
    pub fn new(fitness_threshold: f64, max_generations: usize) -> Self {
        Self {
            fitness_threshold,
            max_generations,
        }
    }

    /// `generation` starts at 1 and grows by one per completed loop iteration.
    pub fn check(&self, population: &[Genome], generation: usize) -> Option<StopReason> {
        let all_fit = population
            .iter()
            .all(|genome| genome.score() >= self.fitness_threshold);

        if all_fit {
            Some(StopReason::ThresholdReached)
        } else if generation >= self.max_generations {
            Some(StopReason::MaxGenerations)
        } else {
            None
        }
    }

    pub fn should_stop(&self, population: &[Genome], generation: usize) -> bool {
        self.check(population, generation).is_some()
    }
}
