use crate::config::evolution::EvolutionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::evaluation::{evaluate_population, Decoder, FitnessEvaluator, PostProcessor};
use crate::engines::generation::{
    genome::{Alphabet, Genome},
    progress::SilentProgressCallback,
    selection::{self, Offspring},
    termination::{StopReason, TerminationPolicy},
};
use crate::error::{LevelforgeError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What a finished run hands back to the host
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOutcome {
    pub best: Genome,
    /// Value of the generation counter at termination (starts at 1)
    pub generations: usize,
    pub stop_reason: StopReason,
    /// Decoder + evaluator calls made over the whole run
    pub evaluations: usize,
}

/// Snapshot handed to the observer once per generation
pub struct GenerationReport<'a> {
    pub generation: usize,
    pub population: &'a [Genome],
    pub best: &'a Genome,
    pub offspring: usize,
    pub skipped_crossovers: usize,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, report: &GenerationReport<'_>);
    fn on_offspring_evaluated(&mut self, evaluated: usize, total: usize);
}

pub struct EvolutionEngine<D, E, R = StdRng> {
    config: EvolutionConfig,
    alphabet: Alphabet,
    termination: TerminationPolicy,
    decoder: D,
    evaluator: E,
    rng: R,
}

impl<D: Decoder, E> EvolutionEngine<D, E, StdRng> {
    /// Engine seeded from `config.seed`, or from entropy when unset
    pub fn new(config: EvolutionConfig, decoder: D, evaluator: E) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::with_rng(config, decoder, evaluator, rng)
    }
}

impl<D: Decoder, E, R: Rng> EvolutionEngine<D, E, R> {
    pub fn with_rng(config: EvolutionConfig, decoder: D, evaluator: E, rng: R) -> Result<Self> {
        config.validate()?;
        let alphabet = config.alphabet()?;
        let termination = TerminationPolicy::new(config.fitness_threshold, config.max_generations);

        Ok(Self {
            config,
            alphabet,
            termination,
            decoder,
            evaluator,
            rng,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Run the evolution process and return the fittest genome
    pub fn run<P>(&mut self, profile: &P) -> Result<Genome>
    where
        E: FitnessEvaluator<D::Artifact, P>,
        P: Sync + ?Sized,
    {
        self.run_with_callback(profile, &mut SilentProgressCallback)
            .map(|outcome| outcome.best)
    }

    /// Run, post-process the winner and decode it into the final artifact.
    ///
    /// The returned outcome carries the post-processed genome; its fitness is the one the
    /// engine measured before post-processing.
    pub fn generate<P, T, C>(
        &mut self,
        profile: &P,
        post_processor: &T,
        callback: &mut C,
    ) -> Result<(EvolutionOutcome, D::Artifact)>
    where
        E: FitnessEvaluator<D::Artifact, P>,
        P: Sync + ?Sized,
        T: PostProcessor,
        C: ProgressCallback,
    {
        let mut outcome = self.run_with_callback(profile, callback)?;
        outcome.best = post_processor
            .process(outcome.best)
            .map_err(|e| LevelforgeError::Generation(format!("post-process: {:#}", e)))?;
        let artifact = self
            .decoder
            .decode(&outcome.best)
            .map_err(|e| LevelforgeError::Generation(format!("decode: {:#}", e)))?;

        Ok((outcome, artifact))
    }

    pub fn run_with_callback<P, C>(&mut self, profile: &P, callback: &mut C) -> Result<EvolutionOutcome>
    where
        E: FitnessEvaluator<D::Artifact, P>,
        P: Sync + ?Sized,
        C: ProgressCallback,
    {
        let size = self.config.population_size;
        log::info!(
            "Evolving {} genomes of length {} ({:?} selection, threshold {}, cap {})",
            size,
            self.config.genome_length,
            self.config.selection_mode,
            self.config.fitness_threshold,
            self.config.max_generations
        );

        // Initialize population
        let population = self.initialize_population();
        let mut population = self.evaluate(population, profile)?;
        let mut evaluations = population.len();
        let mut generation = 1;

        self.report(callback, generation, &population, 0, 0)?;

        // Evolution loop
        let stop_reason = loop {
            if let Some(reason) = self.termination.check(&population, generation) {
                break reason;
            }

            callback.on_generation_start(generation + 1);

            let (offspring, skipped) = self.vary(&population)?;

            let (genomes, parents): (Vec<_>, Vec<_>) =
                offspring.into_iter().map(|o| (o.genome, o.parents)).unzip();
            let genomes = self.evaluate(genomes, profile)?;
            evaluations += genomes.len();
            callback.on_offspring_evaluated(genomes.len(), evaluations);

            let offspring: Vec<Offspring> = genomes
                .into_iter()
                .zip(parents)
                .map(|(genome, parents)| Offspring::new(genome, parents))
                .collect();
            let bred = offspring.len();

            population = selection::cull(self.config.selection_mode, population, offspring, size)?;
            generation += 1;

            self.report(callback, generation, &population, bred, skipped)?;
        };

        let best = selection::best_individual(&population)
            .cloned()
            .ok_or(LevelforgeError::PopulationSize { expected: size, actual: 0 })?;

        log::info!(
            "Solution: {} fitness: {:.4} ({:?} at generation {}, {} evaluations)",
            best,
            best.score(),
            stop_reason,
            generation,
            evaluations
        );

        Ok(EvolutionOutcome {
            best,
            generations: generation,
            stop_reason,
            evaluations,
        })
    }

    fn initialize_population(&mut self) -> Vec<Genome> {
        (0..self.config.population_size)
            .map(|_| Genome::random(self.config.genome_length, &self.alphabet, &mut self.rng))
            .collect()
    }

    fn evaluate<P>(&self, genomes: Vec<Genome>, profile: &P) -> Result<Vec<Genome>>
    where
        E: FitnessEvaluator<D::Artifact, P>,
        P: Sync + ?Sized,
    {
        evaluate_population(
            genomes,
            &self.decoder,
            &self.evaluator,
            profile,
            self.config.parallel_evaluation,
        )
    }

    /// Mutate a random subset of the population, then cross over pairs drawn from the mutants.
    ///
    /// Returns the unevaluated offspring and the number of skipped crossover events.
    fn vary(&mut self, population: &[Genome]) -> Result<(Vec<Offspring>, usize)> {
        let slots = selection::select_for_mutation(
            population.len(),
            self.config.max_mutation_fraction,
            &mut self.rng,
        );

        let mut offspring = Vec::with_capacity(slots.len() + 2 * self.config.crossover_count);
        for &slot in &slots {
            let mutant = population[slot].mutate(&self.alphabet, &mut self.rng);
            offspring.push(Offspring::new(mutant, vec![slot]));
        }

        // Crossover parents come from the mutant pool only
        let mutants = offspring.len();
        let mut skipped = 0;
        for _ in 0..self.config.crossover_count {
            let Some((first, second)) = selection::pick_crossover_parents(mutants, &mut self.rng) else {
                skipped += 1;
                continue;
            };

            let (child1, child2) =
                offspring[first].genome.crossover(&offspring[second].genome, &mut self.rng)?;
            let parents = vec![slots[first], slots[second]];
            offspring.push(Offspring::new(child1, parents.clone()));
            offspring.push(Offspring::new(child2, parents));
        }

        Ok((offspring, skipped))
    }

    fn report<C: ProgressCallback>(
        &self,
        callback: &mut C,
        generation: usize,
        population: &[Genome],
        offspring: usize,
        skipped_crossovers: usize,
    ) -> Result<()> {
        let best = selection::best_individual(population).ok_or(LevelforgeError::PopulationSize {
            expected: self.config.population_size,
            actual: 0,
        })?;

        callback.on_generation_complete(&GenerationReport {
            generation,
            population,
            best,
            offspring,
            skipped_crossovers,
        });
        Ok(())
    }
}
