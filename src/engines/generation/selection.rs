use crate::config::evolution::SelectionMode;
use crate::engines::generation::genome::Genome;
use crate::error::{LevelforgeError, Result};
use rand::seq::index;
use rand::Rng;

/// An individual produced during one generation's variation phase.
///
/// `parents` holds the population slots the individual descends from: the mutated slot for
/// a mutant, the slots of both mutant parents for a crossover child. The record only lives
/// until the offspring has been culled.
#[derive(Debug, Clone, PartialEq)]
pub struct Offspring {
    pub genome: Genome,
    pub parents: Vec<usize>,
}

impl Offspring {
    pub fn new(genome: Genome, parents: Vec<usize>) -> Self {
        Self { genome, parents }
    }
}

/// Pick the population slots that will each produce one mutant.
///
/// The pool size is uniform in `[1, ceil(len * max_fraction)]` and the slots are distinct,
/// returned in population order.
pub fn select_for_mutation<R: Rng>(population_len: usize, max_fraction: f64, rng: &mut R) -> Vec<usize> {
    if population_len == 0 {
        return Vec::new();
    }

    let upper = ((population_len as f64 * max_fraction).ceil() as usize).clamp(1, population_len);
    let amount = rng.gen_range(1..=upper);

    let mut selected = index::sample(rng, population_len, amount).into_vec();
    selected.sort_unstable();
    selected
}

/// Draw two parents from a pool of `pool_len` individuals.
///
/// Both slots are drawn independently; when the draw lands on the same individual twice the
/// event is skipped and `None` is returned instead of redrawing.
pub fn pick_crossover_parents<R: Rng>(pool_len: usize, rng: &mut R) -> Option<(usize, usize)> {
    if pool_len == 0 {
        return None;
    }

    let first = rng.gen_range(0..pool_len);
    let second = rng.gen_range(0..pool_len);

    if first == second {
        None
    } else {
        Some((first, second))
    }
}

/// Reduce the old population plus this generation's offspring back to `size` individuals.
pub fn cull(
    mode: SelectionMode,
    population: Vec<Genome>,
    offspring: Vec<Offspring>,
    size: usize,
) -> Result<Vec<Genome>> {
    let survivors = match mode {
        SelectionMode::Global => global_competition(population, offspring, size),
        SelectionMode::ParentCompetition => parent_competition(population, offspring),
    };

    ensure_population_size(&survivors, size)?;
    Ok(survivors)
}

/// Pool everyone and keep the `size` fittest.
///
/// The sort is stable, so ties keep pool order: old population first, then offspring in
/// creation order.
pub fn global_competition(mut population: Vec<Genome>, offspring: Vec<Offspring>, size: usize) -> Vec<Genome> {
    population.extend(offspring.into_iter().map(|o| o.genome));

    if population.len() == size {
        return population;
    }

    population.sort_by(|a, b| b.score().total_cmp(&a.score()));
    population.truncate(size);
    population
}

/// Each offspring challenges the weakest of its parent slots and takes it over only when
/// strictly fitter; otherwise it is discarded.
///
/// Slots are resolved in offspring creation order, so a crossover child faces whoever holds
/// its parents' slots after the mutants have competed.
pub fn parent_competition(mut population: Vec<Genome>, offspring: Vec<Offspring>) -> Vec<Genome> {
    for child in offspring {
        let weakest = child
            .parents
            .iter()
            .copied()
            .filter(|&slot| slot < population.len())
            .min_by(|&a, &b| population[a].score().total_cmp(&population[b].score()));

        if let Some(slot) = weakest {
            if child.genome.score() > population[slot].score() {
                population[slot] = child.genome;
            }
        }
    }

    population
}

pub fn ensure_population_size(population: &[Genome], expected: usize) -> Result<()> {
    if population.len() != expected {
        return Err(LevelforgeError::PopulationSize {
            expected,
            actual: population.len(),
        });
    }
    Ok(())
}

/// Fittest individual; the first one seen wins ties.
pub fn best_individual(population: &[Genome]) -> Option<&Genome> {
    let mut best: Option<&Genome> = None;
    for genome in population {
        match best {
            Some(current) if genome.score() <= current.score() => {}
            _ => best = Some(genome),
        }
    }
    best
}
