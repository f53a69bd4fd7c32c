use crate::engines::generation::genome::{Alphabet, Genome};
use crate::error::{LevelforgeError, Result};
use rand::Rng;

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Genome {
    Genome::new((0..length).map(|_| alphabet.sample(rng)).collect())
}

/// Mutation: resymbolize one uniformly chosen position
///
/// The replacement symbol is drawn from the whole alphabet, so it may equal the one it
/// replaces. The receiver is left untouched and the mutant comes back unevaluated.
pub fn mutate<R: Rng>(genome: &Genome, alphabet: &Alphabet, rng: &mut R) -> Genome {
    let mut sequence = genome.sequence().to_vec();
    if !sequence.is_empty() {
        let position = rng.gen_range(0..sequence.len());
        sequence[position] = alphabet.sample(rng);
    }
    Genome::new(sequence)
}

/// Single-point crossover: swap genome suffixes at a random split in `[0, len)`
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
    ensure_same_length(parent1, parent2)?;
    if parent1.is_empty() {
        return Err(LevelforgeError::InvalidOperand(
            "cannot cross over empty genomes".to_string(),
        ));
    }

    let split = rng.gen_range(0..parent1.len());
    crossover_at(parent1, parent2, split)
}

/// Single-point crossover at a fixed split index.
///
/// `child1 = parent1[..split] + parent2[split..]` and
/// `child2 = parent2[..split] + parent1[split..]`.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, split: usize) -> Result<(Genome, Genome)> {
    ensure_same_length(parent1, parent2)?;
    if split > parent1.len() {
        return Err(LevelforgeError::InvalidOperand(format!(
            "split index {} out of bounds for genome length {}",
            split,
            parent1.len()
        )));
    }

    let (head1, tail1) = parent1.sequence().split_at(split);
    let (head2, tail2) = parent2.sequence().split_at(split);

    let child1 = Genome::new([head1, tail2].concat());
    let child2 = Genome::new([head2, tail1].concat());

    Ok((child1, child2))
}

fn ensure_same_length(parent1: &Genome, parent2: &Genome) -> Result<()> {
    if parent1.len() != parent2.len() {
        return Err(LevelforgeError::InvalidOperand(format!(
            "genome length mismatch: {} vs {}",
            parent1.len(),
            parent2.len()
        )));
    }
    Ok(())
}
