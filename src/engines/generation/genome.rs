//! Genome representation for the level generator
//!
//! A genome is a fixed-length sequence of symbols drawn from an [`Alphabet`]. A decoder
//! reads the symbols left to right and turns them into a level, so every position maps
//! to one piece of level structure.
//!
//! # Operators
//!
//! Both operators work position by position and always yield a genome of the same length:
//! - **Crossover**: splicing a prefix and a suffix at the same index
//! - **Mutation**: replacing one symbol with another from the alphabet
//!
//! The cached `fitness` is assigned once, right after the genome is created, and never
//! changes afterwards. Operators always return fresh, unevaluated genomes.
//!
//! # Example
//!
//! ```
//! use levelforge::engines::generation::Genome;
//!
//! let genome = Genome::from("abca");
//! assert_eq!(genome.len(), 4);
//! assert_eq!(genome.fitness(), None);
//! assert_eq!(genome.to_string(), "abca");
//! ```

use crate::engines::generation::operators;
use crate::error::{LevelforgeError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Set of symbols a genome position may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        let mut seen = Vec::new();
        for symbol in symbols.chars() {
            if seen.contains(&symbol) {
                return Err(LevelforgeError::Configuration(format!(
                    "Alphabet contains duplicate symbol '{}'",
                    symbol
                )));
            }
            seen.push(symbol);
        }

        if seen.is_empty() {
            return Err(LevelforgeError::Configuration(
                "Alphabet must contain at least one symbol".to_string(),
            ));
        }

        Ok(Self { symbols: seen })
    }

    /// Uniformly random symbol
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.gen_range(0..self.symbols.len())]
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    sequence: Vec<char>,
    fitness: Option<f64>,
}

impl Genome {
    pub fn new(sequence: Vec<char>) -> Self {
        Self {
            sequence,
            fitness: None,
        }
    }

    /// Uniformly random genome of the given length
    pub fn random<R: Rng>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Self {
        operators::random_genome(length, alphabet, rng)
    }

    pub fn sequence(&self) -> &[char] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Fitness used for ranking; an unevaluated genome ranks below everything.
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Attach the evaluated fitness, consuming the unevaluated genome.
    pub fn with_fitness(mut self, fitness: f64) -> Self {
        self.fitness = Some(fitness);
        self
    }

    /// Copy with one uniformly chosen position replaced by a random symbol.
    pub fn mutate<R: Rng>(&self, alphabet: &Alphabet, rng: &mut R) -> Genome {
        operators::mutate(self, alphabet, rng)
    }

    /// Single-point crossover at a uniformly chosen split index.
    pub fn crossover<R: Rng>(
        &self,
        mate: &Genome,
        rng: &mut R,
    ) -> Result<(Genome, Genome)> {
        operators::crossover(self, mate, rng)
    }
}

impl From<&str> for Genome {
    fn from(symbols: &str) -> Self {
        Genome::new(symbols.chars().collect())
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.sequence {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
