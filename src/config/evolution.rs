use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::engines::generation::genome::{Alphabet, DEFAULT_ALPHABET};
use crate::error::LevelforgeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub genome_length: usize,
    pub alphabet: String,
    pub crossover_count: usize,
    pub max_mutation_fraction: f64,
    pub fitness_threshold: f64,
    pub max_generations: usize,
    pub selection_mode: SelectionMode,
    pub parallel_evaluation: bool,
    pub seed: Option<u64>,
}

/// How offspring and the old population compete for the next generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Everyone competes, the fittest `population_size` survive
    #[default]
    Global,
    /// Offspring only compete against their own parents
    ParentCompetition,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            genome_length: 205,
            alphabet: DEFAULT_ALPHABET.to_string(),
            crossover_count: 20,
            max_mutation_fraction: 1.0,
            fitness_threshold: 0.80,
            max_generations: 2000,
            selection_mode: SelectionMode::Global,
            parallel_evaluation: true,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn alphabet(&self) -> Result<Alphabet, LevelforgeError> {
        Alphabet::new(&self.alphabet)
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), LevelforgeError> {
        if self.population_size < 2 {
            return Err(LevelforgeError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.genome_length == 0 {
            return Err(LevelforgeError::Configuration(
                "Genome length must be at least 1".to_string(),
            ));
        }
        self.alphabet()?;
        if !(self.max_mutation_fraction > 0.0 && self.max_mutation_fraction <= 1.0) {
            return Err(LevelforgeError::Configuration(
                "Max mutation fraction must be in (0, 1]".to_string(),
            ));
        }
        if !self.fitness_threshold.is_finite() {
            return Err(LevelforgeError::Configuration(
                "Fitness threshold must be finite".to_string(),
            ));
        }
        if self.max_generations == 0 {
            return Err(LevelforgeError::Configuration(
                "Max generations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest {
                    name: "population_size".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(100),
                    min: Some(2.0),
                    max: None,
                    description: "Number of genomes kept each generation".to_string(),
                },
                FieldManifest {
                    name: "genome_length".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(205),
                    min: Some(1.0),
                    max: None,
                    description: "Symbols per genome".to_string(),
                },
                FieldManifest {
                    name: "alphabet".to_string(),
                    field_type: "string".to_string(),
                    default: serde_json::json!(DEFAULT_ALPHABET),
                    min: None,
                    max: None,
                    description: "Symbols a genome position may hold".to_string(),
                },
                FieldManifest {
                    name: "crossover_count".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(20),
                    min: Some(0.0),
                    max: None,
                    description: "Crossover events attempted per generation".to_string(),
                },
                FieldManifest {
                    name: "max_mutation_fraction".to_string(),
                    field_type: "float".to_string(),
                    default: serde_json::json!(1.0),
                    min: Some(0.0),
                    max: Some(1.0),
                    description: "Upper bound of the mutation pool as a share of the population"
                        .to_string(),
                },
                FieldManifest {
                    name: "fitness_threshold".to_string(),
                    field_type: "float".to_string(),
                    default: serde_json::json!(0.80),
                    min: None,
                    max: None,
                    description: "Stop once every genome scores at least this much".to_string(),
                },
                FieldManifest {
                    name: "max_generations".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(2000),
                    min: Some(1.0),
                    max: None,
                    description: "Generation cap".to_string(),
                },
                FieldManifest {
                    name: "selection_mode".to_string(),
                    field_type: "enum".to_string(),
                    default: serde_json::json!("global"),
                    min: None,
                    max: None,
                    description: "global or parent_competition".to_string(),
                },
                FieldManifest {
                    name: "parallel_evaluation".to_string(),
                    field_type: "bool".to_string(),
                    default: serde_json::json!(true),
                    min: None,
                    max: None,
                    description: "Score each batch on the rayon thread pool".to_string(),
                },
                FieldManifest {
                    name: "seed".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::Value::Null,
                    min: Some(0.0),
                    max: None,
                    description: "Random seed for reproducible runs; unset draws from entropy"
                        .to_string(),
                },
            ],
        }
    }
}
