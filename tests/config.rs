use levelforge::config::{
    AppConfig, ConfigManager, ConfigSection, EvolutionConfig, ProfileConfig, SelectionMode,
};
use levelforge::LevelforgeError;
use std::io::Write;

#[test]
fn test_defaults_match_reference_run() {
    let config = EvolutionConfig::default();

    assert_eq!(config.population_size, 100);
    assert_eq!(config.genome_length, 205);
    assert_eq!(config.alphabet, "abcdefghijklmnopqrstuvwxyz");
    assert_eq!(config.crossover_count, 20);
    assert_eq!(config.fitness_threshold, 0.80);
    assert_eq!(config.max_generations, 2000);
    assert_eq!(config.selection_mode, SelectionMode::Global);
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_invalid_values_are_rejected() {
    let invalid = [
        EvolutionConfig { population_size: 1, ..Default::default() },
        EvolutionConfig { genome_length: 0, ..Default::default() },
        EvolutionConfig { alphabet: String::new(), ..Default::default() },
        EvolutionConfig { alphabet: "abca".to_string(), ..Default::default() },
        EvolutionConfig { max_mutation_fraction: 0.0, ..Default::default() },
        EvolutionConfig { max_mutation_fraction: 1.5, ..Default::default() },
        EvolutionConfig { fitness_threshold: f64::NAN, ..Default::default() },
        EvolutionConfig { max_generations: 0, ..Default::default() },
    ];

    for config in invalid {
        assert!(
            matches!(config.validate(), Err(LevelforgeError::Configuration(_))),
            "{:?} should be rejected",
            config
        );
    }

    let profile = ProfileConfig { coins: -1.0, ..Default::default() };
    assert!(profile.validate().is_err());
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[evolution]\npopulation_size = 12\nselection_mode = \"parent_competition\"\nseed = 5\n\n[profile]\nname = \"speedrunner\"\ngaps = 3.0"
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(file.path()).unwrap();
    let config = manager.get();

    assert_eq!(config.evolution.population_size, 12);
    assert_eq!(config.evolution.selection_mode, SelectionMode::ParentCompetition);
    assert_eq!(config.evolution.seed, Some(5));
    assert_eq!(config.evolution.genome_length, 205);
    assert_eq!(config.profile.name, "speedrunner");
    assert_eq!(config.profile.gaps, 3.0);
    assert_eq!(config.profile.flat, 4.0);
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("levelforge.toml");

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.evolution.crossover_count = 7;
            config.evolution.seed = Some(11);
            config.profile.max_gap_run = 4;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();

    assert_eq!(reloaded.get(), manager.get());
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[evolution]\npopulation_size = 0").unwrap();

    let manager = ConfigManager::new();
    assert!(manager.load_from_file(file.path()).is_err());
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_failed_update_keeps_previous_config() {
    let manager = ConfigManager::new();

    let result = manager.update(|config| config.evolution.genome_length = 0);

    assert!(result.is_err());
    assert_eq!(manager.get().evolution.genome_length, 205);
}

#[test]
fn test_manifest_describes_every_tunable() {
    let manifest = EvolutionConfig::default().to_manifest();

    for name in [
        "population_size",
        "genome_length",
        "alphabet",
        "crossover_count",
        "max_mutation_fraction",
        "fitness_threshold",
        "max_generations",
        "selection_mode",
        "parallel_evaluation",
        "seed",
    ] {
        assert!(manifest.field(name).is_some(), "missing {}", name);
    }
    assert_eq!(manifest.fields.len(), 10);
    assert_eq!(manifest.field("seed").unwrap().default, serde_json::Value::Null);
    assert_eq!(EvolutionConfig::section_name(), "evolution");
    assert_eq!(ProfileConfig::default().to_manifest().fields.len(), 8);
}
