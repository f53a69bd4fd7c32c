use clap::{value_parser, Arg, ArgAction, Command};
use levelforge::config::{ConfigManager, ConfigSection};
use levelforge::engines::evaluation::IdentityPostProcessor;
use levelforge::engines::generation::{EvolutionEngine, LogProgressCallback};
use levelforge::level::{LevelDecoder, PlayerProfile, ProfileEvaluator};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("levelforge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evolves a platformer level toward a player profile")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file (LEVELFORGE__SECTION__KEY variables override it)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Seed for a reproducible run"),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .action(ArgAction::SetTrue)
                .help("Print the effective configuration as TOML and exit"),
        )
        .arg(
            Arg::new("describe-config")
                .long("describe-config")
                .action(ArgAction::SetTrue)
                .help("Print every configuration field with its default and bounds"),
        )
        .get_matches();

    let manager = ConfigManager::new();
    match matches.get_one::<String>("config") {
        Some(path) => manager.load_from_file(path)?,
        None => manager.load_from_env()?,
    }
    if let Some(seed) = matches.get_one::<u64>("seed").copied() {
        manager.update(|config| config.evolution.seed = Some(seed))?;
    }

    let config = manager.get();

    if matches.get_flag("print-config") {
        print!("{}", manager.to_toml()?);
        return Ok(());
    }
    if matches.get_flag("describe-config") {
        let manifests = vec![config.evolution.to_manifest(), config.profile.to_manifest()];
        println!("{}", serde_json::to_string_pretty(&manifests)?);
        return Ok(());
    }

    let profile = PlayerProfile::from_config(&config.profile)?;
    let mut engine = EvolutionEngine::new(config.evolution, LevelDecoder, ProfileEvaluator)?;
    let (outcome, level) = engine.generate(&profile, &IdentityPostProcessor, &mut LogProgressCallback)?;

    println!("Profile:     {}", profile.name);
    println!("Stopped:     {:?} at generation {}", outcome.stop_reason, outcome.generations);
    println!("Evaluations: {}", outcome.evaluations);
    println!("Fitness:     {:.4}", outcome.best.score());
    println!("Genome:      {}", outcome.best);
    println!("Level:       [{}]", level);

    Ok(())
}
