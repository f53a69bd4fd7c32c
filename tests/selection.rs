use levelforge::config::SelectionMode;
use levelforge::engines::generation::selection::{
    best_individual, cull, global_competition, parent_competition, pick_crossover_parents,
    select_for_mutation,
};
use levelforge::engines::generation::{Genome, Offspring};
use levelforge::LevelforgeError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scored(symbols: &str, fitness: f64) -> Genome {
    Genome::from(symbols).with_fitness(fitness)
}

fn names(population: &[Genome]) -> Vec<String> {
    population.iter().map(|g| g.to_string()).collect()
}

#[test]
fn test_global_competition_keeps_fittest() {
    let population = vec![scored("a", 0.1), scored("b", 0.9), scored("c", 0.5)];
    let offspring = vec![
        Offspring::new(scored("d", 0.7), vec![0]),
        Offspring::new(scored("e", 0.2), vec![2]),
    ];

    let survivors = global_competition(population, offspring, 3);

    assert_eq!(names(&survivors), vec!["b", "d", "c"]);
}

#[test]
fn test_global_competition_ties_keep_pool_order() {
    let population = vec![scored("a", 0.5), scored("b", 0.5)];
    let offspring = vec![Offspring::new(scored("c", 0.5), vec![0])];

    let survivors = global_competition(population, offspring, 2);

    assert_eq!(names(&survivors), vec!["a", "b"]);
}

#[test]
fn test_global_competition_returns_exact_pool_unchanged() {
    let population = vec![scored("a", 0.1)];
    let offspring = vec![Offspring::new(scored("b", 0.9), vec![0])];

    let survivors = global_competition(population, offspring, 2);

    assert_eq!(names(&survivors), vec!["a", "b"]);
}

#[test]
fn test_parent_competition_replaces_weaker_parent_only() {
    let population = vec![scored("a", 0.4), scored("b", 0.6), scored("c", 0.8)];
    let offspring = vec![
        // Fitter mutant of slot 0 takes it over
        Offspring::new(scored("a2", 0.5), vec![0]),
        // Weaker mutant of slot 2 is discarded
        Offspring::new(scored("c2", 0.7), vec![2]),
        // Child of slots 0 and 1 faces the weaker occupant, now "a2" at 0.5
        Offspring::new(scored("x", 0.55), vec![0, 1]),
        // Equal fitness never replaces
        Offspring::new(scored("y", 0.6), vec![1, 2]),
    ];

    let survivors = parent_competition(population, offspring);

    assert_eq!(names(&survivors), vec!["x", "b", "c"]);
}

#[test]
fn test_cull_keeps_population_size_in_both_modes() {
    for mode in [SelectionMode::Global, SelectionMode::ParentCompetition] {
        let population: Vec<_> = (0..5).map(|i| scored("ab", i as f64)).collect();
        let offspring: Vec<_> = (0..7)
            .map(|i| Offspring::new(scored("ba", i as f64 * 0.9), vec![i % 5]))
            .collect();

        let survivors = cull(mode, population, offspring, 5).unwrap();
        assert_eq!(survivors.len(), 5, "{:?}", mode);
    }
}

#[test]
fn test_cull_rejects_malformed_population() {
    let population = vec![scored("a", 1.0), scored("b", 1.0), scored("c", 1.0)];

    let err = cull(SelectionMode::Global, population, Vec::new(), 5).unwrap_err();

    assert!(matches!(
        err,
        LevelforgeError::PopulationSize { expected: 5, actual: 3 }
    ));
}

#[test]
fn test_mutation_pool_is_distinct_and_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sizes = std::collections::HashSet::new();

    for _ in 0..500 {
        let selected = select_for_mutation(10, 1.0, &mut rng);

        assert!(!selected.is_empty() && selected.len() <= 10);
        assert!(selected.windows(2).all(|w| w[0] < w[1]));
        assert!(selected.iter().all(|&i| i < 10));
        sizes.insert(selected.len());
    }

    assert_eq!(sizes.len(), 10, "every pool size from 1 to 10 should occur");
}

#[test]
fn test_mutation_pool_respects_fraction() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..200 {
        let selected = select_for_mutation(100, 0.1, &mut rng);
        assert!((1..=10).contains(&selected.len()));
    }
    assert!(select_for_mutation(0, 1.0, &mut rng).is_empty());
}

#[test]
fn test_crossover_parents_are_distinct_or_skipped() {
    let mut rng = StdRng::seed_from_u64(8);

    assert_eq!(pick_crossover_parents(0, &mut rng), None);
    for _ in 0..50 {
        assert_eq!(pick_crossover_parents(1, &mut rng), None);
    }

    let mut skipped = 0;
    for _ in 0..1000 {
        match pick_crossover_parents(4, &mut rng) {
            Some((first, second)) => {
                assert_ne!(first, second);
                assert!(first < 4 && second < 4);
            }
            None => skipped += 1,
        }
    }
    assert!(skipped > 0);
}

#[test]
fn test_best_individual_prefers_first_seen() {
    let population = vec![scored("a", 0.3), scored("b", 0.9), scored("c", 0.9)];

    assert_eq!(best_individual(&population).unwrap().to_string(), "b");
    assert!(best_individual(&[]).is_none());
}
