use levelforge::engines::generation::operators::{crossover, crossover_at, mutate, random_genome};
use levelforge::engines::generation::{Alphabet, Genome};
use levelforge::LevelforgeError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn differing_positions(a: &Genome, b: &Genome) -> usize {
    a.sequence()
        .iter()
        .zip(b.sequence())
        .filter(|(x, y)| x != y)
        .count()
}

#[test]
fn test_random_genome_uses_alphabet() {
    let alphabet = Alphabet::new("xyz").unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let genome = random_genome(205, &alphabet, &mut rng);

    assert_eq!(genome.len(), 205);
    assert!(genome.sequence().iter().all(|&s| alphabet.contains(s)));
    assert_eq!(genome.fitness(), None);
}

#[test]
fn test_mutation_changes_at_most_one_position() {
    let alphabet = Alphabet::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let original = random_genome(16, &alphabet, &mut rng).with_fitness(0.5);
        let saved = original.clone();

        let mutant = original.mutate(&alphabet, &mut rng);

        assert_eq!(original, saved, "receiver must not change");
        assert_eq!(mutant.len(), original.len());
        assert!(differing_positions(&original, &mutant) <= 1);
        assert_eq!(mutant.fitness(), None);
        assert!(mutant.sequence().iter().all(|&s| alphabet.contains(s)));
    }
}

#[test]
fn test_mutation_eventually_changes_something() {
    let alphabet = Alphabet::new("ab").unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let original = Genome::from("aaaa");

    let changed = (0..100)
        .map(|_| mutate(&original, &alphabet, &mut rng))
        .any(|mutant| mutant != original);

    assert!(changed);
}

#[test]
fn test_crossover_at_every_split() {
    let a = Genome::from("abcdefgh");
    let b = Genome::from("ABCDEFGH");

    for split in 0..a.len() {
        let (child1, child2) = crossover_at(&a, &b, split).unwrap();

        assert_eq!(&child1.sequence()[..split], &a.sequence()[..split]);
        assert_eq!(&child1.sequence()[split..], &b.sequence()[split..]);
        assert_eq!(&child2.sequence()[..split], &b.sequence()[..split]);
        assert_eq!(&child2.sequence()[split..], &a.sequence()[split..]);
    }
}

#[test]
fn test_random_crossover_matches_some_split() {
    let a = Genome::from("aaaaaaaaaa").with_fitness(1.0);
    let b = Genome::from("bbbbbbbbbb").with_fitness(0.0);
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let (child1, child2) = a.crossover(&b, &mut rng).unwrap();

        let split = child1.sequence().iter().take_while(|&&s| s == 'a').count();
        assert!(split < a.len());
        assert_eq!((child1.clone(), child2.clone()), crossover_at(&a, &b, split).unwrap());
        assert_eq!(child1.fitness(), None);
        assert_eq!(child2.fitness(), None);
    }

    assert_eq!(a.fitness(), Some(1.0));
    assert_eq!(b.to_string(), "bbbbbbbbbb");
}

#[test]
fn test_self_crossover_is_identity() {
    let a = Genome::from("level");
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..20 {
        let (child1, child2) = crossover(&a, &a.clone(), &mut rng).unwrap();
        assert_eq!(child1, a);
        assert_eq!(child2, a);
    }
}

#[test]
fn test_crossover_rejects_length_mismatch() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = Genome::from("abc").crossover(&Genome::from("abcd"), &mut rng);

    assert!(matches!(result, Err(LevelforgeError::InvalidOperand(_))));
}

#[test]
fn test_crossover_rejects_empty_genomes() {
    let mut rng = StdRng::seed_from_u64(0);
    let empty = Genome::new(Vec::new());

    assert!(matches!(
        crossover(&empty, &empty, &mut rng),
        Err(LevelforgeError::InvalidOperand(_))
    ));
}

#[test]
fn test_crossover_at_rejects_out_of_bounds_split() {
    let a = Genome::from("ab");
    assert!(matches!(crossover_at(&a, &a, 3), Err(LevelforgeError::InvalidOperand(_))));
}

#[test]
fn test_alphabet_validation() {
    assert!(matches!(Alphabet::new(""), Err(LevelforgeError::Configuration(_))));
    assert!(matches!(Alphabet::new("aba"), Err(LevelforgeError::Configuration(_))));
    assert_eq!(Alphabet::default().len(), 26);
}
