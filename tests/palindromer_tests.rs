use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use palindromer::palindrome::completion::is_complete;
use palindromer::{Algorithm, CancelToken, Palindromer, PalindromeError, SearchOptions, Seed, Trie};

fn get_test_words() -> Vec<&'static str> {
    vec!["WAS", "SAW", "NO", "ON", "A", "STEP", "PETS", "TACO", "CAT", "I"]
}

fn options(algorithm: Algorithm, max_depth: usize, max_results: usize) -> SearchOptions {
    SearchOptions::builder()
        .algorithm(algorithm)
        .max_depth(max_depth)
        .max_results(max_results)
        .build()
}

#[test]
fn test_dictionary_round_trip() {
    let trie = Trie::build(vec!["was", " Saw", "no\n", "", "ON"]);
    for word in ["WAS", "SAW", "NO", "ON"] {
        assert!(trie.contains(word));
    }
    for word in ["WA", "SAWS", "A", "", "was"] {
        assert!(!trie.contains(word));
    }
}

#[test]
fn test_initial_pairs_follow_dictionary_order() {
    let p = Palindromer::from_words(vec!["WAS", "SAW", "NO", "ON", "A"]);
    assert_eq!(p.initial_pairs(100), vec!["WAS|SAW", "SAW|WAS", "NO|ON", "ON|NO", "A|A"]);
}

#[test]
fn test_completion_rule() {
    assert!(is_complete("TACO", "TAC"));
    assert!(is_complete("STEP ON", "STEP ON"));
    assert!(!is_complete("WAS", "SAW"));
    assert!(!is_complete("NO", "ON"));
}

#[test]
fn test_brute_force_is_deterministic() {
    let p = Palindromer::from_words(get_test_words());
    let opts = options(Algorithm::BruteForce, 3, 500);
    let first = p.generate("STEP", "", &opts).unwrap();
    let second = p.generate("STEP", "", &opts).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1 + 10 + 100);
}

#[test]
fn test_budgets_hold_for_every_algorithm() {
    let p = Palindromer::from_words(get_test_words());
    let seed = Seed::new("STEP", "").unwrap();
    for algorithm in [Algorithm::BruteForce, Algorithm::MonteCarlo] {
        for max_depth in [1, 2, 4] {
            for max_results in [1, 7, 50] {
                let opts = options(algorithm, max_depth, max_results);
                let results = p.search(&seed, &opts, &mut StdRng::seed_from_u64(5), &CancelToken::new());
                assert!(results.len() <= max_results);
                assert!(results.iter().all(|r| r.depth < max_depth));
                assert_eq!(results[0].left_part, "STEP");
            }
        }
    }
}

#[test]
fn test_completions_are_leaves() {
    let p = Palindromer::from_words(get_test_words());
    let results = p.generate("TACO", "", &options(Algorithm::BruteForce, 3, 1000)).unwrap();
    for complete in results.iter().filter(|r| r.is_complete) {
        let prefix = format!("{} ", complete.left_part);
        assert!(!results.iter().any(|r| r.left_part.starts_with(&prefix)
            && r.depth > complete.depth));
    }
}

#[test]
fn test_monte_carlo_with_fixed_source() {
    let p = Palindromer::from_words(vec!["W", "X", "Y", "Z"]);
    let seed = Seed::new("AB", "").unwrap();
    let opts = options(Algorithm::MonteCarlo, 3, 100);
    let run = || p.search(&seed, &opts, &mut StepRng::new(0, 0), &CancelToken::new());

    let results = run();
    let lefts: Vec<&str> = results.iter().map(|r| r.left_part.as_str()).collect();
    assert_eq!(lefts, vec![
        "AB",
        "AB X", "AB X X", "AB X Y", "AB X Z",
        "AB Y", "AB Y X", "AB Y Y", "AB Y Z",
        "AB Z", "AB Z X", "AB Z Y", "AB Z Z",
    ]);
    assert_eq!(results, run());
}

#[test]
fn test_empty_dictionary() {
    let p = Palindromer::from_words(Vec::<&str>::new());
    let results = p.generate("STEP", "", &SearchOptions::default()).unwrap();
    assert_eq!(results.len(), 1);
    assert!(!results[0].is_complete);
    assert_eq!(results[0].depth, 0);
}

#[test]
fn test_invalid_input() {
    let p = Palindromer::from_words(get_test_words());
    let opts = SearchOptions::default();
    for input in ["", "STEP", "|", " | ", "A|B|C"] {
        assert!(matches!(p.generate_from_input(input, &opts), Err(PalindromeError::InvalidInput(_))),
                "{:?}", input);
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let p = Palindromer::from_words(get_test_words());
    let seed = Seed::new("STEP", "").unwrap();
    let opts = options(Algorithm::BruteForce, 3, 64);
    assert_eq!(p.search_multithreaded(&seed, &opts, &mut StepRng::new(0, 0), &CancelToken::new()),
               p.generate("STEP", "", &opts).unwrap());
}

#[test]
fn test_parallel_monte_carlo_honors_seeded_source() {
    let p = Palindromer::from_words(get_test_words());
    let seed = Seed::new("STEP", "").unwrap();
    let opts = options(Algorithm::MonteCarlo, 4, 30);
    let run = |s: u64| p.search_multithreaded(&seed, &opts, &mut StdRng::seed_from_u64(s),
                                              &CancelToken::new());
    assert_eq!(run(7), run(7));
    assert_eq!(run(7), p.search(&seed, &opts, &mut StdRng::seed_from_u64(7), &CancelToken::new()));
}
