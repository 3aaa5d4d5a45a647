use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::palindrome::cancel::CancelToken;
use crate::palindrome::palindromer::{Extension, Palindromer};
use crate::palindrome::result::PalindromeResult;
use crate::palindrome::search::Explorer;
use crate::palindrome::searchconfig::{Algorithm, SearchOptions};
use crate::palindrome::seed::Seed;

impl Palindromer {
    /// Brute-force search with the first level of extensions fanned out over the
    /// rayon pool. Branches run in batches of one per worker. A batch is only
    /// started while the merged output is below `max_results`, and each of its
    /// branches may use at most what is left of that budget. Buffers are joined
    /// in extension order, so the output is the same as the sequential search.
    /// Monte Carlo runs sequentially on `rng`.
    pub fn search_multithreaded<R: Rng + ?Sized>(&self,
                                                 seed: &Seed,
                                                 options: &SearchOptions,
                                                 rng: &mut R,
                                                 cancel: &CancelToken) -> Vec<PalindromeResult> {
        if options.algorithm == Algorithm::MonteCarlo {
            debug!("monte carlo search runs on a single thread");
            return self.search(seed, options, rng, cancel);
        }
        self.fan_out(seed, options, cancel, &AtomicUsize::new(0))
    }

    pub(crate) fn fan_out(&self,
                          seed: &Seed,
                          options: &SearchOptions,
                          cancel: &CancelToken,
                          visited: &AtomicUsize) -> Vec<PalindromeResult> {
        let start = Instant::now();
        let explorer = Explorer::new(self, options, cancel, visited);
        let mut results = Vec::new();

        if explorer.stopped(0, &results)
            || explorer.record(seed.left(), seed.right(), 0, &mut results)
            || explorer.stopped(1, &results) {
            return results;
        }

        let extensions: Vec<Extension> = self.extensions(seed.left(), seed.right()).collect();
        let batch_size = rayon::current_num_threads().max(1);
        debug!(branches = extensions.len(), batch_size, "fanning out");

        for batch in extensions.chunks(batch_size) {
            if explorer.stopped(1, &results) {
                break;
            }
            let branch = explorer.with_limit(explorer.limit - results.len());
            let found: Vec<Vec<PalindromeResult>> = batch.par_iter()
                .map(|ext| {
                    let mut found = Vec::new();
                    branch.brute_force(&ext.left, &ext.right, 1, &mut found);
                    found
                })
                .collect();
            results.extend(found.into_iter().flatten());
            results.truncate(explorer.limit);
        }

        info!(%seed, results = results.len(),
              visited = visited.load(Ordering::Relaxed),
              complete = results.iter().filter(|r| r.is_complete).count(),
              cancelled = cancel.is_cancelled(),
              elapsed_ms = start.elapsed().as_millis() as u64, "multithreaded search finished");
        results
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::palindrome::cancel::CancelToken;
    use crate::palindrome::palindromer::Palindromer;
    use crate::palindrome::searchconfig::{Algorithm, SearchOptions};
    use crate::palindrome::seed::Seed;

    fn monte_carlo(depth: usize, results: usize) -> SearchOptions {
        SearchOptions::builder()
            .algorithm(Algorithm::MonteCarlo)
            .max_depth(depth)
            .max_results(results)
            .build()
    }

    #[test]
    fn matches_sequential_search() {
        let p = Palindromer::from_words(vec!["A", "B", "C", "AB", "BA"]);
        let seed = Seed::new("XY", "C").unwrap();
        for max_depth in 1..=4 {
            for max_results in [0, 1, 2, 5, 17, 100, 1000] {
                let options = SearchOptions::builder()
                    .max_depth(max_depth)
                    .max_results(max_results)
                    .build();
                let sequential = p.generate("XY", "C", &options).unwrap();
                let parallel = p.search_multithreaded(&seed, &options, &mut StepRng::new(0, 0),
                                                      &CancelToken::new());
                assert_eq!(parallel, sequential, "depth {} results {}", max_depth, max_results);
            }
        }
    }

    #[test]
    fn work_is_bounded_by_the_result_budget() {
        let words: Vec<String> = (b'A'..=b'Z')
            .flat_map(|a| (b'A'..=b'Z').map(move |b| format!("{}{}", a as char, b as char)))
            .collect();
        let p = Palindromer::from_words(words);
        let seed = Seed::new("XQ", "").unwrap();
        let options = SearchOptions::builder().max_depth(3).max_results(100).build();

        let visited = AtomicUsize::new(0);
        let results = p.fan_out(&seed, &options, &CancelToken::new(), &visited);
        assert_eq!(results, p.generate("XQ", "", &options).unwrap());

        // one batch of branches fills the budget: 676 branches with 676 children
        // each would be far more
        let visited = visited.load(Ordering::Relaxed);
        assert!(visited <= 1 + rayon::current_num_threads() * 99, "visited {}", visited);
    }

    #[test]
    fn complete_seed_does_not_fan_out() {
        let p = Palindromer::from_words(vec!["A", "B"]);
        let seed = Seed::new("AB", "AB").unwrap();
        let visited = AtomicUsize::new(0);
        let results = p.fan_out(&seed, &SearchOptions::default(), &CancelToken::new(), &visited);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_complete);
        assert_eq!(visited.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn cancelled_token_stops_scheduling() {
        let p = Palindromer::from_words(vec!["A", "B"]);
        let seed = Seed::new("XY", "").unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let results = p.search_multithreaded(&seed, &SearchOptions::default(),
                                             &mut StepRng::new(0, 0), &cancel);
        assert!(results.is_empty());
    }

    #[test]
    fn monte_carlo_falls_back_to_single_thread() {
        let p = Palindromer::from_words(vec!["A", "B", "C", "D"]);
        let seed = Seed::new("XY", "").unwrap();
        let options = monte_carlo(3, 50);
        let results = p.search_multithreaded(&seed, &options, &mut StdRng::seed_from_u64(1),
                                             &CancelToken::new());
        // seed, three children, three grandchildren each
        assert_eq!(results.len(), 13);
        assert_eq!(results[0].depth, 0);
    }

    #[test]
    fn monte_carlo_uses_the_given_source() {
        let p = Palindromer::from_words(vec!["A", "B", "C", "D", "E"]);
        let seed = Seed::new("XY", "").unwrap();
        let options = monte_carlo(4, 40);
        for s in [3, 17] {
            let parallel = p.search_multithreaded(&seed, &options, &mut StdRng::seed_from_u64(s),
                                                  &CancelToken::new());
            let sequential = p.search(&seed, &options, &mut StdRng::seed_from_u64(s),
                                      &CancelToken::new());
            assert_eq!(parallel, sequential);
        }
    }
}
