use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::{thread_rng, Rng};
use tracing::{debug, info};

use crate::error::PalindromeError;
use crate::palindrome::cancel::CancelToken;
use crate::palindrome::completion::is_complete;
use crate::palindrome::palindromer::{Extension, Palindromer};
use crate::palindrome::result::PalindromeResult;
use crate::palindrome::searchconfig::{Algorithm, SearchOptions, MONTE_CARLO_BRANCHING};
use crate::palindrome::seed::Seed;

/// Budgets of one search run, shared by every recursive call.
#[derive(Clone, Copy)]
pub(crate) struct Explorer<'a> {
    pub(crate) palindromer: &'a Palindromer,
    pub(crate) max_depth: usize,
    pub(crate) limit: usize,
    cancel: &'a CancelToken,
    visited: &'a AtomicUsize,
}

impl<'a> Explorer<'a> {
    pub(crate) fn new(palindromer: &'a Palindromer,
                      options: &SearchOptions,
                      cancel: &'a CancelToken,
                      visited: &'a AtomicUsize) -> Explorer<'a> {
        Explorer {
            palindromer,
            max_depth: options.effective_depth(),
            limit: options.max_results,
            cancel,
            visited,
        }
    }

    pub(crate) fn with_limit(self, limit: usize) -> Explorer<'a> {
        Explorer { limit, ..self }
    }

    pub(crate) fn stopped(&self, depth: usize, results: &[PalindromeResult]) -> bool {
        depth >= self.max_depth || results.len() >= self.limit || self.cancel.is_cancelled()
    }

    /// Records the state and returns whether it is a complete palindrome.
    pub(crate) fn record(&self, left: &str, right: &str, depth: usize,
                         results: &mut Vec<PalindromeResult>) -> bool {
        self.visited.fetch_add(1, Ordering::Relaxed);
        let complete = is_complete(left, right);
        results.push(PalindromeResult::new(left, right, complete, depth));
        complete
    }

    pub(crate) fn brute_force(&self, left: &str, right: &str, depth: usize,
                              results: &mut Vec<PalindromeResult>) {
        if self.stopped(depth, results) {
            return;
        }
        // children of the last level would all be cut by the depth check
        if self.record(left, right, depth, results) || depth + 1 >= self.max_depth {
            return;
        }
        for Extension { left, right } in self.palindromer.extensions(left, right) {
            if self.stopped(depth + 1, results) {
                break;
            }
            self.brute_force(&left, &right, depth + 1, results);
        }
    }

    /// Every incomplete state shuffles its extensions, the last level included:
    /// `n - 1` draws per state.
    fn monte_carlo<R: Rng + ?Sized>(&self, left: &str, right: &str, depth: usize,
                                    results: &mut Vec<PalindromeResult>, rng: &mut R) {
        if self.stopped(depth, results) {
            return;
        }
        if self.record(left, right, depth, results) {
            return;
        }
        let mut extensions: Vec<Extension> = self.palindromer.extensions(left, right).collect();
        shuffle(&mut extensions, rng);
        for Extension { left, right } in extensions.iter().take(MONTE_CARLO_BRANCHING) {
            self.monte_carlo(left, right, depth + 1, results, rng);
        }
    }
}

/// Fisher-Yates, drawing every swap index from `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

impl Palindromer {
    /// Validates the seed halves and runs the configured search. Monte Carlo
    /// draws from the thread-local generator.
    pub fn generate(&self, left: &str, right: &str, options: &SearchOptions)
                    -> Result<Vec<PalindromeResult>, PalindromeError> {
        let seed = Seed::new(left, right)?;
        Ok(self.search(&seed, options, &mut thread_rng(), &CancelToken::new()))
    }

    /// Same as `generate`, for raw `LEFT|RIGHT` input.
    pub fn generate_from_input(&self, input: &str, options: &SearchOptions)
                               -> Result<Vec<PalindromeResult>, PalindromeError> {
        let seed = Seed::parse(input)?;
        Ok(self.search(&seed, options, &mut thread_rng(), &CancelToken::new()))
    }

    /// Runs a search from an already validated seed. Results come back in
    /// traversal order, at most `options.max_results` of them. A cancelled
    /// token stops the traversal where it is and keeps what was found.
    pub fn search<R: Rng + ?Sized>(&self,
                                   seed: &Seed,
                                   options: &SearchOptions,
                                   rng: &mut R,
                                   cancel: &CancelToken) -> Vec<PalindromeResult> {
        if options.reverse {
            debug!("reverse mode is reserved and extends the same way as normal mode");
        }
        let start = Instant::now();
        let visited = AtomicUsize::new(0);
        let explorer = Explorer::new(self, options, cancel, &visited);
        let mut results = Vec::new();

        match options.algorithm {
            Algorithm::BruteForce =>
                explorer.brute_force(seed.left(), seed.right(), 0, &mut results),
            Algorithm::MonteCarlo =>
                explorer.monte_carlo(seed.left(), seed.right(), 0, &mut results, rng),
        }
        results.truncate(options.max_results);

        info!(%seed, algorithm = %options.algorithm, results = results.len(),
              visited = visited.load(Ordering::Relaxed),
              complete = results.iter().filter(|r| r.is_complete).count(),
              cancelled = cancel.is_cancelled(),
              elapsed_ms = start.elapsed().as_millis() as u64, "search finished");
        results
    }
}
