use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use palindromer::palindrome::palindromer::DEFAULT_PAIR_LIMIT;
use palindromer::palindrome::seed::clean_input;
use palindromer::{Algorithm, CancelToken, FileFormat, Palindromer, PalindromeResult,
                  SearchOptions, Seed, Wordlist};

/// Grow palindromic phrases from a LEFT|RIGHT seed using dictionary words.
#[derive(StructOpt)]
#[structopt(name = "palindromer")]
struct Cli {
    /// Seed in LEFT|RIGHT form, e.g. "WAS|SAW"
    seed: Option<String>,
    /// Word list, one entry per line (a small built-in list is used otherwise)
    #[structopt(short, long, parse(from_os_str))]
    dictionary: Option<PathBuf>,
    /// Column delimiter of the word list
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word; needs --delimiter
    #[structopt(long, requires = "delimiter")]
    word_column: Option<usize>,
    /// JSON file with search options
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// brute-force or monte-carlo
    #[structopt(short, long)]
    algorithm: Option<Algorithm>,
    #[structopt(long)]
    max_depth: Option<usize>,
    #[structopt(long)]
    max_results: Option<usize>,
    /// Reserved; currently extends the same way as normal mode
    #[structopt(long)]
    reverse: bool,
    /// Seed for the Monte Carlo random source
    #[structopt(long)]
    rng_seed: Option<u64>,
    /// Explore the first level of a brute-force search on all cores
    #[structopt(long)]
    parallel: bool,
    /// Stop searching after this many milliseconds
    #[structopt(long)]
    timeout_ms: Option<u64>,
    /// List WORD|DROW pairs from the dictionary instead of searching
    #[structopt(long)]
    pairs: bool,
    /// How many dictionary words --pairs looks at
    #[structopt(long)]
    pair_limit: Option<usize>,
    /// Print dictionary statistics
    #[structopt(long)]
    stats: bool,
    /// Print results as JSON
    #[structopt(long)]
    json: bool,
}

impl Cli {
    fn search_options(&self) -> Result<SearchOptions, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => SearchOptions::from_file(path)?,
            None => SearchOptions::default(),
        };
        if let Some(algorithm) = self.algorithm {
            options.algorithm = algorithm;
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(max_results) = self.max_results {
            options.max_results = max_results;
        }
        options.reverse |= self.reverse;
        Ok(options)
    }

    fn wordlist(&self) -> Result<Wordlist, Box<dyn Error>> {
        match &self.dictionary {
            Some(path) => {
                let format = match (self.delimiter, self.word_column) {
                    (Some(d), Some(c)) => FileFormat::builder().delimiter(d).word_column(c).build(),
                    (Some(d), None) => FileFormat::builder().delimiter(d).build(),
                    (None, None) => FileFormat::builder().build(),
                    (None, Some(_)) => return Err("--word-column needs --delimiter".into()),
                };
                Ok(Wordlist::from_file(path, &format)?)
            }
            None => {
                warn!("no dictionary given, using the built-in word list");
                Ok(Wordlist::fallback())
            }
        }
    }
}

fn print_results(results: &[PalindromeResult], json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        results.iter().for_each(|r| println!("{}", r));
    }
    Ok(())
}

fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let palindromer = Palindromer::new(args.wordlist()?);

    if args.stats {
        let stats = palindromer.stats();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("{} words, average length {}, longest {}",
                     stats.word_count, stats.avg_length, stats.max_length);
        }
    }

    if args.pairs {
        let limit = args.pair_limit.unwrap_or(DEFAULT_PAIR_LIMIT);
        return print_results(&palindromer.initial_pair_results(limit), args.json);
    }

    let input = match &args.seed {
        Some(seed) => seed,
        None if args.stats => return Ok(()),
        None => return Err("a LEFT|RIGHT seed is required unless --pairs or --stats is given".into()),
    };
    let seed = Seed::parse(&clean_input(input))?;
    let options = args.search_options()?;

    let cancel = CancelToken::new();
    if let Some(ms) = args.timeout_ms {
        let watchdog = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(ms));
            watchdog.cancel();
        });
    }

    let mut rng = match args.rng_seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let results = if args.parallel {
        palindromer.search_multithreaded(&seed, &options, &mut rng, &cancel)
    } else {
        palindromer.search(&seed, &options, &mut rng, &cancel)
    };
    if cancel.is_cancelled() {
        warn!("search timed out, results are partial");
    }
    print_results(&results, args.json)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::from_args()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use crate::Cli;

    #[test]
    fn word_column_requires_delimiter() {
        assert!(Cli::from_iter_safe(&["palindromer", "--word-column", "2", "AB|"]).is_err());
        let cli = Cli::from_iter_safe(&["palindromer", "--delimiter", ",", "--word-column", "2", "AB|"])
            .unwrap();
        assert_eq!(cli.delimiter, Some(','));
        assert_eq!(cli.word_column, Some(2));
    }

    #[test]
    fn lone_word_column_is_refused_when_loading() {
        let mut cli = Cli::from_iter_safe(&["palindromer", "-d", "words.txt", "AB|"]).unwrap();
        cli.word_column = Some(1);
        assert!(cli.wordlist().is_err());
    }
}
