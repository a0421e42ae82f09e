//! Shows how much the shape of a [`Tree`] matters for lookups.
//!
//! A word list is read from a file and a sample of distinct words is drawn from it. The sample
//! is then looked up four ways and each way is timed:
//!
//! 1. scanning the plain list, in file order, until the word turns up,
//! 2. finding it in a tree built by adding the words in file order,
//! 3. finding it in a tree built by adding the words in a random order,
//! 4. finding it in a tree built in file order and then rebalanced.
//!
//! Word lists are usually sorted, so the second tree is a list in disguise. Every way builds its
//! own tree from scratch.

use std::fmt;
use std::fs;
use std::hint::black_box;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::Tree;

/// How many words are looked up when no sample size is given.
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

/// Errors triggered while setting up or running the demo.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DemoError {
    /// The word list could not be read.
    #[error("could not read word list {}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// Why reading failed.
        #[source]
        source: io::Error,
    },
    /// More words were asked for than the list holds.
    #[error("cannot sample {requested} words from a list of {available}")]
    NotEnoughWords {
        /// The sample size.
        requested: usize,
        /// How many words were read.
        available: usize,
    },
    /// The sample size argument is not a positive whole number.
    #[error("invalid sample size {0:?}")]
    InvalidSampleSize(String),
    /// The command line did not name a word list.
    #[error("usage: demo <WORDS_FILE> [SAMPLE_SIZE]")]
    Usage,
}

/// What to run the demo on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Newline delimited word list.
    pub words: PathBuf,
    /// How many distinct words to look up.
    pub sample_size: usize,
}

impl Config {
    /// Reads the configuration from command line arguments (without the program name):
    /// `<WORDS_FILE> [SAMPLE_SIZE]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::demo::{Config, DEFAULT_SAMPLE_SIZE};
    ///
    /// let config = Config::from_args(["words.txt".to_string()]).unwrap();
    /// assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
    ///
    /// let config = Config::from_args(["words.txt".to_string(), "50".to_string()]).unwrap();
    /// assert_eq!(config.sample_size, 50);
    /// ```
    pub fn from_args<I>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let words = args.next().map(PathBuf::from).ok_or(DemoError::Usage)?;
        let sample_size = match args.next() {
            None => DEFAULT_SAMPLE_SIZE,
            Some(arg) => match arg.parse() {
                Ok(size) if size > 0 => size,
                _ => return Err(DemoError::InvalidSampleSize(arg)),
            },
        };
        if args.next().is_some() {
            return Err(DemoError::Usage);
        }

        Ok(Self { words, sample_size })
    }
}

/// How long each way of looking up the sample took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Scanning the list in file order.
    pub linear: Duration,
    /// A tree built in file order.
    pub ordered: Duration,
    /// A tree built in a random order.
    pub shuffled: Duration,
    /// A tree built in file order and rebalanced.
    pub rebalanced: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = [
            ("list scan", self.linear),
            ("tree in file order", self.ordered),
            ("tree in random order", self.shuffled),
            ("rebalanced tree", self.rebalanced),
        ];
        for (name, elapsed) in lines {
            writeln!(f, "{:<22}{:>12.6} s", name, elapsed.as_secs_f64())?;
        }
        Ok(())
    }
}

/// Loads the word list and times all four lookups.
pub fn run<R>(config: &Config, rng: &mut R) -> Result<Report, DemoError>
where
    R: Rng + ?Sized,
{
    let words = load_words(&config.words)?;
    info!(
        path = %config.words.display(),
        words = words.len(),
        "loaded word list"
    );
    let targets = sample_targets(&words, config.sample_size, rng)?;

    let linear = time_linear(&words, &targets);
    info!(elapsed = ?linear, "scanned list");

    let ordered = time_lookups(&ordered_tree(&words), &targets);
    info!(elapsed = ?ordered, "searched tree built in file order");

    let shuffled = time_lookups(&shuffled_tree(&words, rng), &targets);
    info!(elapsed = ?shuffled, "searched tree built in random order");

    let rebalanced = time_lookups(&rebalanced_tree(&words), &targets);
    info!(elapsed = ?rebalanced, "searched rebalanced tree");

    Ok(Report {
        linear,
        ordered,
        shuffled,
        rebalanced,
    })
}

/// Reads one word per line. Surrounding whitespace is trimmed and blank lines are skipped.
pub fn load_words(path: &Path) -> Result<Vec<String>, DemoError> {
    let contents = fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect())
}

/// Draws `count` words without replacement.
///
/// # Errors
///
/// [`DemoError::NotEnoughWords`] when `count` is larger than the list.
pub fn sample_targets<R>(
    words: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, DemoError>
where
    R: Rng + ?Sized,
{
    if count > words.len() {
        return Err(DemoError::NotEnoughWords {
            requested: count,
            available: words.len(),
        });
    }

    Ok(words.choose_multiple(rng, count).cloned().collect())
}

/// A tree with the words added in list order.
pub fn ordered_tree(words: &[String]) -> Tree<String> {
    words.iter().cloned().collect()
}

/// A tree with the words added in a random order.
pub fn shuffled_tree<R>(words: &[String], rng: &mut R) -> Tree<String>
where
    R: Rng + ?Sized,
{
    let mut shuffled = words.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().collect()
}

/// A tree with the words added in list order and then rebalanced.
pub fn rebalanced_tree(words: &[String]) -> Tree<String> {
    let mut tree = ordered_tree(words);
    tree.rebalance();
    tree
}

/// Time taken to scan `words` front to back for every target.
pub fn time_linear(words: &[String], targets: &[String]) -> Duration {
    let now = Instant::now();
    for target in targets {
        let _position = black_box(words.iter().position(|word| word == target));
    }
    now.elapsed()
}

/// Time taken to find every target in `tree`.
pub fn time_lookups(tree: &Tree<String>, targets: &[String]) -> Duration {
    debug!(size = tree.len(), height = tree.height(), "timing lookups");

    let now = Instant::now();
    for target in targets {
        let _item = black_box(tree.find(target));
    }
    now.elapsed()
}
