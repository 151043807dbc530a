//! Benchmark Harness
//!
//! Orchestration for the substring-search comparison: derive one pattern
//! known to occur in each text plus one fixed pattern known to be absent,
//! time every algorithm on every case with repeated invocation, and render
//! a console report with the fastest algorithm per case.
//!
//! Results accumulate in an explicit [`BenchReport`], keyed by case, so the
//! whole run is a value that can be inspected or printed.

use std::fmt;
use std::fs;
use std::hint;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::boyer_moore::boyer_moore_search;
use crate::kmp::kmp_search;
use crate::rabin_karp::rabin_karp_search;

/// Repetitions per case/algorithm pair; the reported time is the average.
pub const REPETITIONS: u32 = 5;

/// Length of the window sampled from each text as its "real" pattern.
pub const PATTERN_LEN: usize = 20;

/// Fixed pattern that occurs in no natural-language text.
pub const MISSING_PATTERN: &[u8] = b"qwertyuiopzxcvbnmlkj";

/// The three contenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Kmp,
    RabinKarp,
    BoyerMoore,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Kmp, Self::RabinKarp, Self::BoyerMoore];

    pub fn name(self) -> &'static str {
        match self {
            Self::Kmp => "KMP",
            Self::RabinKarp => "Rabin-Karp",
            Self::BoyerMoore => "Boyer-Moore",
        }
    }

    /// Dispatch to the underlying search function.
    #[inline]
    pub fn search(self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        match self {
            Self::Kmp => kmp_search(text, pattern),
            Self::RabinKarp => rabin_karp_search(text, pattern),
            Self::BoyerMoore => boyer_moore_search(text, pattern),
        }
    }
}

/// One benchmark case: a text paired with a pattern to search for.
pub struct Case<'a> {
    pub name: String,
    pub text: &'a [u8],
    pub pattern: &'a [u8],
}

/// Timings for one case across all algorithms.
pub struct CaseResult {
    pub name: String,
    pub timings: Vec<(Algorithm, Duration)>,
}

impl CaseResult {
    /// The algorithm with the lowest average time for this case.
    pub fn fastest(&self) -> Option<(Algorithm, Duration)> {
        self.timings.iter().copied().min_by_key(|&(_, time)| time)
    }
}

/// Accumulated results of a full benchmark run.
pub struct BenchReport {
    pub repetitions: u32,
    pub cases: Vec<CaseResult>,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Benchmark Results (average of {} runs, seconds) ===",
            self.repetitions
        )?;
        for case in &self.cases {
            writeln!(f, "\n{}", case.name)?;
            for &(algorithm, time) in &case.timings {
                writeln!(f, "  {:<12} {:.6}", algorithm.name(), time.as_secs_f64())?;
            }
        }

        writeln!(f, "\n=== Fastest per case ===")?;
        for case in &self.cases {
            if let Some((algorithm, time)) = case.fastest() {
                writeln!(
                    f,
                    "{}: {} ({:.6} seconds)",
                    case.name,
                    algorithm.name(),
                    time.as_secs_f64()
                )?;
            }
        }
        Ok(())
    }
}

/// Read a whole text file as UTF-8. Failures are fatal to the benchmark;
/// the error propagates to the caller.
pub fn load_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Slice a [`PATTERN_LEN`]-byte window out of `text` starting at
/// `text.len() / divisor`. The window trivially occurs in the text, which
/// makes it the "real" pattern for that text's cases.
pub fn sample_pattern(text: &[u8], divisor: usize) -> &[u8] {
    let start = text.len() / divisor.max(1);
    let end = (start + PATTERN_LEN).min(text.len());
    &text[start..end]
}

/// Build the case list for a set of texts: for text `k` (1-based), a
/// `textk_real` case with a window sampled from a different region of each
/// text, and a `textk_fake` case with [`MISSING_PATTERN`].
pub fn build_cases<'a>(texts: &[&'a [u8]]) -> Vec<Case<'a>> {
    texts
        .iter()
        .enumerate()
        .flat_map(|(i, &text)| {
            // Text 1 samples at len/2, text 2 at len/3, and so on.
            let real = sample_pattern(text, i + 2);
            [
                Case {
                    name: format!("text{}_real", i + 1),
                    text,
                    pattern: real,
                },
                Case {
                    name: format!("text{}_fake", i + 1),
                    text,
                    pattern: MISSING_PATTERN,
                },
            ]
        })
        .collect()
}

/// Average wall-clock time of `algorithm` over `repetitions` invocations.
pub fn average_time(
    algorithm: Algorithm,
    text: &[u8],
    pattern: &[u8],
    repetitions: u32,
) -> Duration {
    let repetitions = repetitions.max(1);
    let start = Instant::now();
    for _ in 0..repetitions {
        // black_box keeps the optimizer from hoisting or discarding the call
        hint::black_box(algorithm.search(hint::black_box(text), hint::black_box(pattern)));
    }
    start.elapsed() / repetitions
}

/// Time every algorithm on every case.
pub fn run_cases(cases: &[Case<'_>], repetitions: u32) -> BenchReport {
    let repetitions = repetitions.max(1);
    let cases = cases
        .iter()
        .map(|case| CaseResult {
            name: case.name.clone(),
            timings: Algorithm::ALL
                .iter()
                .map(|&algorithm| {
                    (
                        algorithm,
                        average_time(algorithm, case.text, case.pattern, repetitions),
                    )
                })
                .collect(),
        })
        .collect();

    BenchReport { repetitions, cases }
}
