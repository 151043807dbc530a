//! Substring-Search Benchmark
//!
//! Loads `article1.txt` and `article2.txt` from the working directory,
//! derives one pattern known to occur in each text plus one fixed absent
//! pattern, and times KMP, Rabin-Karp and Boyer-Moore on every case.
//!
//! ```bash
//! cargo run --release --bin benchmark
//! ```
//!
//! A missing or non-UTF-8 article file aborts the run.

use std::io;
use std::path::Path;

use textscan::harness::{build_cases, load_text, run_cases, REPETITIONS};

fn main() -> io::Result<()> {
    let text1 = load_text(Path::new("article1.txt"))?;
    let text2 = load_text(Path::new("article2.txt"))?;

    let texts: [&[u8]; 2] = [text1.as_bytes(), text2.as_bytes()];
    let report = run_cases(&build_cases(&texts), REPETITIONS);

    print!("{report}");
    Ok(())
}
