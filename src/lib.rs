//! # textscan
//!
//! **Classic substring search, compared head to head**
//!
//! Three first-occurrence searches over byte strings, each with a different
//! way of avoiding wasted comparisons, plus a binary search that reports its
//! probe count and falls back to an upper bound on a miss.
//!
//! | Algorithm | Preprocess | Search | Skips via |
//! |-----------|------------|--------|-----------|
//! | [`kmp_search`] | O(M) | O(N) | LPS prefix table |
//! | [`rabin_karp_search`] | O(M) | O(N) expected | rolling hash |
//! | [`boyer_moore_search`] | O(M) | O(N/M) best | bad-character shifts |
//!
//! All three agree on every input: same first-occurrence offset, or all
//! [`None`]. The [`harness`] module (std only) times them against real
//! texts and reports the fastest per case.
//!
//! ## Example
//!
//! ```
//! use textscan::{boyer_moore_search, kmp_search, rabin_karp_search};
//!
//! let text = b"ABABDABACDABABCABAB";
//! let pattern = b"ABABCABAB";
//!
//! assert_eq!(kmp_search(text, pattern), Some(10));
//! assert_eq!(rabin_karp_search(text, pattern), Some(10));
//! assert_eq!(boyer_moore_search(text, pattern), Some(10));
//!
//! assert_eq!(kmp_search(text, b"xyz"), None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod binary_search;
pub mod boyer_moore;
pub mod kmp;
pub mod rabin_karp;

#[cfg(feature = "std")]
pub mod harness;

pub use binary_search::{binary_search, BinarySearchResult};
pub use boyer_moore::boyer_moore_search;
pub use kmp::kmp_search;
pub use rabin_karp::rabin_karp_search;

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
