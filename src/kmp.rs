//! Knuth-Morris-Pratt Search
//!
//! **Core Idea**: Never re-read a text character. The LPS table (longest
//! proper prefix that is also a suffix) tells the scan how far a partial
//! match can be reused after a mismatch.
//!
//! - Preprocess: O(M) to build the LPS table
//! - Search: O(N), single left-to-right pass over the text

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Build the LPS (longest proper prefix-suffix) table for a pattern.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. On a mismatch the search falls back to
/// `lps[j - 1]` instead of restarting from zero.
///
/// # Example
/// ```
/// use textscan::kmp::compute_lps;
///
/// assert_eq!(compute_lps(b"AAAA"), vec![0, 1, 2, 3]);
/// assert_eq!(compute_lps(b"ABCABC"), vec![0, 0, 0, 1, 2, 3]);
/// ```
pub fn compute_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut len = 0; // length of the current candidate prefix
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // Fall back to the next shorter prefix already computed.
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Find the first occurrence of `pattern` in `text`.
///
/// Returns the zero-based offset of the first match, or [`None`] if the
/// pattern does not occur. An empty pattern matches at offset 0.
///
/// # Example
/// ```
/// use textscan::kmp_search;
///
/// assert_eq!(kmp_search(b"ABABDABACDABABCABAB", b"ABABCABAB"), Some(10));
/// assert_eq!(kmp_search(b"hello world", b"xyz"), None);
/// ```
#[inline]
pub fn kmp_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }

    let lps = compute_lps(pattern);
    let mut i = 0; // text cursor
    let mut j = 0; // pattern cursor

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}
