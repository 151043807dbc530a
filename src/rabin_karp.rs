//! Rabin-Karp Search
//!
//! **Core Idea**: Compare hashes, not characters. A polynomial rolling hash
//! of the current text window is updated in O(1) per shift, so the scan is
//! O(N) expected with O(M) work only on hash hits.
//!
//! The modulus is deliberately small (101), so collisions are expected and
//! every hash hit is verified character by character before it counts as a
//! match.

extern crate alloc;

/// Alphabet base for the polynomial hash (one byte).
const BASE: u64 = 256;

/// Hash modulus. Small on purpose: collisions exercise the verification path.
const MODULUS: u64 = 101;

/// Polynomial hash of a byte string: `s[0]*B^(n-1) + ... + s[n-1]` mod 101.
///
/// Horner's rule, one pass.
#[inline]
pub fn polynomial_hash(s: &[u8]) -> u64 {
    s.iter()
        .fold(0, |hash, &c| (hash * BASE + u64::from(c)) % MODULUS)
}

/// Find the first occurrence of `pattern` in `text`.
///
/// Returns the zero-based offset of the first match, or [`None`] if the
/// pattern does not occur. An empty pattern matches at offset 0.
///
/// # Example
/// ```
/// use textscan::rabin_karp_search;
///
/// assert_eq!(rabin_karp_search(b"ABABDABACDABABCABAB", b"ABABCABAB"), Some(10));
/// assert_eq!(rabin_karp_search(b"hello world", b"xyz"), None);
/// ```
pub fn rabin_karp_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    let (n, m) = (text.len(), pattern.len());
    if m > n {
        return None;
    }

    let pattern_hash = polynomial_hash(pattern);
    let mut window_hash = polynomial_hash(&text[..m]);

    // Weight of the outgoing character: BASE^(m-1) mod MODULUS
    let mut high = 1u64;
    for _ in 0..m - 1 {
        high = (high * BASE) % MODULUS;
    }

    for i in 0..=n - m {
        // Hash hit is only a candidate. Verify before declaring a match.
        if window_hash == pattern_hash && &text[i..i + m] == pattern {
            return Some(i);
        }

        if i < n - m {
            // Roll the window: drop text[i], admit text[i + m].
            // Adding MODULUS before the subtraction keeps the intermediate
            // value in [0, MODULUS) without signed arithmetic.
            let outgoing = (u64::from(text[i]) * high) % MODULUS;
            window_hash = (window_hash + MODULUS - outgoing) % MODULUS;
            window_hash = (window_hash * BASE + u64::from(text[i + m])) % MODULUS;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_hash_single_byte() {
        assert_eq!(polynomial_hash(b"A"), u64::from(b'A') % MODULUS);
    }

    #[test]
    fn test_hash_matches_rolled_window() {
        // Rolling from "abc" to "bcd" must land on polynomial_hash("bcd")
        let text = b"abcd";
        let m = 3;
        let mut high = 1u64;
        for _ in 0..m - 1 {
            high = (high * BASE) % MODULUS;
        }
        let mut hash = polynomial_hash(&text[..m]);
        let outgoing = (u64::from(text[0]) * high) % MODULUS;
        hash = (hash + MODULUS - outgoing) % MODULUS;
        hash = (hash * BASE + u64::from(text[m])) % MODULUS;
        assert_eq!(hash, polynomial_hash(b"bcd"));
    }

    #[test]
    fn test_search_textbook_case() {
        assert_eq!(
            rabin_karp_search(b"ABABDABACDABABCABAB", b"ABABCABAB"),
            Some(10)
        );
    }

    #[test]
    fn test_search_first_of_many() {
        assert_eq!(rabin_karp_search(b"AAAAAAAAA", b"AAA"), Some(0));
    }

    #[test]
    fn test_search_absent() {
        assert_eq!(rabin_karp_search(b"hello world", b"xyz"), None);
    }

    #[test]
    fn test_search_collision_rejected() {
        // With modulus 101 collisions happen on long texts. A window whose
        // hash collides with the pattern's must not be reported as a match.
        let text: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        assert_eq!(rabin_karp_search(&text, b"zzzz"), None);
    }

    #[test]
    fn test_search_at_end() {
        assert_eq!(rabin_karp_search(b"abcdef", b"ef"), Some(4));
    }

    #[test]
    fn test_search_pattern_longer_than_text() {
        assert_eq!(rabin_karp_search(b"ab", b"abc"), None);
    }

    #[test]
    fn test_search_empty_pattern() {
        assert_eq!(rabin_karp_search(b"abc", b""), Some(0));
    }

    #[test]
    fn test_search_whole_text() {
        assert_eq!(rabin_karp_search(b"exactmatch", b"exactmatch"), Some(0));
    }
}
