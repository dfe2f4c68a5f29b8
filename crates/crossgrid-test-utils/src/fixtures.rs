//! Word lists for tests and benchmarks.

/// Mixed-case list with a multi-word entry and a two-letter word.
pub const SAMPLE_WORDS: &[&str] = &[
    "Sachin",
    "Biryani",
    "Simba",
    "HP",
    "Star Wars",
    "Kipling",
    "Spotify",
    "Scrolling",
    "Santa",
    "Kindle",
    "Messi",
    "Swift",
    "Lakshya",
    "Aurora",
    "Blackberry",
];

/// Three words that pairwise share a letter.
pub const TRIANGLE: &[&str] = &["CAT", "CAR", "ART"];

/// Two connected words and one that shares no letter with either.
pub const WITH_ISOLATED: &[&str] = &["CAT", "CAR", "HP"];

/// Words that collapse to fewer distinct entries after normalization.
pub const WITH_DUPLICATES: &[&str] = &["cat", "CAT", " c a t ", "car"];

/// A deterministic list of `n` pseudo-words over a small alphabet.
///
/// Letters are drawn from `A..=H` with a fixed linear congruential
/// sequence, so lists are dense in shared letters and identical across
/// runs.
pub fn synthetic_words(n: usize, len: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..n)
        .map(|_| {
            (0..len.max(2))
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    (b'A' + ((state >> 33) % 8) as u8) as char
                })
                .collect()
        })
        .collect()
}
