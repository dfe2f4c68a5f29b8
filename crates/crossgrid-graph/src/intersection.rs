//! Shared-letter discovery between two words.

use crossgrid_core::{Word, WordId, WordSet};

/// Two distinct words crossing at one shared letter.
///
/// `offset_a` indexes into `word_a`, `offset_b` into `word_b`; the letters
/// at those offsets are equal. The pair is unordered in meaning, but the
/// stored order is kept so that traversal stays deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntersectionEdge {
    /// First endpoint.
    pub word_a: WordId,
    /// Second endpoint.
    pub word_b: WordId,
    /// Character offset of the shared letter in `word_a`.
    pub offset_a: usize,
    /// Character offset of the shared letter in `word_b`.
    pub offset_b: usize,
    /// The shared letter.
    pub letter: char,
}

impl IntersectionEdge {
    /// Whether `word` is one of the endpoints.
    pub fn touches(&self, word: WordId) -> bool {
        self.word_a == word || self.word_b == word
    }

    /// The opposite endpoint, or `None` if `word` is not on this edge.
    pub fn other(&self, word: WordId) -> Option<WordId> {
        if word == self.word_a {
            Some(self.word_b)
        } else if word == self.word_b {
            Some(self.word_a)
        } else {
            None
        }
    }

    /// The shared letter's offset inside `word`.
    pub fn offset_for(&self, word: WordId) -> Option<usize> {
        if word == self.word_a {
            Some(self.offset_a)
        } else if word == self.word_b {
            Some(self.offset_b)
        } else {
            None
        }
    }
}

/// Pick the crossing offsets for `a` and `b` without consuming them.
///
/// Walks the letters of `a` in first-occurrence order, skipping letters
/// `b` lacks. For each common letter the first unconsumed offset is taken
/// independently in each word. The pair `(0, 0)` is refused: both words
/// would start on the same cell.
pub fn select_offsets(a: &Word, b: &Word) -> Option<(char, usize, usize)> {
    a.letter_index()
        .keys()
        .copied()
        .filter(|&letter| b.contains_letter(letter))
        .find_map(|letter| {
            let off_a = a.first_free_offset(letter)?;
            let off_b = b.first_free_offset(letter)?;
            (off_a + off_b > 0).then_some((letter, off_a, off_b))
        })
}

/// Find one crossing between words `a` and `b` and consume its offsets.
///
/// Returns `None` when the words share no usable letter, or when either
/// id is unknown or both ids are equal. On success the chosen offset is
/// marked consumed on each word, so a second call for the same pair may
/// pick a different letter or nothing at all.
pub fn find_intersection(words: &mut WordSet, a: WordId, b: WordId) -> Option<IntersectionEdge> {
    let (word_a, word_b) = words.pair_mut(a, b)?;
    let (letter, offset_a, offset_b) = select_offsets(word_a, word_b)?;
    word_a.consume_offset(offset_a);
    word_b.consume_offset(offset_b);
    Some(IntersectionEdge {
        word_a: a,
        word_b: b,
        offset_a,
        offset_b,
        letter,
    })
}
