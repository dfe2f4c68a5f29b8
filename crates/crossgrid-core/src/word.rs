//! Normalized words, their letter indices, and the per-attempt [`WordSet`].

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::id::WordId;
use crate::position::Placement;

/// Ordered character offsets at which one letter occurs in a word.
pub type LetterOffsets = SmallVec<[usize; 4]>;

/// A normalized input word together with its mutable attempt state.
///
/// The text is uppercased with all whitespace removed; it is the word's
/// only identity, so two `Word`s compare equal iff their normalized text
/// matches regardless of placement or consumed offsets.
///
/// Attempt state consists of the optional [`Placement`] (unset until the
/// embedder commits the word) and the set of offsets already consumed by
/// accepted intersections. Both start empty for every new word.
#[derive(Clone, Debug)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    index: IndexMap<char, LetterOffsets>,
    placement: Option<Placement>,
    consumed: SmallVec<[usize; 4]>,
}

impl Word {
    /// Normalize `raw` and build its letter index.
    pub fn new(raw: &str) -> Self {
        let text = Self::normalize(raw);
        let letters: Vec<char> = text.chars().collect();
        let mut index: IndexMap<char, LetterOffsets> = IndexMap::new();
        for (offset, &letter) in letters.iter().enumerate() {
            index.entry(letter).or_default().push(offset);
        }
        Self {
            text,
            letters,
            index,
            placement: None,
            consumed: SmallVec::new(),
        }
    }

    /// Uppercase `raw` and strip every whitespace character.
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// The normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (not bytes).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the word has no letters after normalization.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letter at `offset`, if in range.
    pub fn letter_at(&self, offset: usize) -> Option<char> {
        self.letters.get(offset).copied()
    }

    /// Every distinct letter with its ordered offsets, in order of first
    /// occurrence.
    pub fn letter_index(&self) -> &IndexMap<char, LetterOffsets> {
        &self.index
    }

    /// Offsets of `letter`, empty if it does not occur.
    pub fn offsets_of(&self, letter: char) -> &[usize] {
        self.index
            .get(&letter)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `letter` occurs anywhere in the word.
    pub fn contains_letter(&self, letter: char) -> bool {
        self.index.contains_key(&letter)
    }

    /// First offset of `letter` not yet consumed by an intersection.
    pub fn first_free_offset(&self, letter: char) -> Option<usize> {
        self.offsets_of(letter)
            .iter()
            .copied()
            .find(|off| !self.consumed.contains(off))
    }

    /// Whether `offset` already anchors an intersection.
    pub fn is_consumed(&self, offset: usize) -> bool {
        self.consumed.contains(&offset)
    }

    /// Mark `offset` as anchoring an intersection.
    ///
    /// Returns `false` if it was already consumed.
    pub fn consume_offset(&mut self, offset: usize) -> bool {
        if self.consumed.contains(&offset) {
            return false;
        }
        self.consumed.push(offset);
        true
    }

    /// Consumed offsets, in consumption order.
    pub fn consumed_offsets(&self) -> &[usize] {
        &self.consumed
    }

    /// Current placement, `None` until committed to a grid.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Whether the word has been committed to a grid.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Record the word's committed placement.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The distinct words of one attempt, addressed by [`WordId`].
///
/// Built from the raw input list: each entry is normalized, inputs that
/// normalize to an already-seen word or to nothing are skipped, and the
/// remaining words keep their input order. [`input_count`](Self::input_count)
/// still reports the raw input length.
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    words: Vec<Word>,
    input_count: usize,
}

impl WordSet {
    /// Build a fresh word set from raw inputs.
    pub fn from_inputs<S: AsRef<str>>(inputs: &[S]) -> Self {
        let mut words: Vec<Word> = Vec::with_capacity(inputs.len());
        for raw in inputs {
            let word = Word::new(raw.as_ref());
            if word.is_empty() || words.contains(&word) {
                continue;
            }
            words.push(word);
        }
        Self {
            words,
            input_count: inputs.len(),
        }
    }

    /// Number of raw inputs the set was built from.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word by id.
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.index())
    }

    /// Mutable word by id.
    pub fn get_mut(&mut self, id: WordId) -> Option<&mut Word> {
        self.words.get_mut(id.index())
    }

    /// Look a word up by raw or normalized text.
    pub fn find(&self, text: &str) -> Option<WordId> {
        let normalized = Word::normalize(text);
        self.words
            .iter()
            .position(|w| w.text() == normalized)
            .map(|i| WordId(i as u32))
    }

    /// All ids in input order.
    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        (0..self.words.len() as u32).map(WordId)
    }

    /// `(id, word)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u32), w))
    }

    /// Two distinct words borrowed mutably at once.
    ///
    /// Returns `None` if `a == b` or either id is out of range.
    pub fn pair_mut(&mut self, a: WordId, b: WordId) -> Option<(&mut Word, &mut Word)> {
        let (ia, ib) = (a.index(), b.index());
        if ia == ib || ia >= self.words.len() || ib >= self.words.len() {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.words.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.words.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }
}
