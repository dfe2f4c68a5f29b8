//! Error types for a generation attempt.
//!
//! Three outcomes are kept apart:
//!
//! - [`PlacementConflict`]: one word could not be written. Handled inside
//!   the embedder; the word is recorded as dropped with a [`DropReason`].
//! - [`AttemptError::StructuralFailure`]: the words cannot be joined into
//!   one spanning tree. Aborts the attempt; a retry with another seed may
//!   succeed.
//! - [`AttemptError::InvariantViolation`]: a programming defect. Aborts the
//!   attempt.

use std::error::Error;
use std::fmt;

use crate::id::WordId;
use crate::position::Position;

/// Why a single word could not be written into the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementConflict {
    /// The target cell already holds a different letter.
    LetterMismatch {
        /// The contested cell.
        position: Position,
        /// Letter already in the grid.
        existing: char,
        /// Letter the new word needed there.
        attempted: char,
    },
    /// An orthogonal neighbour belongs to a parallel word, so the new word
    /// would run alongside it and spell unintended letter runs.
    ParallelNeighbour {
        /// Cell of the new word being checked.
        position: Position,
        /// The offending neighbour cell.
        neighbour: Position,
    },
    /// The target cell is already claimed by a word running in the same
    /// direction as the new word.
    ParallelOverlap {
        /// The contested cell.
        position: Position,
    },
}

impl fmt::Display for PlacementConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LetterMismatch {
                position,
                existing,
                attempted,
            } => write!(
                f,
                "cell {position} holds '{existing}', cannot write '{attempted}'"
            ),
            Self::ParallelNeighbour {
                position,
                neighbour,
            } => write!(
                f,
                "cell {position} touches parallel word at {neighbour}"
            ),
            Self::ParallelOverlap { position } => {
                write!(f, "cell {position} already claimed by a parallel word")
            }
        }
    }
}

impl Error for PlacementConflict {}

/// Why a word is missing from a finished layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Writing the word collided with the grid.
    Conflict(PlacementConflict),
    /// The tree reaches this word only through a word that was dropped.
    ParentUnplaced {
        /// The dropped word the tree edge hangs from.
        parent: WordId,
    },
    /// No tree edge connects this word to the root's component.
    Disconnected,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict(conflict) => write!(f, "conflict: {conflict}"),
            Self::ParentUnplaced { parent } => write!(f, "parent word {parent} unplaced"),
            Self::Disconnected => write!(f, "not connected to the root"),
        }
    }
}

/// A broken internal invariant. Always a defect, never a normal outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A cell would gain a third occupant.
    CellOverflow {
        /// The overflowing cell.
        position: Position,
        /// The word that tried to claim it.
        word: WordId,
    },
    /// A traversal step referenced a base word with no placement.
    UnplacedBase {
        /// The base word.
        word: WordId,
    },
    /// A word id outside the attempt's word set.
    UnknownWord {
        /// The offending id.
        word: WordId,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOverflow { position, word } => write!(
                f,
                "cell {position} already has two occupants, word {word} cannot claim it"
            ),
            Self::UnplacedBase { word } => write!(f, "base word {word} has no placement"),
            Self::UnknownWord { word } => write!(f, "word {word} is not in the word set"),
        }
    }
}

impl Error for InvariantViolation {}

/// Failure of a whole generation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptError {
    /// The intersection graph does not connect every word.
    StructuralFailure {
        /// Number of connected components in the spanning forest.
        components: usize,
        /// Normalized text of the words outside the root's component.
        unreached: Vec<String>,
    },
    /// An internal invariant was broken.
    InvariantViolation(InvariantViolation),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuralFailure {
                components,
                unreached,
            } => write!(
                f,
                "words form {components} components; unreachable: {}",
                unreached.join(", ")
            ),
            Self::InvariantViolation(v) => write!(f, "invariant violation: {v}"),
        }
    }
}

impl Error for AttemptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvariantViolation(v) => Some(v),
            Self::StructuralFailure { .. } => None,
        }
    }
}

impl From<InvariantViolation> for AttemptError {
    fn from(v: InvariantViolation) -> Self {
        Self::InvariantViolation(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_failure_lists_unreached_words() {
        let err = AttemptError::StructuralFailure {
            components: 2,
            unreached: vec!["HP".into(), "SWIFT".into()],
        };
        assert_eq!(
            err.to_string(),
            "words form 2 components; unreachable: HP, SWIFT"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn invariant_violation_is_the_source() {
        let inner = InvariantViolation::CellOverflow {
            position: Position::new(1, 0),
            word: WordId(3),
        };
        let err: AttemptError = inner.clone().into();
        assert_eq!(err, AttemptError::InvariantViolation(inner));
        assert!(err.source().is_some());
    }

    #[test]
    fn conflict_display_names_the_cell() {
        let c = PlacementConflict::LetterMismatch {
            position: Position::new(2, -1),
            existing: 'A',
            attempted: 'T',
        };
        assert_eq!(c.to_string(), "cell (2, -1) holds 'A', cannot write 'T'");
        let reason = DropReason::Conflict(c);
        assert!(reason.to_string().starts_with("conflict: "));
    }
}
