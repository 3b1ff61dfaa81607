//! Error types for dice, games and analysis.

use crate::face::Face;

/// Convenience result type for simulator operations.
pub type MonteResult<T> = Result<T, MonteError>;

/// Errors that can occur while building dice, running games or analyzing results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MonteError {
    /// A die was constructed without any faces.
    #[error("a die needs at least one face")]
    EmptyFaceSet,

    /// The same face was given twice when constructing a die.
    #[error("duplicate face: {0}")]
    DuplicateFace(Face),

    /// The face is not on this die.
    #[error("'{0}' is not a face on this die")]
    UnknownFace(Face),

    /// The weight could not be read as a finite, non-negative number.
    #[error("invalid weight for face '{face}': {value}")]
    InvalidWeight {
        /// The face that was being reweighted.
        face: Face,
        /// The rejected value, as given.
        value: String,
    },

    /// A draw or round count was below one.
    #[error("{name} must be at least 1, got {value}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A game was created without any dice.
    #[error("a game needs at least one die")]
    EmptyEnsemble,

    /// A die in the ensemble does not share the face set of the first die.
    #[error("die at position {position} does not have the same faces as die 0")]
    IncompatibleEnsemble {
        /// Member position of the first mismatching die.
        position: usize,
    },

    /// Results were requested before the game was run.
    #[error("no results: the game has not been run yet")]
    NoResults,

    /// An unknown result layout was requested.
    #[error("unknown result form '{0}', expected 'wide' or 'narrow'")]
    InvalidFormat(String),

    /// Every weight on a die is zero, so no face can be drawn.
    #[error("all weights are zero, nothing can be rolled")]
    DegenerateWeights,

    /// The analyzer's game has been dropped.
    #[error("the analyzed game no longer exists")]
    GameDropped,
}
