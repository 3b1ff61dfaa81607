//! Monte Carlo engine for games played with weighted dice.
//!
//! A [`Die`] is a set of unique faces, each with a mutable relative weight.
//! A [`Game`] rolls an ensemble of dice that share one face set for a number
//! of rounds and keeps the resulting trial table. An [`Analyzer`] reads the
//! latest table of its game and derives jackpot, face, combination and
//! permutation counts from it.

pub mod analyzer;
pub mod die;
pub mod error;
pub mod face;
pub mod game;

pub use analyzer::{Analyzer, FaceCounts, OutcomeCount, OutcomeCounts};
pub use die::{Die, DieHandle, DieState, FaceWeight};
pub use error::{MonteError, MonteResult};
pub use face::{Face, IntoWeight};
pub use game::{Game, GameConfig, NarrowRow, NarrowTable, ResultForm, Results, TrialTable};
