//! Games: repeated rounds over an ensemble of similar dice.
//!
//! A [`Game`] holds handles to dice that all share one face set. Each call
//! to [`Game::run`] rolls every die once per round and replaces the stored
//! [`TrialTable`]. Only the most recent run is kept.

pub mod config;
pub mod table;

pub use config::GameConfig;
pub use table::{NarrowRow, NarrowTable, ResultForm, Results, TrialTable};

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use rand::rngs::StdRng;

use crate::analyzer::Analyzer;
use crate::die::{Die, DieHandle};
use crate::error::{MonteError, MonteResult};
use crate::face::Face;

/// Slot holding the latest trial table, shared with analyzers.
pub(crate) type TableSlot = RefCell<Option<TrialTable>>;

/// An ensemble of dice and the results of its most recent run.
pub struct Game {
    pieces: Vec<DieHandle>,
    rng: StdRng,
    table: Rc<TableSlot>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("pieces", &self.pieces.len())
            .field("rounds", &self.table.borrow().as_ref().map(TrialTable::rounds))
            .finish()
    }
}

impl Game {
    /// Create a game over `pieces` with an OS-seeded RNG.
    ///
    /// Accepts owned dice or shared [`DieHandle`]s; member positions follow
    /// the iteration order.
    pub fn new<I, P>(pieces: I) -> MonteResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<DieHandle>,
    {
        Self::with_config(pieces, GameConfig::default())
    }

    /// Create a game with an explicit configuration.
    ///
    /// Fails if there are no pieces or if any piece's face set differs from
    /// that of the first piece.
    pub fn with_config<I, P>(pieces: I, config: GameConfig) -> MonteResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<DieHandle>,
    {
        let pieces: Vec<DieHandle> = pieces.into_iter().map(Into::into).collect();
        check_ensemble(&pieces)?;

        log::debug!("new game: {} dice, seed {:?}", pieces.len(), config.seed);
        Ok(Self {
            pieces,
            rng: config.rng(),
            table: Rc::new(RefCell::new(None)),
        })
    }

    /// The dice, in member order.
    pub fn pieces(&self) -> &[DieHandle] {
        &self.pieces
    }

    /// Number of dice in the ensemble.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false: a game has at least one die.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The shared face set, sorted.
    pub fn faces(&self) -> Vec<Face> {
        let mut faces = self.pieces[0].faces();
        faces.sort();
        faces
    }

    /// Roll every die once per round, `rounds` times, replacing any
    /// previous results.
    ///
    /// Weights are read when the run starts. If any die cannot be rolled the
    /// previous results are kept.
    pub fn run(&mut self, rounds: usize) -> MonteResult<()> {
        if rounds < 1 {
            return Err(MonteError::InvalidArgument {
                name: "rounds",
                value: rounds,
            });
        }

        let dice: Vec<Ref<'_, Die>> = self.pieces.iter().map(DieHandle::die).collect();
        let samplers = dice
            .iter()
            .map(|die| die.distribution())
            .collect::<MonteResult<Vec<_>>>()?;

        let mut rows = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            let row: Vec<Face> = samplers
                .iter()
                .map(|sampler| sampler.draw(&mut self.rng))
                .collect();
            rows.push(row);
        }

        let table = TrialTable::new(self.pieces.len(), rows);
        log::debug!("ran {} rounds over {} dice", rounds, table.members());
        *self.table.borrow_mut() = Some(table);
        Ok(())
    }

    /// Returns true once the game has been run.
    pub fn has_results(&self) -> bool {
        self.table.borrow().is_some()
    }

    /// Copy of the latest results in the requested layout.
    pub fn results(&self, form: ResultForm) -> MonteResult<Results> {
        let slot = self.table.borrow();
        let table = slot.as_ref().ok_or(MonteError::NoResults)?;
        Ok(match form {
            ResultForm::Wide => Results::Wide(table.clone()),
            ResultForm::Narrow => Results::Narrow(table.to_narrow()),
        })
    }

    /// Copy of the latest results, rounds × dice.
    pub fn wide(&self) -> MonteResult<TrialTable> {
        self.table.borrow().clone().ok_or(MonteError::NoResults)
    }

    /// Copy of the latest results, one row per (round, die).
    pub fn narrow(&self) -> MonteResult<NarrowTable> {
        self.table
            .borrow()
            .as_ref()
            .map(TrialTable::to_narrow)
            .ok_or(MonteError::NoResults)
    }

    /// An analyzer bound to this game.
    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new(self)
    }

    pub(crate) fn table_slot(&self) -> Weak<TableSlot> {
        Rc::downgrade(&self.table)
    }
}

/// Every die must carry the same faces as the first one.
fn check_ensemble(pieces: &[DieHandle]) -> MonteResult<()> {
    let Some(first) = pieces.first() else {
        return Err(MonteError::EmptyEnsemble);
    };
    let first = first.die();
    for (position, piece) in pieces.iter().enumerate().skip(1) {
        if !piece.die().has_same_faces(&first) {
            return Err(MonteError::IncompatibleEnsemble { position });
        }
    }
    Ok(())
}
