//! Statistics over a game's most recent run.
//!
//! An [`Analyzer`] keeps a weak reference to its game's trial table and
//! reads it again on every call, so re-running the game changes what the
//! analyzer reports.

pub mod counts;

pub use counts::{FaceCounts, OutcomeCount, OutcomeCounts};

use std::collections::{BTreeMap, HashMap};
use std::rc::Weak;

use crate::error::{MonteError, MonteResult};
use crate::face::Face;
use crate::game::{Game, TableSlot, TrialTable};

/// Computes jackpot, face, combination and permutation counts for a game.
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: Weak<TableSlot>,
    faces: Vec<Face>,
}

impl Analyzer {
    /// Bind an analyzer to `game`. The game is not borrowed past this call.
    pub fn new(game: &Game) -> Self {
        Self {
            table: game.table_slot(),
            faces: game.faces(),
        }
    }

    /// Number of rounds in which every die showed the same face.
    pub fn jackpot_count(&self) -> MonteResult<usize> {
        self.with_table(|table| table.iter().filter(|(_, row)| is_jackpot(row)).count())
    }

    /// Round numbers of every jackpot, in order.
    pub fn jackpot_rounds(&self) -> MonteResult<Vec<usize>> {
        self.with_table(|table| {
            table
                .iter()
                .filter(|(_, row)| is_jackpot(row))
                .map(|(round, _)| round)
                .collect()
        })
    }

    /// Per round, how many dice showed each face of the shared face set.
    pub fn face_count(&self) -> MonteResult<FaceCounts> {
        let columns: HashMap<&Face, usize> = self
            .faces
            .iter()
            .enumerate()
            .map(|(i, face)| (face, i))
            .collect();

        self.with_table(|table| {
            let counts = table
                .iter()
                .map(|(_, row)| {
                    let mut counts = vec![0; self.faces.len()];
                    for face in row {
                        if let Some(&column) = columns.get(face) {
                            counts[column] += 1;
                        }
                    }
                    counts
                })
                .collect();
            FaceCounts::new(self.faces.clone(), counts)
        })
    }

    /// Rounds grouped by their outcomes regardless of which die showed what.
    pub fn combo_count(&self) -> MonteResult<OutcomeCounts> {
        self.with_table(|table| {
            group_rounds(table, |row| {
                let mut key = row.to_vec();
                key.sort();
                key
            })
        })
    }

    /// Rounds grouped by their outcomes in die order.
    pub fn perm_count(&self) -> MonteResult<OutcomeCounts> {
        self.with_table(|table| group_rounds(table, <[Face]>::to_vec))
    }

    fn with_table<T>(&self, f: impl FnOnce(&TrialTable) -> T) -> MonteResult<T> {
        let slot = self.table.upgrade().ok_or(MonteError::GameDropped)?;
        let guard = slot.borrow();
        let table = guard.as_ref().ok_or(MonteError::NoResults)?;
        Ok(f(table))
    }
}

fn is_jackpot(row: &[Face]) -> bool {
    row.windows(2).all(|pair| pair[0] == pair[1])
}

/// Count rounds per derived key in a single pass.
fn group_rounds(table: &TrialTable, key: impl Fn(&[Face]) -> Vec<Face>) -> OutcomeCounts {
    let mut groups: BTreeMap<Vec<Face>, usize> = BTreeMap::new();
    for (_, row) in table.iter() {
        *groups.entry(key(row)).or_default() += 1;
    }
    OutcomeCounts {
        entries: groups
            .into_iter()
            .map(|(outcome, count)| OutcomeCount { outcome, count })
            .collect(),
    }
}
