//! Trial tables: the recorded outcome of every round of a game.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MonteError;
use crate::face::Face;

/// Outcomes of one run, one row per round and one column per die.
///
/// Rounds are numbered from 1; member positions from 0 in the order the dice
/// were given to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialTable {
    members: usize,
    rows: Vec<Vec<Face>>,
}

impl TrialTable {
    pub(crate) fn new(members: usize, rows: Vec<Vec<Face>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == members));
        Self { members, rows }
    }

    /// Number of rounds (rows).
    pub fn rounds(&self) -> usize {
        self.rows.len()
    }

    /// Number of dice (columns).
    pub fn members(&self) -> usize {
        self.members
    }

    /// `(rounds, members)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rounds(), self.members)
    }

    /// Outcomes of one round, 1-based.
    pub fn row(&self, round: usize) -> Option<&[Face]> {
        round
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    /// Outcome of one die in one round.
    pub fn get(&self, round: usize, member: usize) -> Option<&Face> {
        self.row(round).and_then(|row| row.get(member))
    }

    /// Every outcome of one die, in round order.
    pub fn column(&self, member: usize) -> Option<Vec<Face>> {
        if member >= self.members {
            return None;
        }
        Some(self.rows.iter().map(|row| row[member].clone()).collect())
    }

    /// Iterate `(round, outcomes)` pairs in round order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Face])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row.as_slice()))
    }

    /// Long form: one row per (round, member), round-major.
    pub fn to_narrow(&self) -> NarrowTable {
        let rows = self
            .iter()
            .flat_map(|(round, outcomes)| {
                outcomes
                    .iter()
                    .enumerate()
                    .map(move |(member, outcome)| NarrowRow {
                        round,
                        member,
                        outcome: outcome.clone(),
                    })
            })
            .collect();
        NarrowTable { rows }
    }
}

/// One cell of a trial table in long form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrowRow {
    /// Round number, from 1.
    pub round: usize,
    /// Die position, from 0.
    pub member: usize,
    /// The face rolled.
    pub outcome: Face,
}

/// A trial table flattened to one outcome column keyed by (round, member).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NarrowTable {
    /// Rows ordered by round, then member.
    pub rows: Vec<NarrowRow>,
}

impl NarrowTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, 1)`: the key columns are not counted.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), 1)
    }

    /// Outcome for a (round, member) key.
    pub fn get(&self, round: usize, member: usize) -> Option<&Face> {
        self.rows
            .iter()
            .find(|r| r.round == round && r.member == member)
            .map(|r| &r.outcome)
    }

    /// Iterate rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NarrowRow> {
        self.rows.iter()
    }
}

/// Layout of the results returned by [`Game::results`](crate::Game::results).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultForm {
    /// Rounds × dice.
    #[default]
    Wide,
    /// One row per (round, die).
    Narrow,
}

impl FromStr for ResultForm {
    type Err = MonteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wide" => Ok(Self::Wide),
            "narrow" => Ok(Self::Narrow),
            _ => Err(MonteError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ResultForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wide => write!(f, "wide"),
            Self::Narrow => write!(f, "narrow"),
        }
    }
}

/// A copy of a game's results in the requested layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Results {
    /// Rounds × dice.
    Wide(TrialTable),
    /// One row per (round, die).
    Narrow(NarrowTable),
}

impl Results {
    /// Table shape; for the narrow form only the outcome column is counted.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Wide(table) => table.shape(),
            Self::Narrow(table) => table.shape(),
        }
    }

    /// The wide table, if that is the layout.
    pub fn into_wide(self) -> Option<TrialTable> {
        match self {
            Self::Wide(table) => Some(table),
            Self::Narrow(_) => None,
        }
    }

    /// The narrow table, if that is the layout.
    pub fn into_narrow(self) -> Option<NarrowTable> {
        match self {
            Self::Wide(_) => None,
            Self::Narrow(table) => Some(table),
        }
    }
}
