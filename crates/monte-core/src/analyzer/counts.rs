//! Count tables produced by the analyzer.

use serde::Serialize;

use crate::face::Face;

/// How many dice showed each face, per round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceCounts {
    faces: Vec<Face>,
    counts: Vec<Vec<usize>>,
}

impl FaceCounts {
    pub(crate) fn new(faces: Vec<Face>, counts: Vec<Vec<usize>>) -> Self {
        Self { faces, counts }
    }

    /// Column labels: the shared face set, sorted.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of rounds (rows).
    pub fn rounds(&self) -> usize {
        self.counts.len()
    }

    /// `(rounds, faces)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.counts.len(), self.faces.len())
    }

    /// Counts for one round, 1-based, in column order.
    pub fn row(&self, round: usize) -> Option<&[usize]> {
        round
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .map(Vec::as_slice)
    }

    /// How many dice showed `face` in `round`.
    pub fn get(&self, round: usize, face: &Face) -> Option<usize> {
        let column = self.faces.iter().position(|f| f == face)?;
        self.row(round).map(|row| row[column])
    }

    /// Sum of each row; equal to the number of dice for every round.
    pub fn row_sums(&self) -> Vec<usize> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Total occurrences of each face over all rounds.
    pub fn totals(&self) -> Vec<(Face, usize)> {
        self.faces
            .iter()
            .enumerate()
            .map(|(column, face)| {
                let total = self.counts.iter().map(|row| row[column]).sum();
                (face.clone(), total)
            })
            .collect()
    }

    /// Iterate `(round, counts)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row.as_slice()))
    }
}

/// A distinct outcome tuple and the number of rounds that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    /// The outcome, one face per die.
    pub outcome: Vec<Face>,
    /// Number of rounds with this outcome.
    pub count: usize,
}

/// Rounds grouped by outcome, keys in ascending order.
///
/// Used for both combinations (sorted outcomes) and permutations (outcomes in
/// die order).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutcomeCounts {
    /// Distinct outcomes with their counts.
    pub entries: Vec<OutcomeCount>,
}

impl OutcomeCounts {
    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no outcomes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rounds that produced exactly `outcome`, or 0.
    pub fn count(&self, outcome: &[Face]) -> usize {
        self.entries
            .iter()
            .find(|e| e.outcome == outcome)
            .map_or(0, |e| e.count)
    }

    /// Sum of all counts; equal to the number of rounds.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The outcome seen most often; ties go to the smallest key.
    pub fn most_common(&self) -> Option<&OutcomeCount> {
        self.entries
            .iter()
            .rev()
            .max_by_key(|e| e.count)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> std::slice::Iter<'_, OutcomeCount> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_counts() -> FaceCounts {
        FaceCounts::new(
            vec![Face::from("A"), Face::from("B"), Face::from("C")],
            vec![vec![2, 0, 0], vec![1, 1, 0], vec![0, 1, 1]],
        )
    }

    #[test]
    fn face_counts_lookup() {
        let counts = sample_counts();
        assert_eq!(counts.shape(), (3, 3));
        assert_eq!(counts.get(1, &Face::from("A")), Some(2));
        assert_eq!(counts.get(3, &Face::from("C")), Some(1));
        assert_eq!(counts.get(4, &Face::from("A")), None);
        assert_eq!(counts.get(1, &Face::from("Z")), None);
        assert_eq!(counts.row(0), None);
    }

    #[test]
    fn face_counts_sums() {
        let counts = sample_counts();
        assert_eq!(counts.row_sums(), vec![2, 2, 2]);
        assert_eq!(
            counts.totals(),
            vec![
                (Face::from("A"), 3),
                (Face::from("B"), 2),
                (Face::from("C"), 1)
            ]
        );
    }

    #[test]
    fn outcome_counts_lookup() {
        let counts = OutcomeCounts {
            entries: vec![
                OutcomeCount {
                    outcome: vec![Face::from(1), Face::from(1)],
                    count: 3,
                },
                OutcomeCount {
                    outcome: vec![Face::from(1), Face::from(2)],
                    count: 3,
                },
                OutcomeCount {
                    outcome: vec![Face::from(2), Face::from(2)],
                    count: 1,
                },
            ],
        };
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.count(&[Face::from(1), Face::from(2)]), 3);
        assert_eq!(counts.count(&[Face::from(2), Face::from(1)]), 0);
        assert_eq!(
            counts.most_common().map(|e| e.outcome.clone()),
            Some(vec![Face::from(1), Face::from(1)])
        );
    }

    #[test]
    fn empty_outcome_counts() {
        let counts = OutcomeCounts::default();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert!(counts.most_common().is_none());
    }
}
