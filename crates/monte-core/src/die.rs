//! Weighted dice.
//!
//! A [`Die`] holds an ordered set of unique faces, each with a relative
//! weight. The face set is fixed at construction; weights can be changed at
//! any time and every draw uses the weights current at that moment.
//! [`DieHandle`] shares one die between several games.

use std::cell::{Ref, RefCell};
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::Serialize;

use crate::error::{MonteError, MonteResult};
use crate::face::{Face, IntoWeight};

/// Weight given to every face of a new die.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A die with unique faces and mutable, non-negative weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    faces: Vec<Face>,
    weights: Vec<f64>,
}

impl Die {
    /// Create a die from its faces. Every face starts with weight 1.0.
    pub fn new<I, F>(faces: I) -> MonteResult<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
        if faces.is_empty() {
            return Err(MonteError::EmptyFaceSet);
        }

        let mut seen = HashSet::with_capacity(faces.len());
        for face in &faces {
            if !seen.insert(face) {
                return Err(MonteError::DuplicateFace(face.clone()));
            }
        }

        let weights = vec![DEFAULT_WEIGHT; faces.len()];
        Ok(Self { faces, weights })
    }

    /// Faces in construction order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false: a die has at least one face.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns true if `face` is on this die.
    pub fn contains(&self, face: &Face) -> bool {
        self.position(face).is_some()
    }

    /// Current weight of `face`, or `None` if it is not on this die.
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.position(face).map(|i| self.weights[i])
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Set the weight of one face.
    ///
    /// The weight may be any number or a numeric string; it must come out
    /// finite and non-negative, and the die's total weight must stay finite.
    /// Other faces keep their weights.
    pub fn reweight(&mut self, face: impl Into<Face>, weight: impl IntoWeight) -> MonteResult<()> {
        let face = face.into();
        let Some(index) = self.position(&face) else {
            return Err(MonteError::UnknownFace(face));
        };

        let value = match weight.into_weight() {
            Ok(value) => value,
            Err(raw) => return Err(MonteError::InvalidWeight { face, value: raw }),
        };
        if !value.is_finite() || value < 0.0 {
            return Err(MonteError::InvalidWeight {
                face,
                value: value.to_string(),
            });
        }

        let total: f64 = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| if i == index { value } else { w })
            .sum();
        if !total.is_finite() {
            return Err(MonteError::InvalidWeight {
                face,
                value: value.to_string(),
            });
        }

        log::trace!("reweight face {face} to {value}");
        self.weights[index] = value;
        Ok(())
    }

    /// Probability of each face under the current weights, in face order.
    pub fn probabilities(&self) -> MonteResult<Vec<(Face, f64)>> {
        let total = self.usable_total()?;
        Ok(self
            .faces
            .iter()
            .zip(&self.weights)
            .map(|(face, w)| (face.clone(), w / total))
            .collect())
    }

    /// Draw `count` faces independently, with replacement.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> MonteResult<Vec<Face>> {
        if count < 1 {
            return Err(MonteError::InvalidArgument {
                name: "count",
                value: count,
            });
        }
        let dist = self.distribution()?;
        Ok((0..count).map(|_| dist.draw(rng)).collect())
    }

    /// Draw a single face.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> MonteResult<Face> {
        Ok(self.distribution()?.draw(rng))
    }

    /// Copy of the current face/weight table.
    pub fn snapshot(&self) -> DieState {
        DieState {
            entries: self
                .faces
                .iter()
                .zip(&self.weights)
                .map(|(face, &weight)| FaceWeight {
                    face: face.clone(),
                    weight,
                })
                .collect(),
        }
    }

    /// Returns true if both dice have the same faces, ignoring order.
    pub fn has_same_faces(&self, other: &Die) -> bool {
        self.face_set() == other.face_set()
    }

    /// Wrap this die in a shareable handle.
    pub fn into_shared(self) -> DieHandle {
        DieHandle::new(self)
    }

    pub(crate) fn face_set(&self) -> BTreeSet<&Face> {
        self.faces.iter().collect()
    }

    /// Face sampler built from the current weights.
    pub(crate) fn distribution(&self) -> MonteResult<FaceSampler<'_>> {
        self.usable_total()?;
        let index = WeightedIndex::new(&self.weights).map_err(|_| MonteError::DegenerateWeights)?;
        Ok(FaceSampler {
            faces: &self.faces,
            index,
        })
    }

    /// Total weight, if it is positive and finite.
    fn usable_total(&self) -> MonteResult<f64> {
        let total = self.total_weight();
        if total > 0.0 && total.is_finite() {
            Ok(total)
        } else {
            Err(MonteError::DegenerateWeights)
        }
    }

    fn position(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
}

/// Weighted index over a die's faces, fixed at the weights it was built from.
pub(crate) struct FaceSampler<'a> {
    faces: &'a [Face],
    index: WeightedIndex<f64>,
}

impl FaceSampler<'_> {
    /// Draw one face.
    pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Face {
        self.faces[self.index.sample(rng)].clone()
    }
}

/// One face and its weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceWeight {
    /// The face.
    pub face: Face,
    /// Its relative weight.
    pub weight: f64,
}

/// An owned copy of a die's weights, detached from the die.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DieState {
    /// Faces with their weights, in face order.
    pub entries: Vec<FaceWeight>,
}

impl DieState {
    /// Weight recorded for `face`.
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.entries.iter().find(|e| &e.face == face).map(|e| e.weight)
    }

    /// Faces in order.
    pub fn faces(&self) -> Vec<Face> {
        self.entries.iter().map(|e| e.face.clone()).collect()
    }

    /// Weights in face order.
    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.weight).collect()
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A shared handle to a [`Die`].
///
/// Clones point at the same die, so a reweight through one handle is seen by
/// every game holding another. Handles are single-threaded (`!Send`).
#[derive(Debug, Clone)]
pub struct DieHandle(Rc<RefCell<Die>>);

impl DieHandle {
    /// Wrap a die.
    pub fn new(die: Die) -> Self {
        Self(Rc::new(RefCell::new(die)))
    }

    /// Build a die from faces and wrap it.
    pub fn from_faces<I, F>(faces: I) -> MonteResult<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        Die::new(faces).map(Self::new)
    }

    /// Borrow the shared die.
    pub fn die(&self) -> Ref<'_, Die> {
        self.0.borrow()
    }

    /// Set the weight of one face on the shared die.
    pub fn reweight(&self, face: impl Into<Face>, weight: impl IntoWeight) -> MonteResult<()> {
        self.0.borrow_mut().reweight(face, weight)
    }

    /// Draw `count` faces from the shared die.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> MonteResult<Vec<Face>> {
        self.0.borrow().sample(count, rng)
    }

    /// Copy of the shared die's weights.
    pub fn snapshot(&self) -> DieState {
        self.0.borrow().snapshot()
    }

    /// Faces of the shared die, in construction order.
    pub fn faces(&self) -> Vec<Face> {
        self.0.borrow().faces().to_vec()
    }

    /// Returns true if both handles point at the same die.
    pub fn ptr_eq(&self, other: &DieHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Die> for DieHandle {
    fn from(die: Die) -> Self {
        Self::new(die)
    }
}
