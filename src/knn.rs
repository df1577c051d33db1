use log::debug;

use crate::data::{FeatureVector, Label, LabeledPoint, PredictedPoint};
use crate::distance::euclidean;
use crate::error::{KnnError, Result};
use crate::heap::{BoundedMaxHeap, Neighbor};

/// Finds the `k` training points closest to `query` under Euclidean distance
/// over the first `dim` components.
///
/// A single pass over the training set feeds a bounded max-heap of capacity
/// `k`, so the cost is O(n log k) time and O(k) space with no full sort. The
/// scan visits points in index order and a candidate only displaces the
/// current maximum when strictly closer, so exact distance ties at the
/// boundary resolve to the lowest-index point. The returned entries are the
/// `k` smallest distances observed, in unspecified order.
///
/// # Errors
///
/// - `InvalidK` if `k == 0`.
/// - `InsufficientTrainingData` if `k > train.len()`.
///
/// Both are checked before any scan work; on error no neighbors are produced.
pub fn select_k_nearest(
    train: &[LabeledPoint],
    query: &[f64],
    k: usize,
    dim: usize,
) -> Result<Vec<Neighbor>> {
    validate(k, train.len())?;
    Ok(scan(train, query, k, dim))
}

/// Reduces a neighbor set to a single predicted label by majority vote.
///
/// Each neighbor's label is resolved through its training index and summed as
/// a signed tally (`Zero` → −1, `One` → +1). A non-negative tally predicts
/// `One`, so an exact tie deliberately resolves to label 1.
pub fn majority_vote(neighbors: &[Neighbor], train: &[LabeledPoint]) -> Label {
    let tally: i64 = neighbors
        .iter()
        .map(|n| train[n.index].label.vote())
        .sum();
    if tally >= 0 {
        Label::One
    } else {
        Label::Zero
    }
}

/// A k-NN classifier over a fixed training set.
///
/// Construction validates the configuration once, fail-fast, so the
/// per-point prediction methods are infallible: an invalid `k` is a
/// configuration error, not something to rediscover on every test point.
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    k: usize,
    dim: usize,
    train: Vec<LabeledPoint>,
}

impl KnnClassifier {
    /// Builds a classifier that votes among `k` neighbors, measuring distance
    /// over the first `dim` feature components.
    ///
    /// # Errors
    ///
    /// - `InvalidK` if `k == 0`.
    /// - `InsufficientTrainingData` if `k > train.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use knn::{KnnClassifier, Label, LabeledPoint};
    ///
    /// let train = vec![
    ///     LabeledPoint::new(vec![0.0, 0.0], Label::Zero),
    ///     LabeledPoint::new(vec![1.0, 1.0], Label::One),
    /// ];
    /// let classifier = KnnClassifier::new(1, 2, train).unwrap();
    /// assert_eq!(classifier.predict(&[0.1, 0.1]), Label::Zero);
    /// ```
    pub fn new(k: usize, dim: usize, train: Vec<LabeledPoint>) -> Result<Self> {
        validate(k, train.len())?;
        Ok(Self { k, dim, train })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The training set, in insertion order. Neighbor indices resolve into
    /// this slice.
    pub fn train(&self) -> &[LabeledPoint] {
        &self.train
    }

    /// Predicts the label for a single query point.
    pub fn predict(&self, query: &[f64]) -> Label {
        let neighbors = scan(&self.train, query, self.k, self.dim);
        majority_vote(&neighbors, &self.train)
    }

    /// Classifies every test point, attaching the predicted label to its
    /// feature vector. Output order matches input order and each feature
    /// vector is carried through unmodified.
    pub fn classify_all(&self, test: Vec<FeatureVector>) -> Vec<PredictedPoint> {
        debug!(
            "classifying {} test points against {} training points (k = {})",
            test.len(),
            self.train.len(),
            self.k
        );
        test.into_iter()
            .map(|features| {
                let label = self.predict(&features);
                PredictedPoint::new(features, label)
            })
            .collect()
    }
}

fn validate(k: usize, available: usize) -> Result<()> {
    if k == 0 {
        return Err(KnnError::InvalidK);
    }
    if k > available {
        return Err(KnnError::InsufficientTrainingData { k, available });
    }
    Ok(())
}

// Single O(n) pass; preconditions already checked by the caller.
fn scan(train: &[LabeledPoint], query: &[f64], k: usize, dim: usize) -> Vec<Neighbor> {
    let mut heap = BoundedMaxHeap::new(k);
    for (index, point) in train.iter().enumerate() {
        let distance = euclidean(&point.features, query, dim);
        heap.offer(Neighbor::new(distance, index));
    }
    heap.into_entries()
}
