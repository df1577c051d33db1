//! Exact k-nearest-neighbor classification for binary-labeled data.
//!
//! The core pipeline is a single O(n log k) scan per query: Euclidean
//! distances feed a bounded max-heap that retains the k closest training
//! points, and a signed-tally majority vote turns those neighbors into a
//! predicted label. Synthetic dataset generation for the demo binary lives in
//! [`data`]; the classifier itself works on any dataset meeting the
//! documented invariants.

pub mod data;
pub mod distance;
pub mod error;
pub mod heap;
pub mod knn;

pub use data::{
    generate_test_set, generate_training_set, FeatureVector, Label, LabeledPoint, PredictedPoint,
};
pub use distance::euclidean;
pub use error::{KnnError, Result};
pub use heap::{BoundedMaxHeap, Neighbor};
pub use knn::{majority_vote, select_k_nearest, KnnClassifier};
