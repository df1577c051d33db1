use std::fmt;

use log::debug;
use rand::Rng;

/// An ordered sequence of real-valued features. All vectors within one run
/// share the same dimensionality; this is a caller-enforced precondition,
/// not something the crate validates.
pub type FeatureVector = Vec<f64>;

/// A binary class label.
///
/// The `{0, 1}` invariant lives in the type: there is no way to construct an
/// out-of-range label. Majority voting treats `Zero` as −1 and `One` as +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Zero,
    One,
}

impl Label {
    /// Signed contribution of this label to a majority-vote tally.
    pub fn vote(self) -> i64 {
        match self {
            Label::Zero => -1,
            Label::One => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Zero => write!(f, "0"),
            Label::One => write!(f, "1"),
        }
    }
}

/// A feature vector with an attached binary label.
///
/// Training points carry their ground-truth label; predicted test points reuse
/// the same shape with the label produced by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub features: FeatureVector,
    pub label: Label,
}

impl LabeledPoint {
    pub fn new(features: FeatureVector, label: Label) -> Self {
        Self { features, label }
    }
}

/// A test point after classification: its original feature vector, unmodified,
/// plus the predicted label.
pub type PredictedPoint = LabeledPoint;

/// Generates `n` training points of dimensionality `dim`, each feature drawn
/// uniformly from `[0.0, 1.0)` and each label uniformly from `{0, 1}`.
///
/// Takes the RNG by argument so callers control seeding: the demo binary uses
/// an entropy-seeded generator, tests use an explicitly seeded one.
pub fn generate_training_set<R: Rng>(rng: &mut R, n: usize, dim: usize) -> Vec<LabeledPoint> {
    debug!("generating {} training points of dimensionality {}", n, dim);
    (0..n)
        .map(|_| {
            let features = generate_features(rng, dim);
            let label = if rng.gen_range(0..=1) == 0 {
                Label::Zero
            } else {
                Label::One
            };
            LabeledPoint::new(features, label)
        })
        .collect()
}

/// Generates `n` unlabeled test points of dimensionality `dim`, each feature
/// drawn uniformly from `[0.0, 1.0)`.
pub fn generate_test_set<R: Rng>(rng: &mut R, n: usize, dim: usize) -> Vec<FeatureVector> {
    debug!("generating {} test points of dimensionality {}", n, dim);
    (0..n).map(|_| generate_features(rng, dim)).collect()
}

fn generate_features<R: Rng>(rng: &mut R, dim: usize) -> FeatureVector {
    (0..dim).map(|_| rng.gen_range(0.0..1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_training_set_shape_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let train = generate_training_set(&mut rng, 20, 5);
        assert_eq!(train.len(), 20);
        for point in &train {
            assert_eq!(point.features.len(), 5);
            for &x in &point.features {
                assert!((0.0..1.0).contains(&x));
            }
        }
    }

    #[test]
    fn test_test_set_shape_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let test = generate_test_set(&mut rng, 7, 3);
        assert_eq!(test.len(), 7);
        for features in &test {
            assert_eq!(features.len(), 3);
            for &x in features {
                assert!((0.0..1.0).contains(&x));
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        let a = generate_training_set(&mut rng1, 10, 4);
        let b = generate_training_set(&mut rng2, 10, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_votes() {
        assert_eq!(Label::Zero.vote(), -1);
        assert_eq!(Label::One.vote(), 1);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Zero.to_string(), "0");
        assert_eq!(Label::One.to_string(), "1");
    }
}
