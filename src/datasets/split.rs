use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::{dataset::AnnotatedDataset, errors::SplitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSplit {
    Train,
    Val,
    Test,
}

impl DatasetSplit {
    /// Suffix appended to the source dataset's id. The mixed casing on the
    /// test suffix is intentional and kept for compatibility with existing
    /// dataset labels.
    pub fn id_suffix(self) -> &'static str {
        match self {
            Self::Train => "-TRAIN",
            Self::Val => "-VALID",
            Self::Test => "-Test",
        }
    }
}

/// Seed for the convenience entry point, so repeated runs over the same
/// identifier set produce the same split.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy)]
pub struct SplitOptions {
    pub shuffle: bool,
    /// Fraction of identifiers assigned to the validation set.
    pub validation_split: f64,
    /// Fraction of identifiers assigned to the test set.
    pub test_split: f64,
    /// Fraction of identifiers dropped from all three splits.
    pub remove: f64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            validation_split: 0.1,
            test_split: 0.1,
            remove: 0.5,
        }
    }
}

impl SplitOptions {
    fn validate(&self) -> Result<(), SplitError> {
        check_ratio("validation split", self.validation_split)?;
        check_ratio("test split", self.test_split)?;
        check_ratio("remove", self.remove)?;

        let sum = self.validation_split + self.test_split + self.remove;
        if sum > 1.0 + RATIO_EPS {
            return Err(SplitError::RatioSumExceedsOne { sum });
        }
        Ok(())
    }
}

// Tolerance for accumulated f64 error in ratio sums (0.1 + 0.2 + 0.7 > 1.0).
const RATIO_EPS: f64 = 1e-9;

fn check_ratio(name: &'static str, value: f64) -> Result<(), SplitError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SplitError::InvalidRatio { name, value });
    }
    Ok(())
}

/// Splits `dataset` into train, validation, and test datasets with disjoint
/// image id subsets, using a fixed-seed shuffle so the split is reproducible
/// across runs.
///
/// The `remove` fraction of identifiers is silently dropped from all three
/// splits, which is useful for working on a subsample of a large dataset.
pub fn train_val_test_split<A: Clone>(
    dataset: &AnnotatedDataset<A>,
    options: &SplitOptions,
) -> Result<
    (
        AnnotatedDataset<A>,
        AnnotatedDataset<A>,
        AnnotatedDataset<A>,
    ),
    SplitError,
> {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    train_val_test_split_with(dataset, options, &mut rng)
}

/// Like [`train_val_test_split`], but shuffles with a caller-provided RNG.
pub fn train_val_test_split_with<A: Clone, R: Rng>(
    dataset: &AnnotatedDataset<A>,
    options: &SplitOptions,
    rng: &mut R,
) -> Result<
    (
        AnnotatedDataset<A>,
        AnnotatedDataset<A>,
        AnnotatedDataset<A>,
    ),
    SplitError,
> {
    options.validate()?;

    let mut image_ids = dataset.get_image_ids().to_vec();
    if options.shuffle {
        // Canonical order first, so the shuffle is reproducible no matter how
        // the input list happened to be ordered.
        image_ids.sort();
        image_ids.shuffle(rng);
    }

    // The cut fractions keep the exact evaluation order of the defining
    // formulas; re-associating the sums shifts an index by one on common
    // ratios like 0.1/0.1/0.5.
    let n = image_ids.len();
    let i0 = cut_index(
        1.0 - (options.validation_split + options.test_split + options.remove),
        n,
    );
    let i1 = cut_index(1.0 - (options.validation_split + options.remove), n);
    let i2 = cut_index(
        1.0 - (options.validation_split + options.remove) + options.test_split,
        n,
    );

    let train_ids = image_ids[..i0].to_vec();
    let valid_ids = image_ids[i0..i1].to_vec();
    let test_ids = image_ids[i1..i2].to_vec();

    let train = dataset.subset(DatasetSplit::Train, train_ids)?;
    let valid = dataset.subset(DatasetSplit::Val, valid_ids)?;
    let test = dataset.subset(DatasetSplit::Test, test_ids)?;

    println!(
        "Num of instances for training set: {}, validation set: {}, and test set: {}",
        train.len(),
        valid.len(),
        test.len()
    );
    Ok((train, valid, test))
}

fn cut_index(fraction: f64, n: usize) -> usize {
    let i = (fraction.max(0.0) * n as f64).floor() as usize;
    i.min(n)
}
