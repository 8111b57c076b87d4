pub mod dataset;
pub mod errors;
pub mod split;

pub use dataset::AnnotatedDataset;
pub use errors::SplitError;
pub use split::{
    train_val_test_split, train_val_test_split_with, DatasetSplit, SplitOptions, DEFAULT_SEED,
};
