pub mod datasets;

pub use datasets::{
    train_val_test_split, train_val_test_split_with, AnnotatedDataset, DatasetSplit, SplitError,
    SplitOptions,
};
