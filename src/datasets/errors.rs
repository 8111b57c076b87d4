/// Errors produced while splitting a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitError {
    /// A split ratio fell outside `[0, 1]`.
    InvalidRatio { name: &'static str, value: f64 },
    /// The combined ratios claim more than the whole identifier list.
    RatioSumExceedsOne { sum: f64 },
    /// A selected identifier has no entry in the annotation mapping.
    MissingAnnotation(String),
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRatio { name, value } => {
                write!(f, "{value} is not a valid {name} ratio")
            }
            Self::RatioSumExceedsOne { sum } => {
                write!(f, "split ratios sum to {sum}, which exceeds 1")
            }
            Self::MissingAnnotation(id) => {
                write!(f, "image id {id} has no annotation entry")
            }
        }
    }
}

impl std::error::Error for SplitError {}
