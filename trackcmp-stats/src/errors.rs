use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackStatError {
    /// Paired-series operations require both sequences to run out together.
    #[error("sequences have unequal length")]
    LengthMismatch,
}
