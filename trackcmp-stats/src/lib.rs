//! Statistics between pairs of genomic annotation tracks.
//!
//! The three operations here are the analysis engine of trackcmp:
//!
//! - [`overlap_length`]: coordinate units covered by both of two segment
//!   tracks, via a merge-style two-pointer sweep
//! - [`covered_mean`]: mean of a value track restricted to the positions a
//!   segment track covers, with an adaptive direct/prefix-sum strategy
//! - [`pearson_correlation`]: one-pass sample correlation between two
//!   value tracks
//!
//! All three consume their inputs in a single forward pass. NaN is a
//! legitimate return meaning "statistically undefined", never a failure;
//! the only error raised here is a length mismatch between correlated
//! series.

pub mod correlation;
pub mod coverage;
pub mod errors;
pub mod overlap;

// re-exports
pub use correlation::pearson_correlation;
pub use coverage::covered_mean;
pub use errors::TrackStatError;
pub use overlap::overlap_length;
