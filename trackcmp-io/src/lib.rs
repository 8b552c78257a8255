//! # Input/Output utilities for annotation track files.
//!
//! This crate knows how to turn a path on disk into a typed track: either a
//! sequence of half-open segments or a sequence of positional float values.
//! The supported formats form a closed set ([`TrackFormat`]); the extension
//! alone decides which parser runs, and every format also accepts a
//! gzip-compressed variant.

pub mod error;
pub mod formats;
pub mod segments;
pub mod tracks;
pub mod traits;
pub mod values;

// re-expose core functions
pub use error::*;
pub use formats::*;
pub use segments::*;
pub use tracks::*;
pub use traits::*;
pub use values::*;
