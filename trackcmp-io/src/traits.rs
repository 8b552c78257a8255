use trackcmp_core::models::Segment;

use crate::error::Result;

/// A source of segments on a linear coordinate axis.
///
/// Implementations drain their backing file completely and hand back the
/// segments in file order, which callers rely on being sorted by start and
/// non-overlapping.
pub trait SegmentRead {
    ///
    /// Read the full segment sequence from disk.
    ///
    fn read_segments(&self) -> Result<Vec<Segment>>;
}

/// A source of floating-point values indexed by position, starting at 0.
pub trait ValueRead {
    ///
    /// Read the full value sequence from disk.
    ///
    fn read_values(&self) -> Result<Vec<f64>>;
}
