use std::path::Path;

use crate::error::{Result, TrackIoError};
use crate::formats::{TrackFormat, TrackKind};
use crate::segments::{BedFile, SegFile};
use crate::traits::{SegmentRead, ValueRead};
use crate::values::{ConstFile, CsvFile, FltFile};

/// A track file opened behind the matching capability, ready to read.
pub enum Track {
    Segments(Box<dyn SegmentRead>),
    Values(Box<dyn ValueRead>),
}

impl Track {
    pub fn kind(&self) -> TrackKind {
        match self {
            Track::Segments(_) => TrackKind::Segments,
            Track::Values(_) => TrackKind::Values,
        }
    }
}

///
/// Open a track file, selecting the parser from the file extension.
///
/// # Arguments
///
/// - path: path to the track file
/// - genome_length: total number of positions, required only by `.const`
///   tracks
///
pub fn open_track<P: AsRef<Path>>(path: P, genome_length: Option<u32>) -> Result<Track> {
    let path = path.as_ref();

    let track = match TrackFormat::from_path(path)? {
        TrackFormat::Seg => Track::Segments(Box::new(SegFile::new(path))),
        TrackFormat::Bed => Track::Segments(Box::new(BedFile::new(path))),
        TrackFormat::Flt => Track::Values(Box::new(FltFile::new(path))),
        TrackFormat::Csv => Track::Values(Box::new(CsvFile::new(path))),
        TrackFormat::Const => {
            let length = genome_length.ok_or(TrackIoError::MissingGenomeLength)?;
            Track::Values(Box::new(ConstFile::new(path, length)))
        }
    };

    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use trackcmp_core::models::Segment;

    #[rstest]
    fn test_open_track_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();
        let seg_path = dir.path().join("a.s");
        std::fs::write(&seg_path, "0\t5\n").unwrap();

        let track = open_track(&seg_path, None).unwrap();
        assert_eq!(track.kind(), TrackKind::Segments);

        let Track::Segments(reader) = track else {
            panic!("expected a segment track");
        };
        assert_eq!(reader.read_segments().unwrap(), vec![Segment::new(0, 5)]);
    }

    #[rstest]
    fn test_const_track_requires_genome_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.const");
        std::fs::write(&path, "2.5\n").unwrap();

        let result = open_track(&path, None);
        assert!(matches!(result, Err(TrackIoError::MissingGenomeLength)));

        let Track::Values(reader) = open_track(&path, Some(3)).unwrap() else {
            panic!("expected a value track");
        };
        assert_eq!(reader.read_values().unwrap(), vec![2.5, 2.5, 2.5]);
    }
}
