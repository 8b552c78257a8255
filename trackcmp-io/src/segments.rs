use std::io::BufRead;
use std::path::{Path, PathBuf};

use trackcmp_core::models::Segment;
use trackcmp_core::utils::get_dynamic_reader;

use crate::error::{Result, TrackIoError};
use crate::traits::SegmentRead;

/// Parser for `.s` segment tracks: two integers per line, `start end`,
/// half-open [start, end).
///
/// Lines are assumed sorted and non-overlapping; this is not verified.
pub struct SegFile {
    path: PathBuf,
}

impl SegFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        SegFile {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SegmentRead for SegFile {
    fn read_segments(&self) -> Result<Vec<Segment>> {
        let reader = get_dynamic_reader(&self.path)?;
        let mut segments: Vec<Segment> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 {
                continue;
            }

            segments.push(Segment {
                start: parse_coordinate(fields[0])?,
                end: parse_coordinate(fields[1])?,
            });
        }

        Ok(segments)
    }
}

/// BED-like parser: `chrom start end`, 0-based, half-open.
///
/// The chromosome column is read but ignored; trackcmp tracks live on a
/// single coordinate axis.
pub struct BedFile {
    path: PathBuf,
}

impl BedFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        BedFile {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SegmentRead for BedFile {
    fn read_segments(&self) -> Result<Vec<Segment>> {
        let reader = get_dynamic_reader(&self.path)?;
        let mut segments: Vec<Segment> = Vec::new();

        for line in reader.lines() {
            let line = line?;

            // browser/track lines show up in UCSC exports
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with("browser")
                || line.starts_with("track")
            {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                continue;
            }

            segments.push(Segment {
                start: parse_coordinate(fields[1])?,
                end: parse_coordinate(fields[2])?,
            });
        }

        Ok(segments)
    }
}

fn parse_coordinate(field: &str) -> Result<u32> {
    field
        .parse::<u32>()
        .map_err(|_| TrackIoError::CoordinateParse(field.to_string()))
}
