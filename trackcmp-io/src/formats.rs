use std::ffi::OsStr;
use std::path::Path;
use std::str::FromStr;

use crate::error::TrackIoError;

/// What a parsed track yields: discrete segments or positional values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Segments,
    Values,
}

/// The closed set of track file formats trackcmp understands.
///
/// Each variant corresponds to one file extension; a trailing `.gz` is
/// transparent, so `signal.f.gz` is parsed as [`TrackFormat::Flt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    /// `.s` files: one `start end` pair per line, half-open.
    Seg,
    /// `.bed` files: BED-like, the chromosome column is ignored.
    Bed,
    /// `.f` files: one float per line.
    Flt,
    /// `.csv` files: delimiter-separated float values.
    Csv,
    /// `.const` files: a single value spread over a given genome length.
    Const,
}

impl FromStr for TrackFormat {
    type Err = TrackIoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s" => Ok(TrackFormat::Seg),
            "bed" => Ok(TrackFormat::Bed),
            "f" => Ok(TrackFormat::Flt),
            "csv" => Ok(TrackFormat::Csv),
            "const" => Ok(TrackFormat::Const),
            other => Err(TrackIoError::UnsupportedExtension(other.to_string())),
        }
    }
}

impl TrackFormat {
    ///
    /// Map a file path to its track format, by extension.
    ///
    /// A `.gz` suffix is stripped before mapping, so every format also
    /// accepts its gzip-compressed variant.
    ///
    pub fn from_path(path: &Path) -> Result<Self, TrackIoError> {
        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| TrackIoError::UnsupportedExtension(path.display().to_string()))?;

        let base = file_name.strip_suffix(".gz").unwrap_or(file_name);
        let ext = Path::new(base)
            .extension()
            .and_then(OsStr::to_str)
            .ok_or_else(|| TrackIoError::UnsupportedExtension(file_name.to_string()))?;

        ext.parse()
    }

    /// The kind of sequence this format produces.
    pub fn kind(&self) -> TrackKind {
        match self {
            TrackFormat::Seg | TrackFormat::Bed => TrackKind::Segments,
            TrackFormat::Flt | TrackFormat::Csv | TrackFormat::Const => TrackKind::Values,
        }
    }
}
