use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use trackcmp_io::{Track, open_track};
use trackcmp_stats::{covered_mean, overlap_length, pearson_correlation};

/// The scalar a comparison produces: an integer for overlap length, a
/// float (possibly NaN) for the statistical operations.
#[derive(Serialize)]
#[serde(untagged)]
enum Scalar {
    Length(u64),
    Value(f64),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Length(v) => write!(f, "{}", v),
            Scalar::Value(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Serialize)]
struct CompareReport<'a> {
    operation: &'static str,
    file_x: &'a str,
    file_y: &'a str,
    result: Scalar,
}

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let file_x = matches
        .get_one::<String>("file_x")
        .expect("A path to the first track is required.");
    let file_y = matches
        .get_one::<String>("file_y")
        .expect("A path to the second track is required.");

    let genome_length: Option<u32> = match matches.get_one::<String>("genome-length") {
        Some(raw) => Some(
            raw.parse()
                .context("--genome-length must be a non-negative integer")?,
        ),
        None => None,
    };

    let track_x = open_track(file_x, genome_length)
        .with_context(|| format!("Failed to open track: {}", file_x))?;
    let track_y = open_track(file_y, genome_length)
        .with_context(|| format!("Failed to open track: {}", file_y))?;

    let (operation, result) = compare_tracks(track_x, track_y)?;

    let rendered = if matches.get_flag("json") {
        let report = CompareReport {
            operation,
            file_x: file_x.as_str(),
            file_y: file_y.as_str(),
            result,
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")?
    } else {
        result.to_string()
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            let mut file = File::create(Path::new(path))
                .with_context(|| format!("Failed to create output file: {}", path))?;
            writeln!(file, "{}", rendered)?;
            eprintln!("Output written to {}", path);
        }
        None => {
            let stdout = io::stdout();
            writeln!(stdout.lock(), "{}", rendered)?;
        }
    }

    Ok(())
}

/// Pick the operation from the kinds of the two tracks and run it.
///
/// Segment/segment compares coverage, value/value correlates, and a mixed
/// pair (in either order) averages the values under the segments.
fn compare_tracks(track_x: Track, track_y: Track) -> Result<(&'static str, Scalar)> {
    let outcome = match (track_x, track_y) {
        (Track::Segments(a), Track::Segments(b)) => (
            "overlap-length",
            Scalar::Length(overlap_length(a.read_segments()?, b.read_segments()?)),
        ),
        (Track::Values(x), Track::Values(y)) => (
            "pearson-correlation",
            Scalar::Value(pearson_correlation(x.read_values()?, y.read_values()?)?),
        ),
        (Track::Segments(segments), Track::Values(values))
        | (Track::Values(values), Track::Segments(segments)) => (
            "covered-mean",
            Scalar::Value(covered_mean(segments.read_segments()?, &values.read_values()?)),
        ),
    };

    Ok(outcome)
}
