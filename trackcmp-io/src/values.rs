use std::io::{BufRead, Read};
use std::path::{Path, PathBuf};

use trackcmp_core::utils::get_dynamic_reader;

use crate::error::{Result, TrackIoError};
use crate::traits::ValueRead;

/// Parser for `.f` value tracks: one float per line.
pub struct FltFile {
    path: PathBuf,
}

impl FltFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FltFile {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ValueRead for FltFile {
    fn read_values(&self) -> Result<Vec<f64>> {
        let reader = get_dynamic_reader(&self.path)?;
        let mut values: Vec<f64> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let field = line.trim();
            if field.is_empty() || field.starts_with('#') {
                continue;
            }

            match field.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => return Err(TrackIoError::ValueParse(field.to_string())),
            }
        }

        Ok(values)
    }
}

/// CSV parser for value tracks.
///
/// Accepts comma, semicolon, or tab separated lists, or one value per line.
/// Non-numeric fields are ignored rather than rejected.
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CsvFile {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ValueRead for CsvFile {
    fn read_values(&self) -> Result<Vec<f64>> {
        let reader = get_dynamic_reader(&self.path)?;
        let mut values: Vec<f64> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            for field in line.split([',', ';', '\t']) {
                let field = field.trim();
                if field.is_empty() {
                    continue;
                }
                if let Ok(value) = field.parse::<f64>() {
                    values.push(value);
                }
            }
        }

        Ok(values)
    }
}

/// A constant value track over a given genome length.
///
/// The file holds a single value, written either bare (`3.14`) or as
/// `value=3.14`; the track repeats it once per position.
pub struct ConstFile {
    path: PathBuf,
    genome_length: u32,
}

impl ConstFile {
    pub fn new<P: AsRef<Path>>(path: P, genome_length: u32) -> Self {
        ConstFile {
            path: path.as_ref().to_path_buf(),
            genome_length,
        }
    }
}

impl ValueRead for ConstFile {
    fn read_values(&self) -> Result<Vec<f64>> {
        let mut reader = get_dynamic_reader(&self.path)?;
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut field = content.trim();
        if let Some((_, rhs)) = field.split_once('=') {
            field = rhs.trim();
        }

        let value = field
            .parse::<f64>()
            .map_err(|_| TrackIoError::ValueParse(field.to_string()))?;

        Ok(vec![value; self.genome_length as usize])
    }
}
