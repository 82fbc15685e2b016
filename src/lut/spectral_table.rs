//! Tabulated optical-constants lookup.
//!
//! A [`SpectralTable`] holds the (wavelength, n, k) rows of a measured
//! optical-constants compilation read from a whitespace-delimited text file
//! (one header row, then one row per wavelength, strictly increasing). The
//! interpolation law is a per-table strategy, because the shipped datasets
//! were digitised on different grids: the Hale & Querry water data is dense
//! enough for plain linear interpolation, while the Warren & Brandt ice data
//! spans decades in both wavelength and k and is interpolated in log space.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use num_complex::Complex64;

#[derive(Debug)]
pub enum TableError {
    Io(std::io::Error),
    /// A field that should be numeric failed to parse.
    Parse { line: usize, value: String },
    /// A data row had fewer columns than the declared layout.
    TooFewColumns { line: usize, found: usize },
    /// Wavelengths must be strictly increasing down the file.
    NotIncreasing { line: usize },
    /// Fewer than two data rows: no interval to interpolate over.
    TooShort,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(e) => write!(f, "I/O error: {}", e),
            TableError::Parse { line, value } => {
                write!(f, "line {}: cannot parse '{}' as a number", line, value)
            }
            TableError::TooFewColumns { line, found } => {
                write!(f, "line {}: expected at least 3 columns, found {}", line, found)
            }
            TableError::NotIncreasing { line } => {
                write!(f, "line {}: wavelengths must be strictly increasing", line)
            }
            TableError::TooShort => write!(f, "table needs at least two data rows"),
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> TableError {
        TableError::Io(err)
    }
}

/// Column layout of the data file. Both shipped compilations put wavelength
/// first but disagree on the order of n and k.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOrder {
    /// wavelength, n, k (Warren & Brandt ice file)
    WavelengthNK,
    /// wavelength, k, n (Hale & Querry water file)
    WavelengthKN,
}

/// Interpolation law applied inside a bracketing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// n and k linear in wavelength.
    Linear,
    /// n linear in log(wavelength); k log-log (interpolated in log(k)
    /// against log(wavelength), then exponentiated).
    LogWavelength,
}

#[derive(Debug, Clone, Copy)]
struct Row {
    wl: f64,
    n: f64,
    k: f64,
}

/// Immutable-after-load optical-constants table.
///
/// The file is read once at construction; [`SpectralTable::reload`] re-reads
/// it explicitly if the resource changed on disk. A loaded table is
/// read-only and safe to share between threads.
#[derive(Debug)]
pub struct SpectralTable {
    path: PathBuf,
    columns: ColumnOrder,
    interpolation: Interpolation,
    k_override: Option<f64>,
    rows: Vec<Row>,
}

impl SpectralTable {
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        columns: ColumnOrder,
        interpolation: Interpolation,
    ) -> Result<Self, TableError> {
        let path = path.as_ref().to_path_buf();
        let rows = read_rows(&path, columns)?;
        log::debug!("loaded {} rows from {}", rows.len(), path.display());
        Ok(SpectralTable {
            path,
            columns,
            interpolation,
            k_override: None,
            rows,
        })
    }

    /// Pins the returned k to a fixed value, ignoring the table's k column.
    ///
    /// The water model ships with k forced to 0.1 in the vis-ir regime; the
    /// override lives here so the lookup itself stays a single code path.
    pub fn with_k_override(mut self, k: f64) -> Self {
        self.k_override = Some(k);
        self
    }

    /// Re-reads the backing file. Replaces the rows only if the whole file
    /// loads cleanly.
    pub fn reload(&mut self) -> Result<(), TableError> {
        self.rows = read_rows(&self.path, self.columns)?;
        Ok(())
    }

    /// First and last tabulated wavelengths (um).
    pub fn wavelength_range(&self) -> (f64, f64) {
        (self.rows[0].wl, self.rows[self.rows.len() - 1].wl)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Interpolated complex refractive index `n - ik` at `wl_um`.
    ///
    /// A query below the first row or at/above the last row has no
    /// bracketing interval and returns `0 + 0i`. That silent degenerate
    /// result is the documented contract of the tabulated regime, not an
    /// error.
    pub fn lookup(&self, wl_um: f64) -> Complex64 {
        let (first, last) = self.wavelength_range();
        if wl_um < first || wl_um >= last {
            return Complex64::new(0.0, 0.0);
        }

        // rows[i].wl <= wl_um < rows[i + 1].wl
        let i = self.rows.partition_point(|r| r.wl <= wl_um) - 1;
        let lo = self.rows[i];
        let hi = self.rows[i + 1];

        let (n, k) = match self.interpolation {
            Interpolation::Linear => {
                let r = (wl_um - lo.wl) / (hi.wl - lo.wl);
                (lo.n + (hi.n - lo.n) * r, lo.k + (hi.k - lo.k) * r)
            }
            Interpolation::LogWavelength => {
                let r = (wl_um.ln() - lo.wl.ln()) / (hi.wl.ln() - lo.wl.ln());
                let n = lo.n + (hi.n - lo.n) * r;
                let k = (lo.k.ln() + (hi.k.ln() - lo.k.ln()) * r).exp();
                (n, k)
            }
        };

        let k = self.k_override.unwrap_or(k);
        Complex64::new(n, -k)
    }
}

fn read_rows(path: &Path, columns: ColumnOrder) -> Result<Vec<Row>, TableError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows: Vec<Row> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        // one-based for error messages
        let lineno = idx + 1;
        if idx == 0 {
            // header row
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 3 {
            return Err(TableError::TooFewColumns {
                line: lineno,
                found: fields.len(),
            });
        }

        let parse = |s: &str| -> Result<f64, TableError> {
            s.parse::<f64>().map_err(|_| TableError::Parse {
                line: lineno,
                value: s.to_string(),
            })
        };

        let wl = parse(fields[0])?;
        let (n, k) = match columns {
            ColumnOrder::WavelengthNK => (parse(fields[1])?, parse(fields[2])?),
            ColumnOrder::WavelengthKN => (parse(fields[2])?, parse(fields[1])?),
        };

        if let Some(prev) = rows.last()
            && wl <= prev.wl
        {
            return Err(TableError::NotIncreasing { line: lineno });
        }
        rows.push(Row { wl, n, k });
    }

    if rows.len() < 2 {
        return Err(TableError::TooShort);
    }

    Ok(rows)
}
