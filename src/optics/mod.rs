//! Refractive-index computation: regime dispatch over the tabulated vis-ir
//! optical constants and the microwave permittivity models.
//!
//! The two regimes share nothing but the output type, so the split is a
//! plain wavelength threshold rather than a trait hierarchy: below
//! [`constants::VISIR_MAX_WAVELENGTH_UM`] the measured compilations are
//! interpolated, at or above it the empirical permittivity fits are
//! evaluated and converted through the principal complex square root.

pub mod constants;
pub mod microwave;

pub use constants::VISIR_MAX_WAVELENGTH_UM;
pub use microwave::{ice_permittivity, water_permittivity};

use std::fmt::Display;
use std::path::Path;

use num_complex::Complex64;

use crate::config::Config;
use crate::lut::{ColumnOrder, Interpolation, SpectralTable, TableError};

/// In the vis-ir regime the shipped water table has its k column pinned to
/// this value. Deliberate model policy, not an interpolation artifact.
const WATER_VISIR_K: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substance {
    Water,
    Ice,
}

impl Display for Substance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Substance::Water => write!(f, "water"),
            Substance::Ice => write!(f, "ice"),
        }
    }
}

/// Refractive-index model holding the two vis-ir tables.
///
/// The tables are loaded once at construction and never mutated, so a model
/// can be shared freely between call sites. The microwave branch needs no
/// state at all.
#[derive(Debug)]
pub struct RefractiveModel {
    water_table: SpectralTable,
    ice_table: SpectralTable,
}

impl RefractiveModel {
    /// File name of the Hale & Querry (1973) water compilation
    /// (columns: wavelength, k, n).
    pub const WATER_TABLE_FILE: &'static str = "WOP_1973_HaleQuerry_umkn.dat";

    /// File name of the Warren & Brandt (2008) ice compilation
    /// (columns: wavelength, n, k).
    pub const ICE_TABLE_FILE: &'static str = "IOP_2008_WarrenBrandt_umnk.dat";

    pub fn from_config(config: &Config) -> Result<Self, TableError> {
        Self::from_files(config.water_table(), config.ice_table())
    }

    /// Loads both compilations from their conventional file names under
    /// `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, TableError> {
        let dir = dir.as_ref();
        Self::from_files(
            dir.join(Self::WATER_TABLE_FILE),
            dir.join(Self::ICE_TABLE_FILE),
        )
    }

    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        water_table: P,
        ice_table: Q,
    ) -> Result<Self, TableError> {
        // Hale & Querry is dense enough for linear interpolation; Warren &
        // Brandt spans decades in wavelength and k, so it interpolates in
        // log space.
        let water_table = SpectralTable::from_file(
            water_table,
            ColumnOrder::WavelengthKN,
            Interpolation::Linear,
        )?
        .with_k_override(WATER_VISIR_K);
        let ice_table = SpectralTable::from_file(
            ice_table,
            ColumnOrder::WavelengthNK,
            Interpolation::LogWavelength,
        )?;
        Ok(RefractiveModel {
            water_table,
            ice_table,
        })
    }

    /// Complex refractive index `m = n - ik` at `wl_um` micrometers and
    /// `temp_c` degrees Celsius.
    ///
    /// Below 100 um the tabulated optical constants are used and `temp_c`
    /// is ignored: the compilations are only valid near 25 C for water and
    /// -7 C for ice. At or above 100 um the microwave permittivity is
    /// evaluated at `temp_c` and converted with the principal square root,
    /// so the returned real part is non-negative.
    ///
    /// A vis-ir query outside the tabulated range returns `0 + 0i` (see
    /// [`SpectralTable::lookup`]).
    pub fn index(&self, wl_um: f64, temp_c: f64, substance: Substance) -> Complex64 {
        if wl_um < VISIR_MAX_WAVELENGTH_UM {
            log::trace!("{substance} at {wl_um} um: tabulated vis-ir regime");
            match substance {
                Substance::Water => self.water_table.lookup(wl_um),
                Substance::Ice => self.ice_table.lookup(wl_um),
            }
        } else {
            log::trace!("{substance} at {wl_um} um: microwave regime");
            let eps = match substance {
                Substance::Water => microwave::water_permittivity(wl_um, temp_c),
                Substance::Ice => microwave::ice_permittivity(wl_um, temp_c),
            };
            eps.sqrt()
        }
    }
}
