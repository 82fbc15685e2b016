//! Unit conversions applied at the input boundary.
//!
//! Inside the crate every wavelength is in micrometers and every temperature
//! in degrees Celsius. Frequencies (GHz) and Kelvin temperatures are
//! converted here before reaching any model.

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// Kelvin/Celsius offset used by the dielectric fits.
///
/// The published models were calibrated with 273.16 (the triple point of
/// water) rather than the usual 273.15. Changing it shifts every
/// temperature-dependent coefficient by a hundredth of a degree, so it is
/// kept exactly.
pub const CELSIUS_OFFSET_K: f64 = 273.16;

/// Converts a frequency in GHz to a vacuum wavelength in micrometers.
pub fn wavelength_um_from_ghz(f_ghz: f64) -> f64 {
    SPEED_OF_LIGHT / f_ghz * 1e-3
}

/// Converts a vacuum wavelength in micrometers to a frequency in GHz.
pub fn ghz_from_wavelength_um(wl_um: f64) -> f64 {
    SPEED_OF_LIGHT / wl_um * 1e-3
}

pub fn celsius_from_kelvin(t_k: f64) -> f64 {
    t_k - CELSIUS_OFFSET_K
}

pub fn kelvin_from_celsius(t_c: f64) -> f64 {
    t_c + CELSIUS_OFFSET_K
}
