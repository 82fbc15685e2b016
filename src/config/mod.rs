//! Run configuration: where the two optical-constants files live and which
//! defaults the front end falls back to when no wavelength or temperature
//! is given on the command line.

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub mod error;
pub use error::ConfigError;

use crate::units::CELSIUS_OFFSET_K;

/// Defaults match the original tooling: 30 mm wavelength (~10 GHz), 10 C.
const DEFAULT_WAVELENGTH_UM: f64 = 30.0e3;
const DEFAULT_TEMPERATURE_C: f64 = 10.0;
const DEFAULT_WATER_TABLE: &str = "data/WOP_1973_HaleQuerry_umkn.dat";
const DEFAULT_ICE_TABLE: &str = "data/IOP_2008_WarrenBrandt_umnk.dat";

#[derive(Debug, Clone)]
pub struct Config {
    water_table: PathBuf,
    ice_table: PathBuf,
    wavelength_um: f64,
    temperature_c: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            water_table: PathBuf::from(DEFAULT_WATER_TABLE),
            ice_table: PathBuf::from(DEFAULT_ICE_TABLE),
            wavelength_um: DEFAULT_WAVELENGTH_UM,
            temperature_c: DEFAULT_TEMPERATURE_C,
        }
    }
}

// Deserializes a Config, filling defaults for missing fields and rejecting
// physically impossible defaults up front. The core computations stay
// permissive; this boundary is the only place inputs are validated.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            water_table: Option<PathBuf>,
            ice_table: Option<PathBuf>,
            wavelength_um: Option<f64>,
            temperature_c: Option<f64>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;
        let defaults = Config::default();

        let wavelength_um = helper.wavelength_um.unwrap_or(defaults.wavelength_um);
        if wavelength_um <= 0.0 {
            return Err(D::Error::custom(ConfigError::NonPositiveWavelength(
                wavelength_um,
            )));
        }

        let temperature_c = helper.temperature_c.unwrap_or(defaults.temperature_c);
        if temperature_c < -CELSIUS_OFFSET_K {
            return Err(D::Error::custom(ConfigError::TemperatureBelowAbsoluteZero(
                temperature_c,
            )));
        }

        Ok(Config {
            water_table: helper.water_table.unwrap_or(defaults.water_table),
            ice_table: helper.ice_table.unwrap_or(defaults.ice_table),
            wavelength_um,
            temperature_c,
        })
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn water_table(&self) -> &Path {
        &self.water_table
    }

    pub fn ice_table(&self) -> &Path {
        &self.ice_table
    }

    pub fn wavelength_um(&self) -> f64 {
        self.wavelength_um
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();

        let config_data = r#"
    {
        "water_table": "tables/water.dat",
        "ice_table": "tables/ice.dat",
        "wavelength_um": 3000.0,
        "temperature_c": -5.0
    }
    "#;

        file.write_all(config_data.as_bytes()).unwrap();

        let config = Config::from_file(file_path).unwrap();

        assert_eq!(config.water_table(), Path::new("tables/water.dat"));
        assert_eq!(config.ice_table(), Path::new("tables/ice.dat"));
        assert_eq!(config.wavelength_um(), 3000.0);
        assert_eq!(config.temperature_c(), -5.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"{}").unwrap();

        let config = Config::from_file(file_path).unwrap();
        let defaults = Config::default();

        assert_eq!(config.wavelength_um(), defaults.wavelength_um());
        assert_eq!(config.temperature_c(), defaults.temperature_c());
        assert_eq!(config.water_table(), defaults.water_table());
        assert_eq!(config.ice_table(), defaults.ice_table());
    }

    #[test]
    fn test_rejects_non_positive_wavelength() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(br#"{"wavelength_um": -1.0}"#).unwrap();

        assert!(Config::from_file(file_path).is_err());
    }

    #[test]
    fn test_rejects_temperature_below_absolute_zero() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(br#"{"temperature_c": -300.0}"#).unwrap();

        assert!(Config::from_file(file_path).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_file("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
