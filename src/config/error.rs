use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    NonPositiveWavelength(f64),
    TemperatureBelowAbsoluteZero(f64),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveWavelength(wl) => {
                write!(f, "wavelength_um must be positive, got {}", wl)
            }
            ConfigError::TemperatureBelowAbsoluteZero(t) => {
                write!(f, "temperature_c cannot be below -273.16, got {}", t)
            }
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}
