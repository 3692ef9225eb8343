// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer configuration: the persisted longitude.
//!
//! The clock needs exactly one piece of observer state, the longitude, kept
//! in a small TOML file (`longitude = -72.1053`) that is read at session
//! start and rewritten by the explicit update operation. [`Longitude`]
//! validates its range at every boundary (file, prompt, serde), so the
//! calculation path only ever sees values in `(-180, 180]`.

use qtty::Degrees;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_PATH: &str = "starclock.toml";

/// Error type for all fallible configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read or written.
    #[error("configuration file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when the configuration file is not valid TOML.
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Returned when the configuration cannot be serialized.
    #[error("configuration serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Returned when a longitude string is not a decimal number.
    #[error("longitude is not a number: {input:?}")]
    InvalidNumber {
        /// The rejected input text.
        input: String,
    },

    /// Returned when a longitude falls outside the valid range.
    #[error("longitude {degrees} is out of range (-180, 180]")]
    OutOfRange {
        /// The rejected degree value.
        degrees: f64,
    },
}

// ═══════════════════════════════════════════════════════════════════════════
// Longitude
// ═══════════════════════════════════════════════════════════════════════════

/// Observer longitude in degrees, east positive, in `(-180, 180]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Longitude(Degrees);

impl Longitude {
    /// Longitude zero, the Greenwich meridian.
    pub const PRIME_MERIDIAN: Self = Self(Degrees::new(0.0));

    /// Validate a raw degree value.
    pub fn from_degrees(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && -180.0 < value && value <= 180.0 {
            Ok(Self(Degrees::new(value)))
        } else {
            Err(ConfigError::OutOfRange { degrees: value })
        }
    }

    /// The longitude as a [`Degrees`] quantity.
    #[inline]
    pub const fn degrees(&self) -> Degrees {
        self.0
    }

    /// The raw degree value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }
}

impl Default for Longitude {
    fn default() -> Self {
        Self::PRIME_MERIDIAN
    }
}

impl FromStr for Longitude {
    type Err = ConfigError;

    /// Parse decimal degrees, trimming surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed.parse().map_err(|_| ConfigError::InvalidNumber {
            input: trimmed.to_string(),
        })?;
        Self::from_degrees(value)
    }
}

impl std::fmt::Display for Longitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

impl Serialize for Longitude {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Longitude {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::from_degrees(value).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ObserverConfig — the TOML model
// ═══════════════════════════════════════════════════════════════════════════

/// Observer configuration file contents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Observer longitude, degrees east of Greenwich.
    pub longitude: Longitude,
}

impl ObserverConfig {
    /// Load the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.as_ref().display(), longitude = config.longitude.value(), "loaded observer configuration");
        Ok(config)
    }

    /// Load the configuration, falling back to defaults if the file does
    /// not exist yet. Read and parse failures still surface as errors.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            debug!(path = %path.as_ref().display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Write the configuration back to its TOML file.
    pub fn store<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string(self)?;
        fs::write(path.as_ref(), content)?;
        info!(path = %path.as_ref().display(), longitude = self.longitude.value(), "stored observer configuration");
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
longitude = -72.1053
"#;
        let config: ObserverConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.longitude.value(), -72.1053);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result = toml::from_str::<ObserverConfig>("");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_prime_meridian() {
        let config = ObserverConfig::default();
        assert_eq!(config.longitude, Longitude::PRIME_MERIDIAN);
        assert_eq!(config.longitude.value(), 0.0);
    }

    #[test]
    fn test_longitude_range() {
        assert!(Longitude::from_degrees(-72.1053).is_ok());
        assert!(Longitude::from_degrees(180.0).is_ok());
        assert!(Longitude::from_degrees(-179.999).is_ok());

        assert!(Longitude::from_degrees(-180.0).is_err());
        assert!(Longitude::from_degrees(180.001).is_err());
        assert!(Longitude::from_degrees(f64::NAN).is_err());
        assert!(Longitude::from_degrees(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_from_str() {
        let lon: Longitude = " -72.1053 ".parse().unwrap();
        assert_eq!(lon.value(), -72.1053);

        match "east-ish".parse::<Longitude>() {
            Err(ConfigError::InvalidNumber { input }) => assert_eq!(input, "east-ish"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
        match "200".parse::<Longitude>() {
            Err(ConfigError::OutOfRange { degrees }) => assert_eq!(degrees, 200.0),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_longitude_serde_roundtrip() {
        let lon = Longitude::from_degrees(-72.1053).unwrap();
        let json = serde_json::to_string(&lon).unwrap();
        assert_eq!(json, "-72.1053");
        let back: Longitude = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lon);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Longitude>("250.0").is_err());
        assert!(toml::from_str::<ObserverConfig>("longitude = -180.0").is_err());
    }

    #[test]
    fn test_config_toml_shape() {
        let config = ObserverConfig {
            longitude: Longitude::from_degrees(-72.1053).unwrap(),
        };
        let toml = toml::to_string(&config).unwrap();
        assert_eq!(toml.trim(), "longitude = -72.1053");
    }

    #[test]
    fn test_error_messages() {
        let e = ConfigError::OutOfRange { degrees: 200.0 };
        assert_eq!(e.to_string(), "longitude 200 is out of range (-180, 180]");

        let e = ConfigError::InvalidNumber {
            input: "east-ish".to_string(),
        };
        assert_eq!(e.to_string(), "longitude is not a number: \"east-ish\"");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ConfigError>();
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ConfigError>();
    }
}
