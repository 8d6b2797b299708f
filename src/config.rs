use serde_json::Value;
use tracing::warn;

use crate::Error;

const KNOWN_KEYS: [&str; 6] = ["nblock", "nstep", "r_cut", "dt", "temperature", "gamma"];

/// Run parameters, immutable for the run lifetime.
///
/// Parsed from a JSON object of key-value pairs; every key has a default and
/// a fixed type. Integer-valued keys reject real numbers and vice versa,
/// matching the defaults' types; unknown keys are warned about but ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunParameters {
    /// Number of blocks
    pub nblock: usize,
    /// Number of steps per block
    pub nstep: usize,
    /// Potential cutoff distance
    pub r_cut: f64,
    /// Timestep
    pub dt: f64,
    /// Specified temperature
    pub temperature: f64,
    /// Friction coefficient
    pub gamma: f64,
}
impl Default for RunParameters {
    fn default() -> Self {
        Self {
            nblock: 10,
            nstep: 1000,
            r_cut: 2.5,
            dt: 0.005,
            temperature: 1.0,
            gamma: 1.0,
        }
    }
}
impl RunParameters {
    /// Parse from JSON text; `"{}"` accepts all defaults
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::Config(format!("invalid JSON: {}", e)))?;
        let map = value
            .as_object()
            .ok_or_else(|| Error::Config(String::from("parameters should be a JSON object")))?;

        let mut params = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "nblock" => params.nblock = as_count(key, value)?,
                "nstep" => params.nstep = as_count(key, value)?,
                "r_cut" => params.r_cut = as_real(key, value)?,
                "dt" => params.dt = as_real(key, value)?,
                "temperature" => params.temperature = as_real(key, value)?,
                "gamma" => params.gamma = as_real(key, value)?,
                _ => warn!("{} not in {:?}", key, KNOWN_KEYS),
            }
        }
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), Error> {
        let positive = [
            ("r_cut", self.r_cut),
            ("dt", self.dt),
            ("temperature", self.temperature),
        ];
        for (key, value) in positive {
            if value <= 0.0 {
                return Err(Error::Config(format!(
                    "{} should be positive, found {}",
                    key, value
                )));
            }
        }
        if self.gamma < 0.0 {
            return Err(Error::Config(format!(
                "gamma should be non-negative, found {}",
                self.gamma
            )));
        }
        if self.nblock == 0 || self.nstep == 0 {
            return Err(Error::Config(String::from(
                "nblock and nstep should be at least 1",
            )));
        }
        Ok(())
    }
}

fn as_count(key: &str, value: &Value) -> Result<usize, Error> {
    value
        .as_u64()
        .map(|v| v as usize)
        .ok_or_else(|| Error::Config(format!("{} has the wrong type", key)))
}

// The integer/real distinction is deliberate: 2 is not accepted where the
// default is 2.5, mirroring the type check against defaults
fn as_real(key: &str, value: &Value) -> Result<f64, Error> {
    if value.is_f64() {
        Ok(value.as_f64().unwrap_or_default())
    } else {
        Err(Error::Config(format!("{} has the wrong type", key)))
    }
}
