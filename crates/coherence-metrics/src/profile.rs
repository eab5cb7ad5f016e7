//! Backend profiles and the parameter sets they override.
//!
//! A profile is sparse: every field is optional and falls back to the
//! matching default on its own.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ProfileError, ProfileResult};

/// Sparse overrides for the heuristic scoring parameters.
///
/// Profile documents may contain other keys; they are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendProfile {
    /// Error rate per single-qubit gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_qubit_error: Option<f64>,
    /// Error rate per two-qubit gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_qubit_error: Option<f64>,
    /// Decoherence time, in layers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoherence_time: Option<f64>,
    /// Energy cost per gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_per_gate: Option<f64>,
    /// Energy cost per qubit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_per_qubit: Option<f64>,
}

impl BackendProfile {
    /// Parse a profile from YAML. JSON documents parse too.
    pub fn from_yaml_str(source: &str) -> ProfileResult<Self> {
        let profile: Self = serde_yaml_ng::from_str(source)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a YAML or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Check every supplied value is usable by the scoring formulas.
    pub fn validate(&self) -> ProfileResult<()> {
        for (field, value) in [
            ("single_qubit_error", self.single_qubit_error),
            ("two_qubit_error", self.two_qubit_error),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ProfileError::InvalidValue {
                        field,
                        value: v,
                        reason: "must be between 0 and 1",
                    });
                }
            }
        }

        if let Some(v) = self.decoherence_time {
            if !(v.is_finite() && v > 0.0) {
                return Err(ProfileError::InvalidValue {
                    field: "decoherence_time",
                    value: v,
                    reason: "must be positive",
                });
            }
        }

        for (field, value) in [
            ("energy_per_gate", self.energy_per_gate),
            ("energy_per_qubit", self.energy_per_qubit),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v >= 0.0) {
                    return Err(ProfileError::InvalidValue {
                        field,
                        value: v,
                        reason: "must be non-negative",
                    });
                }
            }
        }

        Ok(())
    }
}

/// Parameters of the fidelity estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FidelityParams {
    /// Error rate per single-qubit gate.
    pub single_qubit_error: f64,
    /// Error rate per two-qubit gate.
    pub two_qubit_error: f64,
    /// Decoherence time, in layers.
    pub decoherence_time: f64,
}

impl FidelityParams {
    /// Values used when no profile overrides them.
    pub const DEFAULT: Self = Self {
        single_qubit_error: 0.001,
        two_qubit_error: 0.01,
        decoherence_time: 50.0,
    };

    /// Merge a profile over the defaults, field by field.
    pub fn resolve(profile: Option<&BackendProfile>) -> Self {
        let Some(p) = profile else {
            return Self::DEFAULT;
        };
        Self {
            single_qubit_error: p
                .single_qubit_error
                .unwrap_or(Self::DEFAULT.single_qubit_error),
            two_qubit_error: p.two_qubit_error.unwrap_or(Self::DEFAULT.two_qubit_error),
            decoherence_time: p.decoherence_time.unwrap_or(Self::DEFAULT.decoherence_time),
        }
    }
}

impl Default for FidelityParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters of the tunable energy model used by E1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyParams {
    /// Energy cost per gate.
    pub energy_per_gate: f64,
    /// Energy cost per qubit.
    pub energy_per_qubit: f64,
}

impl EnergyParams {
    /// Values used when no profile overrides them.
    pub const DEFAULT: Self = Self {
        energy_per_gate: 1.0,
        energy_per_qubit: 0.1,
    };

    /// Merge a profile over the defaults, field by field.
    pub fn resolve(profile: Option<&BackendProfile>) -> Self {
        let Some(p) = profile else {
            return Self::DEFAULT;
        };
        Self {
            energy_per_gate: p.energy_per_gate.unwrap_or(Self::DEFAULT.energy_per_gate),
            energy_per_qubit: p.energy_per_qubit.unwrap_or(Self::DEFAULT.energy_per_qubit),
        }
    }
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
