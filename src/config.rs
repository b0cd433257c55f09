//! Configuration types for broadcast encryption parameters.
//!
//! This module provides the backend/curve selection and the validated
//! parameter set consumed by [`BroadcastEncryption::setup`](crate::BroadcastEncryption::setup).
//!
//! # Example
//!
//! ```rust
//! use bgw::{BackendConfig, BroadcastParameters};
//!
//! // 16 receivers on whichever backend this build was compiled with
//! let params = BroadcastParameters::new(16, BackendConfig::compiled()).expect("valid params");
//! assert_eq!(params.receivers, 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BackendError, Error};

/// Supported pairing-friendly elliptic curves.
///
/// - **BLS12-381**: A 381-bit curve providing ~128 bits of security. Supported by
///   both Arkworks and blstrs backends.
/// - **BN254**: A 254-bit curve providing ~100 bits of security. Supported only by
///   the Arkworks backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CurveId {
    /// BN254 curve (~100-bit security)
    Bn254,
    /// BLS12-381 curve (~128-bit security, recommended)
    Bls12_381,
}

/// Cryptographic backend implementations.
///
/// Backend support is controlled via Cargo features:
/// - `blst` (default): blstrs with BLS12-381
/// - `ark_bls12381`: Arkworks with BLS12-381
/// - `ark_bn254`: Arkworks with BN254
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BackendId {
    /// Arkworks backend (pure Rust, supports BLS12-381 and BN254)
    Arkworks,
    /// blstrs backend (optimized assembly, BLS12-381 only)
    Blst,
}

/// Backend and curve configuration.
///
/// Not all combinations are supported - use [`ensure_supported`](BackendConfig::ensure_supported)
/// to validate.
///
/// | Backend    | BLS12-381 | BN254 |
/// |------------|-----------|-------|
/// | Arkworks   | ✓         | ✓     |
/// | blst       | ✓         | ✗     |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// The cryptographic backend to use
    pub backend: BackendId,
    /// The pairing-friendly curve to use
    pub curve: CurveId,
}

impl BackendConfig {
    pub fn new(backend: BackendId, curve: CurveId) -> Self {
        Self { backend, curve }
    }

    /// The backend/curve pair provided by the enabled Cargo feature.
    pub fn compiled() -> Self {
        if cfg!(feature = "ark_bn254") {
            Self::new(BackendId::Arkworks, CurveId::Bn254)
        } else if cfg!(feature = "ark_bls12381") {
            Self::new(BackendId::Arkworks, CurveId::Bls12_381)
        } else {
            Self::new(BackendId::Blst, CurveId::Bls12_381)
        }
    }

    /// Validates that this backend/curve combination is supported.
    ///
    /// This checks both that the combination is valid (e.g., blst only supports
    /// BLS12-381) and that the required feature flag is enabled at compile time.
    ///
    /// ```rust
    /// use bgw::{BackendConfig, BackendId, CurveId};
    ///
    /// let config = BackendConfig::new(BackendId::Blst, CurveId::Bn254);
    /// assert!(config.ensure_supported().is_err());
    /// ```
    pub fn ensure_supported(&self) -> Result<(), BackendError> {
        match (self.backend, self.curve) {
            (BackendId::Arkworks, CurveId::Bls12_381) => {
                if cfg!(feature = "ark_bls12381") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bls12381` feature to use Arkworks BLS12-381",
                    ))
                }
            }
            (BackendId::Arkworks, CurveId::Bn254) => {
                if cfg!(feature = "ark_bn254") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bn254` feature to use Arkworks BN254",
                    ))
                }
            }
            (BackendId::Blst, CurveId::Bls12_381) => {
                if cfg!(feature = "blst") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `blst` feature to use the blstrs backend",
                    ))
                }
            }
            (BackendId::Blst, CurveId::Bn254) => Err(BackendError::UnsupportedCurve(
                "bn254 is not supported by the blstrs backend",
            )),
        }
    }
}

/// Parameters of one broadcast system.
///
/// # Constraints
///
/// - `receivers` (the universe size `n`) must be at least 1
/// - `2 * receivers` must fit in `usize`, since setup derives `2n - 1` powers
/// - `backend` must be a supported combination for this build
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BroadcastParameters {
    /// Size of the receiver universe
    pub receivers: usize,
    /// Backend and curve configuration
    pub backend: BackendConfig,
}

impl BroadcastParameters {
    pub fn new(receivers: usize, backend: BackendConfig) -> Result<Self, Error> {
        let params = Self { receivers, backend };
        params.validate()?;
        Ok(params)
    }

    /// Parameters for `receivers` on the compiled backend.
    pub fn for_receivers(receivers: usize) -> Result<Self, Error> {
        Self::new(receivers, BackendConfig::compiled())
    }

    /// Validates the parameters.
    ///
    /// ```rust
    /// use bgw::{BackendConfig, BroadcastParameters};
    ///
    /// let params = BroadcastParameters {
    ///     receivers: 0, // Invalid: empty universe
    ///     backend: BackendConfig::compiled(),
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        self.backend.ensure_supported().map_err(Error::Backend)?;
        if self.receivers == 0 {
            return Err(Error::InvalidConfig(
                "need at least one receiver for broadcast encryption".into(),
            ));
        }
        if self.receivers.checked_mul(2).is_none() {
            return Err(Error::InvalidConfig(
                "receiver count too large for the power sequence".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_backend_is_supported() {
        BackendConfig::compiled()
            .ensure_supported()
            .expect("compiled backend must be usable");
    }

    #[test]
    fn blst_rejects_bn254() {
        let config = BackendConfig::new(BackendId::Blst, CurveId::Bn254);
        assert!(matches!(
            config.ensure_supported(),
            Err(BackendError::UnsupportedCurve(_))
        ));
    }

    #[test]
    fn rejects_empty_universe() {
        let err = BroadcastParameters::for_receivers(0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_overflowing_universe() {
        let err = BroadcastParameters::for_receivers(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn parameters_roundtrip_through_json() {
        let params = BroadcastParameters::for_receivers(32).expect("params");
        let json = serde_json::to_string(&params).expect("serialize");
        let decoded: BroadcastParameters = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(params, decoded);
    }
}
