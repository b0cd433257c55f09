//! # BGW: Collusion-Resistant Broadcast Encryption
//!
//! This crate implements the Boneh-Gentry-Waters public-key broadcast encryption
//! scheme over a bilinear pairing. A sender encrypts a session key to an
//! arbitrary subset `S` of `n` receivers; the header is two group elements no
//! matter how large `S` is, and receivers outside `S` learn nothing about the
//! session key even if all of them pool their secret keys.
//!
//! ## Architecture
//!
//! - **`arith`**: Trait abstractions over the pairing backend ([`FieldElement`],
//!   [`CurvePoint`], [`TargetGroup`], [`PairingBackend`]) plus entropy helpers.
//!
//! - **`bgw`**: The protocol. [`BroadcastEncryption`] is the scheme interface and
//!   [`BgwScheme`] its implementation; key views live in [`CompletePublicKey`],
//!   [`BroadcastPublicKey`], [`AdvertiserPublicKey`] and [`AdvertiserSecretKey`].
//!
//! - **`config`**: [`BroadcastParameters`], [`BackendConfig`], [`CurveId`] and
//!   [`BackendId`].
//!
//! - **`errors`**: [`Error`], [`SubsetError`] and [`BackendError`].
//!
//! ## Quick Example
//!
//! ```rust
//! use bgw::{BgwScheme, BroadcastEncryption, BroadcastParameters, PairingEngine};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), bgw::Error> {
//! let params = BroadcastParameters::for_receivers(16)?;
//! let mut rng = StdRng::from_entropy();
//! let scheme = BgwScheme::<PairingEngine>::new();
//!
//! // Trusted setup
//! let keys = scheme.setup(&mut rng, &params)?;
//! let sender_key = keys.public_key.broadcast_public_key()?;
//!
//! // Broadcast to receivers 1, 4 and 5
//! let subset = [1, 4, 5];
//! let (header, session) = scheme.encrypt(&mut rng, &sender_key, &subset)?;
//!
//! // Receiver 4 recovers the same session key
//! let receiver_key = keys.public_key.advertiser_public_key(4)?;
//! let recovered = scheme.decrypt(keys.secret_key(4)?, &subset, &header, &receiver_key)?;
//! assert_eq!(recovered, session);
//!
//! // Receiver 2 does not
//! let outsider_key = keys.public_key.advertiser_public_key(2)?;
//! let wrong = scheme.decrypt(keys.secret_key(2)?, &subset, &header, &outsider_key)?;
//! assert_ne!(wrong, session);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! Exactly one backend must be enabled:
//!
//! - **`blst`** (default): blstrs backend for BLS12-381
//! - **`ark_bls12381`**: Arkworks backend for BLS12-381
//! - **`ark_bn254`**: Arkworks backend for BN254
//!
//! ## Security Considerations
//!
//! - **Trusted Setup**: Setup samples `α` and `γ`; anyone who learns either can
//!   decrypt every header. They never leave [`BroadcastEncryption::setup`].
//! - **Session Keys**: The session key is a target group element. Use
//!   [`SessionKey::derive_symmetric_key`] to key a payload cipher.

#[cfg(not(any(feature = "blst", feature = "ark_bls12381", feature = "ark_bn254")))]
compile_error!("enable one of the `blst`, `ark_bls12381` or `ark_bn254` features");

#[cfg(any(
    all(feature = "blst", feature = "ark_bls12381"),
    all(feature = "blst", feature = "ark_bn254"),
    all(feature = "ark_bls12381", feature = "ark_bn254"),
))]
compile_error!("the `blst`, `ark_bls12381` and `ark_bn254` features are mutually exclusive");

mod arith;
mod bgw;
mod config;
mod errors;

pub use arith::*;
pub use bgw::*;
pub use config::*;
pub use errors::*;
