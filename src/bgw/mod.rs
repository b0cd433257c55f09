//! Broadcast encryption protocol implementation.
//!
//! A trusted setup fixes a universe of `n` receivers and hands each one a
//! secret key. A sender can then encrypt a session key to any subset `S` of
//! the universe with a constant-size [`Header`]; every receiver in `S`
//! recovers the same session key from its own keys and the header, while no
//! coalition of receivers outside `S` can.
//!
//! # Protocol Overview
//!
//! 1. **Setup** ([`BroadcastEncryption::setup`]): sample `P`, `Q`, `α`, `γ`, derive the
//!    power sequences, `V = γ·P` and one secret key `D_i = γ·α^i·P` per receiver.
//!
//! 2. **Encrypt** ([`BroadcastEncryption::encrypt`]): for a fresh `k`, output
//!    `K = e(P_n, Q_1)^k` and the header `(k·Q, k·(V + Σ_{j∈S} P_{n+1-j}))`.
//!
//! 3. **Decrypt** ([`BroadcastEncryption::decrypt`]): receiver `i` computes
//!    `e(C1, Q_i) - e(D_i + Σ_{j∈S, j≠i} P_{n+1-j+i}, C0)`, which equals `K`
//!    exactly when `i ∈ S`.
//!
//! Receivers are numbered from 1.

use core::fmt::Debug;

use rand_core::RngCore;

use crate::{BroadcastParameters, PairingBackend, errors::Error, errors::SubsetError};

mod header;
pub use header::{Header, SessionKey};

mod keys;
pub use keys::{
    AdvertiserPublicKey, AdvertiserSecretKey, BroadcastPublicKey, CompletePublicKey, KeyMaterial,
};

mod powers;
pub use powers::{Iter as PowerIter, PowerSequence};

mod scheme;
pub use scheme::BgwScheme;

/// High-level broadcast encryption scheme interface.
pub trait BroadcastEncryption<B: PairingBackend>: Debug + Send + Sync + 'static {
    /// Runs the trusted setup for `params.receivers` receivers.
    ///
    /// Consumes randomness for `P`, `Q`, `α` and `γ`. On entropy failure no
    /// key material is returned.
    fn setup<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &BroadcastParameters,
    ) -> Result<KeyMaterial<B>, Error>;

    /// Encrypts a fresh session key to `subset`.
    fn encrypt<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        public_key: &BroadcastPublicKey<B>,
        subset: &[usize],
    ) -> Result<(Header<B>, SessionKey<B>), Error>;

    /// Recovers the session key as receiver `secret_key.index`.
    ///
    /// Calling this for a receiver outside `subset` is not an error; the
    /// result simply differs from the session key.
    fn decrypt(
        &self,
        secret_key: &AdvertiserSecretKey<B>,
        subset: &[usize],
        header: &Header<B>,
        public_key: &AdvertiserPublicKey<B>,
    ) -> Result<SessionKey<B>, Error>;
}

/// Checks that `subset` is a non-empty set of receivers in `1..=receivers`.
pub fn validate_subset(receivers: usize, subset: &[usize]) -> Result<(), SubsetError> {
    if subset.is_empty() {
        return Err(SubsetError::Empty);
    }
    let mut seen = vec![false; receivers + 1];
    for &index in subset {
        if index == 0 || index > receivers {
            return Err(SubsetError::OutOfRange { index, receivers });
        }
        if seen[index] {
            return Err(SubsetError::Duplicate { index });
        }
        seen[index] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_proper_subsets() {
        assert_eq!(validate_subset(1, &[1]), Ok(()));
        assert_eq!(validate_subset(16, &[5, 1, 4]), Ok(()));
        assert_eq!(validate_subset(3, &[1, 2, 3]), Ok(()));
    }

    #[test]
    fn rejects_contract_violations() {
        assert_eq!(validate_subset(4, &[]), Err(SubsetError::Empty));
        assert_eq!(
            validate_subset(4, &[1, 0]),
            Err(SubsetError::OutOfRange {
                index: 0,
                receivers: 4
            })
        );
        assert_eq!(
            validate_subset(4, &[5]),
            Err(SubsetError::OutOfRange {
                index: 5,
                receivers: 4
            })
        );
        assert_eq!(
            validate_subset(4, &[2, 3, 2]),
            Err(SubsetError::Duplicate { index: 2 })
        );
    }
}
