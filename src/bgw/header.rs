//! Header and session key structures.
//!
//! - [`Header`]: The per-encryption metadata sent alongside the payload
//! - [`SessionKey`]: The target group element sender and authorized receivers share
//!
//! The session key is meant to key a separate symmetric cipher for the real
//! payload; [`SessionKey::derive_symmetric_key`] turns it into 32 bytes for that.

use core::fmt;

use crate::{PairingBackend, TargetGroup, errors::Error};

/// Broadcast header: `C0 = k · Q` and `C1 = k · (V + Σ_{j∈S} P_{n+1-j})`.
#[derive(Debug)]
pub struct Header<B: PairingBackend> {
    pub c0: B::G2,
    pub c1: B::G1,
}

impl<B: PairingBackend> Clone for Header<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: PairingBackend> Copy for Header<B> {}

impl<B: PairingBackend> PartialEq for Header<B> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

/// Session key recovered identically by the sender and every receiver in `S`.
pub struct SessionKey<B: PairingBackend>(pub(crate) B::Target);

impl<B: PairingBackend> SessionKey<B> {
    pub fn as_target(&self) -> &B::Target {
        &self.0
    }

    pub fn into_target(self) -> B::Target {
        self.0
    }

    /// Canonical compressed encoding of the target group element.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(self.0.to_repr()?)
    }

    /// Derives a 32-byte symmetric key with BLAKE3 in key-derivation mode.
    ///
    /// `context` should be a hardcoded, globally unique string naming the
    /// application and purpose, e.g. `"acme-feed 2024 payload key"`.
    pub fn derive_symmetric_key(&self, context: &str) -> Result<[u8; 32], Error> {
        let bytes = self.to_bytes()?;
        Ok(blake3::derive_key(context, &bytes))
    }
}

impl<B: PairingBackend> Clone for SessionKey<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: PairingBackend> Copy for SessionKey<B> {}

impl<B: PairingBackend> PartialEq for SessionKey<B> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<B: PairingBackend> fmt::Debug for SessionKey<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey(..)")
    }
}
