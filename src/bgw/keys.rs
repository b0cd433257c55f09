use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, instrument, trace};

use crate::{
    CurvePoint, PairingBackend,
    bgw::powers::PowerSequence,
    errors::Error,
};

/// The full public output of setup.
///
/// This is the privileged view: it carries every power of `α` in both source
/// groups. Senders receive the [`BroadcastPublicKey`] derived from it and each
/// receiver its own [`AdvertiserPublicKey`].
///
/// # Fields
///
/// - `p`, `q`: Random generators of G1 and G2
/// - `p_powers`: `α^e · P` for `e ∈ [1, 2n] \ {n + 1}`
/// - `q_powers`: `α^e · Q` for `e ∈ [1, n]`, stored at position `e - 1`
/// - `v`: `γ · P`
#[derive(Debug)]
pub struct CompletePublicKey<B: PairingBackend> {
    pub p: B::G1,
    pub q: B::G2,
    pub p_powers: PowerSequence<B::G1>,
    pub q_powers: Vec<B::G2>,
    pub v: B::G1,
}

impl<B: PairingBackend> Clone for CompletePublicKey<B> {
    fn clone(&self) -> Self {
        Self {
            p: self.p,
            q: self.q,
            p_powers: self.p_powers.clone(),
            q_powers: self.q_powers.clone(),
            v: self.v,
        }
    }
}

impl<B: PairingBackend> CompletePublicKey<B> {
    /// Universe size `n`, as fixed by the power sequence.
    pub fn receivers(&self) -> usize {
        self.p_powers.receivers()
    }

    /// Returns `α^exponent · Q` for `exponent ∈ [1, n]`.
    pub fn q_power(&self, exponent: usize) -> Result<&B::G2, Error> {
        exponent
            .checked_sub(1)
            .and_then(|pos| self.q_powers.get(pos))
            .ok_or(Error::IndexOutOfRange {
                exponent,
                receivers: self.receivers(),
            })
    }

    /// The restricted view a sender needs.
    ///
    /// The pairing `e(P_n, Q_1)` that every session key is a power of is
    /// evaluated once here.
    pub fn broadcast_public_key(&self) -> Result<BroadcastPublicKey<B>, Error> {
        let q1 = *self.q_power(1)?;
        let p_n = self.p_powers.get(self.receivers())?;
        Ok(BroadcastPublicKey {
            p: self.p,
            p_powers: self.p_powers.clone(),
            q: self.q,
            q1,
            v: self.v,
            session_base: B::pairing(p_n, &q1),
        })
    }

    /// The restricted view receiver `index` needs for decryption.
    pub fn advertiser_public_key(&self, index: usize) -> Result<AdvertiserPublicKey<B>, Error> {
        if index == 0 || index > self.receivers() {
            return Err(Error::ReceiverOutOfRange {
                index,
                receivers: self.receivers(),
            });
        }
        Ok(AdvertiserPublicKey {
            index,
            q_i: *self.q_power(index)?,
            p_powers: self.p_powers.clone(),
        })
    }
}

/// Public key material for encryption.
///
/// # Fields
///
/// - `session_base`: Cached `e(P_n, Q_1)`; each session key is `session_base^k`
#[derive(Debug)]
pub struct BroadcastPublicKey<B: PairingBackend> {
    pub p: B::G1,
    pub p_powers: PowerSequence<B::G1>,
    pub q: B::G2,
    pub q1: B::G2,
    pub v: B::G1,
    pub session_base: B::Target,
}

impl<B: PairingBackend> Clone for BroadcastPublicKey<B> {
    fn clone(&self) -> Self {
        Self {
            p: self.p,
            p_powers: self.p_powers.clone(),
            q: self.q,
            q1: self.q1,
            v: self.v,
            session_base: self.session_base,
        }
    }
}

impl<B: PairingBackend> BroadcastPublicKey<B> {
    pub fn receivers(&self) -> usize {
        self.p_powers.receivers()
    }
}

/// Public key material receiver `index` decrypts with. Not secret.
#[derive(Debug)]
pub struct AdvertiserPublicKey<B: PairingBackend> {
    pub index: usize,
    pub q_i: B::G2,
    pub p_powers: PowerSequence<B::G1>,
}

impl<B: PairingBackend> Clone for AdvertiserPublicKey<B> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            q_i: self.q_i,
            p_powers: self.p_powers.clone(),
        }
    }
}

impl<B: PairingBackend> AdvertiserPublicKey<B> {
    pub fn receivers(&self) -> usize {
        self.p_powers.receivers()
    }
}

/// Secret key owned by a single receiver: `D_i = γ · α^i · P`.
///
/// # Security
///
/// The secret key must be kept confidential by its receiver. The scheme
/// stays secure for any subset even if every receiver outside it pools
/// their keys.
#[derive(Debug)]
pub struct AdvertiserSecretKey<B: PairingBackend> {
    pub index: usize,
    pub d_i: B::G1,
}

impl<B: PairingBackend> Clone for AdvertiserSecretKey<B> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            d_i: self.d_i,
        }
    }
}

/// Complete key material bundle from setup.
///
/// In a real deployment each receiver would only receive its own secret key
/// and advertiser public key, while senders receive the broadcast public key.
#[derive(Debug)]
pub struct KeyMaterial<B: PairingBackend> {
    pub public_key: CompletePublicKey<B>,
    /// Secret keys ordered by receiver, `secret_keys[i - 1]` belongs to receiver `i`.
    pub secret_keys: Vec<AdvertiserSecretKey<B>>,
}

impl<B: PairingBackend> KeyMaterial<B> {
    /// Derives all key material from fixed generators and exponents.
    ///
    /// This is the deterministic half of setup. It is exposed so the derivation
    /// can be checked in isolation from the randomness source; anyone holding
    /// `alpha` or `gamma` can decrypt every header, so callers outside tests
    /// should go through [`BroadcastEncryption::setup`](crate::BroadcastEncryption::setup).
    #[instrument(level = "debug", skip_all, fields(receivers = receivers))]
    pub fn derive_unsafe(
        receivers: usize,
        p: &B::G1,
        q: &B::G2,
        alpha: &B::Scalar,
        gamma: &B::Scalar,
    ) -> Result<Self, Error> {
        if receivers == 0 {
            return Err(Error::InvalidConfig(
                "need at least one receiver for broadcast encryption".into(),
            ));
        }

        let p_powers = PowerSequence::accumulate(p, alpha, receivers)?;

        let mut q_powers = Vec::with_capacity(receivers);
        let mut accumulator = *q;
        for _ in 0..receivers {
            accumulator = accumulator.mul_scalar(alpha);
            q_powers.push(accumulator);
        }

        let v = p.mul_scalar(gamma);

        // D_i reuses the stored P_i rather than recomputing α^i.
        let secret_keys: Vec<AdvertiserSecretKey<B>> = p_powers
            .lower()
            .par_iter()
            .enumerate()
            .map(|(pos, p_i)| {
                trace!(index = pos + 1, "deriving secret key");
                AdvertiserSecretKey {
                    index: pos + 1,
                    d_i: p_i.mul_scalar(gamma),
                }
            })
            .collect();

        debug!(
            g1_powers = p_powers.len(),
            g2_powers = q_powers.len(),
            "derived key material"
        );

        Ok(KeyMaterial {
            public_key: CompletePublicKey {
                p: *p,
                q: *q,
                p_powers,
                q_powers,
                v,
            },
            secret_keys,
        })
    }

    /// Returns the secret key of receiver `index`.
    pub fn secret_key(&self, index: usize) -> Result<&AdvertiserSecretKey<B>, Error> {
        index
            .checked_sub(1)
            .and_then(|pos| self.secret_keys.get(pos))
            .ok_or(Error::ReceiverOutOfRange {
                index,
                receivers: self.public_key.receivers(),
            })
    }
}
