use core::marker::PhantomData;

use rand_core::RngCore;
use tracing::{debug, info, instrument};

use crate::{
    AdvertiserPublicKey, AdvertiserSecretKey, BroadcastEncryption, BroadcastParameters,
    BroadcastPublicKey, Header, KeyMaterial, PairingBackend, SessionKey, TargetGroup,
    arith::{CurvePoint, sample_nonzero_scalar, sample_point, seeded_rng},
    bgw::validate_subset,
    errors::Error,
};

/// The Boneh-Gentry-Waters broadcast encryption scheme.
#[derive(Debug)]
pub struct BgwScheme<B: PairingBackend> {
    _phantom: PhantomData<B>,
}

impl<B: PairingBackend> BgwScheme<B> {
    /// Creates a new scheme instance.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<B: PairingBackend> Default for BgwScheme<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PairingBackend> BroadcastEncryption<B> for BgwScheme<B> {
    #[instrument(level = "info", skip_all, fields(receivers = params.receivers))]
    fn setup<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &BroadcastParameters,
    ) -> Result<KeyMaterial<B>, Error> {
        params.validate()?;

        let mut rng = seeded_rng(rng)?;
        let (_, p) = sample_point::<B::Scalar, B::G1, _>(&mut rng);
        let (_, q) = sample_point::<B::Scalar, B::G2, _>(&mut rng);
        let alpha: B::Scalar = sample_nonzero_scalar(&mut rng);
        let gamma: B::Scalar = sample_nonzero_scalar(&mut rng);

        let keys = KeyMaterial::derive_unsafe(params.receivers, &p, &q, &alpha, &gamma)?;
        info!(
            receivers = params.receivers,
            g1_powers = keys.public_key.p_powers.len(),
            "broadcast setup complete"
        );
        Ok(keys)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(receivers = public_key.receivers(), subset_len = subset.len())
    )]
    fn encrypt<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        public_key: &BroadcastPublicKey<B>,
        subset: &[usize],
    ) -> Result<(Header<B>, SessionKey<B>), Error> {
        let n = public_key.receivers();
        validate_subset(n, subset)?;

        let mut rng = seeded_rng(rng)?;
        let k: B::Scalar = sample_nonzero_scalar(&mut rng);

        // K = e(P_n, Q_1)^k = e(P, Q)^{k·α^{n+1}}
        let session = public_key.session_base.mul_scalar(&k);

        // V + Σ_{j∈S} P_{n+1-j}
        let mut body = public_key.v;
        for &j in subset {
            body = body.add(public_key.p_powers.get(n + 1 - j)?);
        }

        let header = Header {
            c0: public_key.q.mul_scalar(&k),
            c1: body.mul_scalar(&k),
        };
        debug!("header built");

        Ok((header, SessionKey(session)))
    }

    #[instrument(level = "trace", skip_all, fields(receiver = secret_key.index))]
    fn decrypt(
        &self,
        secret_key: &AdvertiserSecretKey<B>,
        subset: &[usize],
        header: &Header<B>,
        public_key: &AdvertiserPublicKey<B>,
    ) -> Result<SessionKey<B>, Error> {
        if secret_key.index != public_key.index {
            return Err(Error::KeyMismatch {
                secret: secret_key.index,
                public: public_key.index,
            });
        }

        let n = public_key.receivers();
        let i = public_key.index;
        if i == 0 || i > n {
            return Err(Error::ReceiverOutOfRange {
                index: i,
                receivers: n,
            });
        }
        validate_subset(n, subset)?;

        let numerator = B::pairing(&header.c1, &public_key.q_i);

        // D_i + Σ_{j∈S, j≠i} P_{n+1-j+i}; j ≠ i keeps the exponent off n + 1.
        let mut val = secret_key.d_i;
        for &j in subset.iter().filter(|&&j| j != i) {
            val = val.add(public_key.p_powers.get(n + 1 - j + i)?);
        }
        let denominator = B::pairing(&val, &header.c0);

        Ok(SessionKey(numerator.combine(&denominator.negate())))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rand_core::Error as RandError;

    use super::*;
    use crate::{PairingEngine, SubsetError};

    type Scheme = BgwScheme<PairingEngine>;

    fn setup(n: usize, seed: u64) -> KeyMaterial<PairingEngine> {
        let params = BroadcastParameters::for_receivers(n).expect("params");
        let mut rng = StdRng::seed_from_u64(seed);
        Scheme::new().setup(&mut rng, &params).expect("setup")
    }

    fn decrypt_as(
        keys: &KeyMaterial<PairingEngine>,
        index: usize,
        subset: &[usize],
        header: &Header<PairingEngine>,
    ) -> SessionKey<PairingEngine> {
        let sk = keys.secret_key(index).expect("secret key");
        let apk = keys
            .public_key
            .advertiser_public_key(index)
            .expect("advertiser key");
        Scheme::new()
            .decrypt(sk, subset, header, &apk)
            .expect("decrypt")
    }

    fn nonempty_subsets(n: usize) -> Vec<Vec<usize>> {
        (1u32..(1 << n))
            .map(|mask| (1..=n).filter(|i| mask & (1 << (i - 1)) != 0).collect())
            .collect()
    }

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), RandError> {
            Err(RandError::new("no entropy available"))
        }
    }

    #[test]
    fn every_member_recovers_every_subset_key() {
        let scheme = Scheme::new();
        let mut rng = StdRng::seed_from_u64(1);
        for n in 1..=3 {
            let keys = setup(n, 100 + n as u64);
            let bpk = keys.public_key.broadcast_public_key().expect("bpk");
            for subset in nonempty_subsets(n) {
                let (header, session) = scheme.encrypt(&mut rng, &bpk, &subset).expect("encrypt");
                for i in 1..=n {
                    let recovered = decrypt_as(&keys, i, &subset, &header);
                    if subset.contains(&i) {
                        assert_eq!(recovered, session, "n = {n}, S = {subset:?}, i = {i}");
                    } else {
                        assert_ne!(recovered, session, "n = {n}, S = {subset:?}, i = {i}");
                    }
                }
            }
        }
    }

    #[test]
    fn single_receiver_universe() {
        let keys = setup(1, 7);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let mut rng = StdRng::seed_from_u64(8);
        let (header, session) = Scheme::new().encrypt(&mut rng, &bpk, &[1]).expect("encrypt");

        let recovered = decrypt_as(&keys, 1, &[1], &header);
        assert_eq!(recovered, session);
        assert_eq!(
            recovered.to_bytes().expect("encode"),
            session.to_bytes().expect("encode")
        );
    }

    #[test]
    fn sixteen_receivers_sparse_subset() {
        let keys = setup(16, 42);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let subset = [1usize, 4, 5];
        let mut rng = StdRng::seed_from_u64(43);
        let (header, session) = Scheme::new()
            .encrypt(&mut rng, &bpk, &subset)
            .expect("encrypt");

        for i in subset {
            assert_eq!(decrypt_as(&keys, i, &subset, &header), session);
        }
        assert_ne!(decrypt_as(&keys, 2, &subset, &header), session);
        assert_ne!(decrypt_as(&keys, 16, &subset, &header), session);
    }

    #[test]
    fn outsiders_only_ever_see_the_identity() {
        let keys = setup(8, 5);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let scheme = Scheme::new();
        let mut rng = StdRng::seed_from_u64(6);
        let identity = <<PairingEngine as PairingBackend>::Target as TargetGroup>::identity();

        for subset in [vec![1usize, 2, 3], vec![8], vec![2, 4, 6, 8]] {
            let (header, session) = scheme.encrypt(&mut rng, &bpk, &subset).expect("encrypt");
            assert_ne!(*session.as_target(), identity);
            for i in (1..=8).filter(|i| !subset.contains(i)) {
                let recovered = decrypt_as(&keys, i, &subset, &header);
                assert_eq!(*recovered.as_target(), identity);
                assert_ne!(
                    recovered.to_bytes().expect("outsider key encodes"),
                    session.to_bytes().expect("encode")
                );
            }
        }
    }

    #[test]
    fn fresh_sessions_differ() {
        let keys = setup(4, 11);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let scheme = Scheme::new();
        let mut rng = StdRng::seed_from_u64(12);
        let (h1, k1) = scheme.encrypt(&mut rng, &bpk, &[1, 2]).expect("encrypt");
        let (h2, k2) = scheme.encrypt(&mut rng, &bpk, &[1, 2]).expect("encrypt");
        assert_ne!(h1, h2);
        assert_ne!(k1, k2);
    }

    #[test]
    fn invalid_subsets_are_rejected() {
        let keys = setup(4, 21);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let scheme = Scheme::new();
        let mut rng = StdRng::seed_from_u64(22);

        let cases: [(&[usize], SubsetError); 4] = [
            (&[], SubsetError::Empty),
            (
                &[0, 1],
                SubsetError::OutOfRange {
                    index: 0,
                    receivers: 4,
                },
            ),
            (
                &[5],
                SubsetError::OutOfRange {
                    index: 5,
                    receivers: 4,
                },
            ),
            (&[3, 3], SubsetError::Duplicate { index: 3 }),
        ];
        for (subset, expected) in cases {
            match scheme.encrypt(&mut rng, &bpk, subset) {
                Err(Error::InvalidSubset(err)) => assert_eq!(err, expected),
                other => panic!("expected subset error for {subset:?}, got {other:?}"),
            }
        }

        let (header, _) = scheme.encrypt(&mut rng, &bpk, &[1]).expect("encrypt");
        let sk = keys.secret_key(1).expect("secret key");
        let apk = keys.public_key.advertiser_public_key(1).expect("apk");
        assert!(matches!(
            scheme.decrypt(sk, &[1, 1], &header, &apk),
            Err(Error::InvalidSubset(SubsetError::Duplicate { index: 1 }))
        ));
    }

    #[test]
    fn mismatched_keys_are_rejected() {
        let keys = setup(4, 31);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let scheme = Scheme::new();
        let mut rng = StdRng::seed_from_u64(32);
        let (header, _) = scheme.encrypt(&mut rng, &bpk, &[1, 2]).expect("encrypt");

        let sk = keys.secret_key(1).expect("secret key");
        let apk = keys.public_key.advertiser_public_key(2).expect("apk");
        assert!(matches!(
            scheme.decrypt(sk, &[1, 2], &header, &apk),
            Err(Error::KeyMismatch {
                secret: 1,
                public: 2
            })
        ));
    }

    #[test]
    fn receiver_outside_the_power_universe_is_rejected() {
        let keys = setup(4, 35);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let scheme = Scheme::new();
        let mut rng = StdRng::seed_from_u64(36);
        let (header, _) = scheme.encrypt(&mut rng, &bpk, &[1]).expect("encrypt");

        let valid = keys.public_key.advertiser_public_key(4).expect("apk");
        let apk = AdvertiserPublicKey {
            index: 5,
            ..valid.clone()
        };
        let sk = AdvertiserSecretKey {
            index: 5,
            d_i: keys.secret_key(4).expect("secret key").d_i,
        };
        assert!(matches!(
            scheme.decrypt(&sk, &[1], &header, &apk),
            Err(Error::ReceiverOutOfRange {
                index: 5,
                receivers: 4
            })
        ));
    }

    #[test]
    fn entropy_failure_aborts_setup_and_encrypt() {
        let scheme = Scheme::new();
        let params = BroadcastParameters::for_receivers(4).expect("params");
        assert!(matches!(
            scheme.setup(&mut FailingRng, &params),
            Err(Error::EntropyFailure(_))
        ));

        let keys = setup(4, 41);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        assert!(matches!(
            scheme.encrypt(&mut FailingRng, &bpk, &[1]),
            Err(Error::EntropyFailure(_))
        ));
    }

    #[test]
    fn seeded_setup_is_reproducible() {
        let first = setup(6, 51);
        let second = setup(6, 51);
        let other = setup(6, 52);
        assert_eq!(first.public_key.p_powers, second.public_key.p_powers);
        assert_eq!(first.public_key.q_powers, second.public_key.q_powers);
        assert_eq!(first.public_key.v, second.public_key.v);
        assert_ne!(first.public_key.v, other.public_key.v);
    }

    #[test]
    fn sender_and_members_derive_the_same_symmetric_key() {
        let keys = setup(5, 61);
        let bpk = keys.public_key.broadcast_public_key().expect("bpk");
        let subset = [2usize, 5];
        let mut rng = StdRng::seed_from_u64(62);
        let (header, session) = Scheme::new()
            .encrypt(&mut rng, &bpk, &subset)
            .expect("encrypt");

        let context = "bgw scheme test payload key";
        let sender = session.derive_symmetric_key(context).expect("derive");
        for i in subset {
            let receiver = decrypt_as(&keys, i, &subset, &header)
                .derive_symmetric_key(context)
                .expect("derive");
            assert_eq!(sender, receiver);
        }
        let outsider = decrypt_as(&keys, 3, &subset, &header)
            .derive_symmetric_key(context)
            .expect("derive");
        assert_ne!(sender, outsider);
    }

    #[test]
    fn zero_receivers_fail_before_sampling() {
        let params = BroadcastParameters {
            receivers: 0,
            backend: crate::BackendConfig::compiled(),
        };
        assert!(matches!(
            Scheme::new().setup(&mut FailingRng, &params),
            Err(Error::InvalidConfig(_))
        ));
    }
}
