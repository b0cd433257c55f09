//! Arkworks BLS12-381 group operations.
//!
//! Implements [`CurvePoint`] for G1 and G2 and [`TargetGroup`] for the
//! pairing target group. Only available with the `ark_bls12381` feature.

use ark_bls12_381::{Bls12_381, G1Projective, G2Projective};
use ark_ec::PrimeGroup;
use ark_ec::pairing::PairingOutput;
use ark_ff::{PrimeField, Zero};
use ark_serialize::CanonicalSerialize;

use crate::{BackendError, CurvePoint, Fr, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;

/// Target group type for the Arkworks BLS12-381 backend.
pub type Gt = PairingOutput<Bls12_381>;

impl CurvePoint<Fr> for G1 {
    fn identity() -> Self {
        G1Projective::zero()
    }

    fn generator() -> Self {
        <G1Projective as PrimeGroup>::generator()
    }

    fn is_identity(&self) -> bool {
        <G1Projective as Zero>::is_zero(self)
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        *self * *scalar
    }
}

impl CurvePoint<Fr> for G2 {
    fn identity() -> Self {
        G2Projective::zero()
    }

    fn generator() -> Self {
        <G2Projective as PrimeGroup>::generator()
    }

    fn is_identity(&self) -> bool {
        <G2Projective as Zero>::is_zero(self)
    }

    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        *self * *scalar
    }
}

impl TargetGroup for Gt {
    type Scalar = Fr;

    fn identity() -> Self {
        <Gt as Zero>::zero()
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        self.mul_bigint(scalar.into_bigint())
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn to_repr(&self) -> Result<Vec<u8>, BackendError> {
        let mut bytes = Vec::new();
        self.serialize_compressed(&mut bytes)
            .map_err(|_| BackendError::Serialization("invalid GT element"))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use ark_ec::pairing::Pairing;

    use super::*;

    fn pairing_base() -> Gt {
        Bls12_381::pairing(
            <G1Projective as PrimeGroup>::generator(),
            <G2Projective as PrimeGroup>::generator(),
        )
    }

    #[test]
    fn identity_encodes_at_full_width() {
        let identity = <Gt as TargetGroup>::identity().to_repr().expect("identity encodes");
        let base = pairing_base().to_repr().expect("generator encodes");
        assert_eq!(identity.len(), 576);
        assert_eq!(identity.len(), base.len());
        assert_ne!(identity, base);
    }

    #[test]
    fn combining_with_the_inverse_encodes_as_identity() {
        let base = pairing_base();
        let cancelled = base.combine(&base.negate());
        assert_eq!(
            cancelled.to_repr().expect("encodes"),
            <Gt as TargetGroup>::identity().to_repr().expect("encodes")
        );
    }
}
