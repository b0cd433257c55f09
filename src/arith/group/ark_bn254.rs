//! Arkworks BN254 group operations.
//!
//! Implements [`CurvePoint`] for G1 and G2 and [`TargetGroup`] for the
//! pairing target group. Only available with the `ark_bn254` feature.

use ark_bn254::{Bn254, G1Projective, G2Projective};
use ark_ec::PrimeGroup;
use ark_ec::pairing::PairingOutput;
use ark_ff::{PrimeField, Zero};
use ark_serialize::CanonicalSerialize;

use crate::{BackendError, CurvePoint, Fr, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;

/// Target group type for the Arkworks BN254 backend.
pub type Gt = PairingOutput<Bn254>;

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
