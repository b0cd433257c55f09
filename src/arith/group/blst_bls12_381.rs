//! blst-backed group types for BLS12-381.
//!
//! Exported types:
//! - `G1`, `G2` - projective source group points
//! - `Gt` - the pairing target group
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::{Compress, G1Projective, G2Projective, Gt as BlstGt, Scalar};
use group::Group;

use crate::{BackendError, CurvePoint, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;
pub type Gt = BlstGt;

const GT_COMPRESSED_LEN: usize = 288;

/// Encoding of the identity, which has no torus compression.
///
/// A canonical Fp encoding has its most significant byte below `0x1a`, so an
/// all-`0xff` block never matches the compression of another element.
const GT_IDENTITY_REPR: [u8; GT_COMPRESSED_LEN] = [0xff; GT_COMPRESSED_LEN];

impl CurvePoint<Scalar> for G1 {
    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }
}

impl CurvePoint<Scalar> for G2 {
    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        self * scalar
    }
}

impl TargetGroup for Gt {
    type Scalar = Scalar;

    fn identity() -> Self {
        <Gt as Group>::identity()
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        *self * *scalar
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn to_repr(&self) -> Result<Vec<u8>, BackendError> {
        if bool::from(<Gt as Group>::is_identity(self)) {
            return Ok(GT_IDENTITY_REPR.to_vec());
        }
        let mut bytes = Vec::with_capacity(GT_COMPRESSED_LEN);
        self.write_compressed(&mut bytes)
            .map_err(|_| BackendError::Serialization("gt serialization failure"))?;
        Ok(bytes)
    }
}
