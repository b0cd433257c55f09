//! blst-backed scalar field for BLS12-381.
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::Scalar;
use ff::Field;
use rand_core::RngCore;

use crate::FieldElement;

pub type Fr = Scalar;

impl FieldElement for Scalar {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn is_zero(&self) -> bool {
        <Scalar as Field>::is_zero(self).into()
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }
}
