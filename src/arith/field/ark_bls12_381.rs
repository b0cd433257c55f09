use ark_bls12_381::Fr as ArkFr;
use ark_ff::{UniformRand, Zero};
use rand_core::RngCore;

use crate::FieldElement;

pub type Fr = ArkFr;

impl FieldElement for Fr {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fr::rand(rng)
    }

    fn is_zero(&self) -> bool {
        <Fr as Zero>::is_zero(self)
    }

    fn from_u64(n: u64) -> Self {
        Fr::from(n)
    }
}
