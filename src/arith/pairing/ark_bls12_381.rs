use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;

use crate::{Fr, G1, G2, Gt, PairingBackend};

#[derive(Clone, Copy, Debug, Default)]
pub struct PairingEngine;

impl PairingBackend for PairingEngine {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Bls12_381::pairing(g1, g2)
    }
}
