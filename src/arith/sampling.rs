use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;

use crate::{CurvePoint, FieldElement, errors::Error};

/// Draws a 32-byte seed from `rng` and expands it with ChaCha20.
///
/// This is the only place the caller's entropy source is touched, so a
/// failing source surfaces as [`Error::EntropyFailure`] before any key
/// material is computed.
pub fn seeded_rng<R: RngCore + ?Sized>(rng: &mut R) -> Result<ChaCha20Rng, Error> {
    let mut seed = [0u8; 32];
    rng.try_fill_bytes(&mut seed)
        .map_err(|e| Error::EntropyFailure(e.to_string()))?;
    Ok(ChaCha20Rng::from_seed(seed))
}

/// Samples a uniformly random nonzero scalar.
pub fn sample_nonzero_scalar<F: FieldElement, R: RngCore + ?Sized>(rng: &mut R) -> F {
    loop {
        let scalar = F::random(rng);
        if !scalar.is_zero() {
            return scalar;
        }
    }
}

/// Samples a uniformly random non-identity point together with its discrete
/// log relative to the group generator.
pub fn sample_point<F, C, R>(rng: &mut R) -> (F, C)
where
    F: FieldElement,
    C: CurvePoint<F>,
    R: RngCore + ?Sized,
{
    let scalar = sample_nonzero_scalar::<F, R>(rng);
    (scalar, C::generator().mul_scalar(&scalar))
}
