use std::fmt::Debug;

use rand_core::RngCore;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use self::blst_bls12_381::Fr;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use self::ark_bls12_381::Fr;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use self::ark_bn254::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve. All
/// arithmetic is modulo the group order of the pairing groups.
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use bgw::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = <Fr as FieldElement>::random(&mut rng);
/// assert!(!FieldElement::is_zero(&Fr::from_u64(7)));
/// # let _ = a;
/// ```
pub trait FieldElement: Clone + Send + Sync + Debug + PartialEq + 'static + Copy {
    /// Generates a uniformly random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Returns `true` for the additive identity.
    fn is_zero(&self) -> bool;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;
}
