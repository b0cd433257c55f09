use std::fmt::Debug;

use crate::{BackendError, FieldElement};

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use self::blst_bls12_381::{G1, G2, Gt};

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use self::ark_bls12_381::{G1, G2, Gt};

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use self::ark_bn254::{G1, G2, Gt};

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// Group operations are written additively: `add` is the group law and
/// `mul_scalar` is repeated addition.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use bgw::{CurvePoint, FieldElement, Fr, G1};
///
/// let mut rng = thread_rng();
/// let scalar = <Fr as FieldElement>::random(&mut rng);
///
/// let g = <G1 as CurvePoint<Fr>>::generator();
/// let point = CurvePoint::mul_scalar(&g, &scalar);
/// let doubled = CurvePoint::add(&point, &point);
/// # let _ = doubled;
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Send + Sync + Debug + PartialEq + 'static + Copy
{
    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;
}

/// Pairing target group (GT) abstraction.
///
/// The target group is written additively here as well: `combine` is the
/// group operation, `negate` the inverse and `mul_scalar` exponentiation.
pub trait TargetGroup: Clone + Send + Sync + Debug + PartialEq + 'static + Copy {
    /// Scalar field type for scalar multiplication.
    type Scalar: FieldElement;

    /// Returns the identity element.
    fn identity() -> Self;

    /// Performs scalar multiplication (exponentiation in multiplicative notation).
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;

    /// Combines two target group elements.
    fn combine(&self, other: &Self) -> Self;

    /// Returns the inverse element.
    fn negate(&self) -> Self;

    /// Canonical fixed-width compressed encoding.
    fn to_repr(&self) -> Result<Vec<u8>, BackendError>;
}
