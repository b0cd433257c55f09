use std::fmt::Debug;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use self::blst_bls12_381::PairingEngine;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use self::ark_bls12_381::PairingEngine;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use self::ark_bn254::PairingEngine;

use crate::{CurvePoint, FieldElement, TargetGroup};

/// Main backend trait that ties together all group operations.
///
/// This is the Group Provider consumed by the broadcast scheme: two source
/// groups, a target group and a bilinear, non-degenerate pairing between them.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field type (Fr)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group
/// - `Target`: The pairing target group (GT)
///
/// # Example
///
/// ```rust
/// use bgw::{CurvePoint, Fr, G1, G2, PairingBackend, PairingEngine};
///
/// let g1 = <G1 as CurvePoint<Fr>>::generator();
/// let g2 = <G2 as CurvePoint<Fr>>::generator();
///
/// // Compute pairing: e(G1, G2) -> GT
/// let result = PairingEngine::pairing(&g1, &g2);
/// # let _ = result;
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;
}
