//! Group Provider abstractions and implementations.
//!
//! This module provides trait abstractions for the pairing primitives used by the
//! broadcast scheme, allowing multiple backend implementations (blstrs, Arkworks)
//! to provide unified interfaces.
//!
//! - **`field`**: Scalar field (Fr) sampling
//! - **`group`**: Curve point operations (G1, G2) and the target group (GT)
//! - **`pairing`**: Bilinear pairing `e(G1, G2) -> GT`
//! - **`sampling`**: Fallible seeding from a caller RNG and nonzero sampling
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve |
//! |---------|---------|-------|
//! | `blst` (default) | blstrs | BLS12-381 |
//! | `ark_bls12381` | Arkworks | BLS12-381 |
//! | `ark_bn254` | Arkworks | BN254 |

mod field;
pub use self::field::*;

mod group;
pub use self::group::*;

mod pairing;
pub use self::pairing::*;

mod sampling;
pub use self::sampling::*;
