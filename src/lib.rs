//! This crate provides a correct, clean, and flexible software implementation of
//! *floating-point cascade* (a.k.a. multi-double) arithmetic: double-double, triple-double, and
//! quad-double numbers.
//!
//! # Introduction
//!
//! A cascade represents a value as the unevaluated sum of 2, 3, or 4 IEEE-754 doubles of rapidly
//! decreasing magnitude, giving roughly 32, 48, or 64 significant decimal digits while staying on
//! the hardware FPU. All core operations are built from *error-free transformations*: short
//! sequences of native adds and multiplies that recover their own rounding error exactly.
//!
//! The following references cover the underlying algorithms:
//!
//!   - Dekker, *A floating-point technique for extending the available precision* (1971)
//!   - Shewchuk, *Adaptive precision floating-point arithmetic* (1997)
//!   - Hida, Li, Bailey, *Algorithms for quad-double precision floating point arithmetic* (2001)
//!
//! Correctness is ensured via extensive testing against an exact rational oracle.
//!
//! # Usage
//!
//! ```
//! // Use the standard widths, or spell out the generic type.
//! # use soft_cascade::Cascade;
//! use soft_cascade::{dd, td, qd};  // 2, 3, and 4 limbs
//! type MyCascade = Cascade<3>;
//!
//! // Create cascades from floats, ints, strings, constants, or raw limbs.
//! let a = dd::from(2.75_f64);
//! let b: dd = "3.14159265358979323846264338327950288".parse().unwrap();
//! let c = qd::PI;
//! let d = dd::from_limbs([1.0, f64::EPSILON / 2.0]);
//!
//! // Perform arithmetic and comparisons with the usual operators.
//! assert_eq!(dd::from(0.5) + dd::from(0.25), dd::from(0.75));
//! assert_eq!(a - a, dd::ZERO);
//! assert!(dd::ONE < d);
//!
//! // The leading limb is the nearest double to the represented value.
//! assert_eq!(qd::PI.to_f64(), std::f64::consts::PI);
//! ```
//!
//! # Precision
//!
//! | Alias | Limbs | Significand | ≈ decimal digits |
//! |-------|-------|-------------|------------------|
//! | [dd]  | 2     | 106 bits    | 31               |
//! | [td]  | 3     | 159 bits    | 47               |
//! | [qd]  | 4     | 212 bits    | 63               |
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod cascade;
mod eft;
pub mod instrument;

pub use cascade::{Cascade, DomainError, ParseCascadeError};

/// Double-double: a cascade of 2 limbs (106-bit significand).
#[allow(non_camel_case_types)]
pub type dd = Cascade<2>;

/// Triple-double: a cascade of 3 limbs (159-bit significand).
#[allow(non_camel_case_types)]
pub type td = Cascade<3>;

/// Quad-double: a cascade of 4 limbs (212-bit significand).
#[allow(non_camel_case_types)]
pub type qd = Cascade<4>;

#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x400} else {0x2000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
pub mod bench;
