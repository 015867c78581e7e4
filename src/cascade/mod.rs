//! This module and its submodules contain a software implementation of floating-point cascade
//! arithmetic: numbers represented as an unevaluated sum of `N` doubles ("limbs") of rapidly
//! decreasing magnitude.
//!
//! The representation invariant, maintained by every constructor and operation:
//!
//!   - Limbs are ordered by decreasing magnitude, and adjacent limbs do not overlap:
//!     `|limb[i+1]| <= ulp(limb[i]) / 2`.
//!   - `limb[0]` is the double nearest the represented value (so a cascade is zero iff
//!     `limb[0] == 0.0`).
//!   - NaN and ±∞ live in `limb[0]`, with all trailing limbs zero.
//!
//! Operations compute an exact intermediate *expansion* (Shewchuk) out of error-free transforms,
//! then renormalize back down to `N` limbs; see [renorm] for the details.

use crate::eft::{two_sum, quick_two_sum, two_prod, two_sqr};

/// A floating-point cascade of `N` doubles, carrying a `53·N`-bit significand.
///
/// `N` may be 2, 3, or 4 (checked at compile time). Prefer the aliases [dd](crate::dd),
/// [td](crate::td), [qd](crate::qd).
///
/// ```
/// # use soft_cascade::Cascade;
/// type Foo = Cascade<2>;  // double-double, 106-bit significand
/// type Bar = Cascade<4>;  // quad-double, 212-bit significand
/// ```
#[derive(Clone, Copy)]
pub struct Cascade<const N: usize>([f64; N]);

/// Basics: accessors, classification predicates, abs/round, compile-time width guard.
mod basics;

/// The exact expansion accumulator and renormalization back to `N` limbs.
mod renorm;

/// Constants (π, e, ln 2, ... as frozen limb tables; derived constants computed from them).
mod consts;

/// Numeric limits (epsilon, max, min positive, ...).
mod limits;

/// Comparisons.
mod cmp;

/// Conversions from/to floats, integers, and other cascade widths.
mod convert;

/// Arithmetic operators.
mod ops;

/// Elementary functions (sqrt, exp, log, trigonometric, hyperbolic, powers).
mod math;

/// `Debug`/`Display` and decimal digit extraction.
mod fmt;

/// `FromStr`.
mod parse;

pub use parse::ParseCascadeError;

/// Conversion to [malachite::rational::Rational], the exact oracle the tests check every
/// operation against.
#[cfg(test)]
pub(crate) mod rational;


/// End-to-end accuracy scenarios on classically ill-conditioned problems.
#[cfg(test)]
mod scenarios;

/// The error type returned by the `checked_*` arithmetic variants when the operand is outside
/// the operation's domain. The unchecked variants return NaN (or a signed infinity) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
  /// `checked_div`: the divisor is zero.
  DivisionByZero,
  /// `checked_sqrt`: the operand is negative.
  NegativeSqrt,
  /// `checked_ln` (and friends): the operand is zero or negative.
  NonPositiveLog,
}

impl core::fmt::Display for DomainError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::DivisionByZero => write!(f, "division by zero"),
      Self::NegativeSqrt => write!(f, "square root of a negative number"),
      Self::NonPositiveLog => write!(f, "logarithm of a non-positive number"),
    }
  }
}

impl std::error::Error for DomainError {}
