use super::*;

use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// The error type returned by [Cascade]'s [FromStr] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCascadeError;

impl Display for ParseCascadeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "invalid cascade literal")
  }
}

impl std::error::Error for ParseCascadeError {}

impl<const N: usize> FromStr for Cascade<N> {
  type Err = ParseCascadeError;

  /// Parse a decimal literal in the same grammar as [f64]'s [FromStr]: optional sign, digits
  /// with an optional point, optional `e`/`E` exponent, plus the specials `inf`, `infinity`,
  /// and `nan` in any case.
  ///
  /// The mantissa is accumulated digit by digit in full cascade precision, then scaled by the
  /// appropriate power of ten, so the result is within a few [ulps](Cascade::EPSILON) of the
  /// value the literal denotes. Literals whose value overflows the width parse to infinity,
  /// and ones below the underflow threshold parse to zero.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (sign, rest) = match s.as_bytes().first() {
      Some(b'+') => (1.0, &s[1..]),
      Some(b'-') => (-1.0, &s[1..]),
      _ => (1.0, s),
    };

    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
      return Ok(Self::INFINITY.mul_f64(sign));
    }
    if rest.eq_ignore_ascii_case("nan") {
      return Ok(Self::NAN);
    }

    let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
      Some((m, e)) => (m, Some(e)),
      None => (rest, None),
    };

    let mut r = Self::ZERO;
    let mut seen_digit = false;
    let mut seen_point = false;
    let mut frac_digits = 0i64;
    for b in mantissa.bytes() {
      match b {
        b'0'..=b'9' => {
          r = r.mul_f64(10.0) + Self::from(f64::from(b - b'0'));
          seen_digit = true;
          if seen_point {
            frac_digits += 1;
          }
        }
        b'.' if !seen_point => seen_point = true,
        _ => return Err(ParseCascadeError),
      }
    }
    if !seen_digit {
      return Err(ParseCascadeError);
    }

    let mut exp10 = 0i64;
    if let Some(e) = exponent {
      let (esign, edigits) = match e.as_bytes().first() {
        Some(b'+') => (1, &e[1..]),
        Some(b'-') => (-1, &e[1..]),
        _ => (1, e),
      };
      if edigits.is_empty() {
        return Err(ParseCascadeError);
      }
      for b in edigits.bytes() {
        match b {
          // Saturate well past any representable magnitude; the power of ten below then
          // overflows or underflows as the value itself would.
          b'0'..=b'9' => exp10 = (exp10 * 10 + i64::from(b - b'0')).min(100_000),
          _ => return Err(ParseCascadeError),
        }
      }
      exp10 *= esign;
    }

    let scale = exp10 - frac_digits;
    // A zero mantissa is zero whatever the exponent says; scaling it by an overflowed power
    // of ten would produce 0 · ∞.
    if scale != 0 && !r.is_zero() {
      r = r * Self::from(10.0).powi(scale as i32);
    }
    Ok(r.mul_f64(sign))
  }
}
