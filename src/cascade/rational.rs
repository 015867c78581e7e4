use super::*;

use core::str::FromStr;

use malachite::Integer;
use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Abs, Pow, PowerOf2};

/// The error type returned when a [Cascade] cannot be converted to a [Rational] because it is
/// NaN or infinite.
#[derive(Debug, PartialEq, Eq)]
pub struct NotFinite;

impl<const N: usize> TryFrom<Cascade<N>> for Rational {
  type Error = NotFinite;

  /// A finite cascade is *exactly* the sum of its limbs, each of which is exactly a rational.
  fn try_from(value: Cascade<N>) -> Result<Self, Self::Error> {
    if !value.is_finite() { return Err(NotFinite) }
    let mut sum = Rational::from(0);
    for limb in value.limbs() {
      sum += Rational::try_from(limb).map_err(|_| NotFinite)?;
    }
    Ok(sum)
  }
}

/// Parse a decimal literal (`-12.345e-6`) into the exact rational it denotes. Panics on
/// malformed input; this is test scaffolding for reference values.
pub fn rational_from_decimal(s: &str) -> Rational {
  let (mantissa, exp10) = match s.split_once(['e', 'E']) {
    Some((m, e)) => (m, i64::from_str(e).unwrap()),
    None => (s, 0),
  };
  let (int_part, frac_part) = match mantissa.split_once('.') {
    Some((i, f)) => (i, f),
    None => (mantissa, ""),
  };
  let digits = format!("{int_part}{frac_part}");
  let numerator = Integer::from_str(&digits).unwrap();
  let scale = exp10 - frac_part.len() as i64;
  Rational::from(numerator) * Rational::from(10).pow(scale)
}

/// Check that `value` agrees with the exact value `exact` to a relative error of at most
/// 2<sup>-bits</sup>. An exact zero must be hit exactly.
pub fn agrees_to_bits<const N: usize>(value: Cascade<N>, exact: &Rational, bits: u32) -> bool {
  let Ok(rv) = Rational::try_from(value) else { return false };
  if *exact == Rational::from(0) {
    return value.is_zero()
  }
  let err = (rv - exact).abs();
  err <= exact.abs() * Rational::power_of_2(-(bits as i64))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dd, qd};

  #[test]
  fn cascade_to_rational() {
    assert_eq!(Rational::try_from(dd::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(dd::from(1.5)), Ok(Rational::from_signeds(3, 2)));
    assert_eq!(
      Rational::try_from(dd::from_limbs([1.0, f64::EPSILON / 2.0])),
      Ok(Rational::from(1) + Rational::power_of_2(-53i64)),
    );
    assert_eq!(Rational::try_from(dd::NAN), Err(NotFinite));
    assert_eq!(Rational::try_from(qd::INFINITY), Err(NotFinite));
  }

  #[test]
  fn decimal_literals() {
    assert_eq!(rational_from_decimal("0.5"), Rational::from_signeds(1, 2));
    assert_eq!(rational_from_decimal("-12.25"), Rational::from_signeds(-49, 4));
    assert_eq!(rational_from_decimal("3e2"), Rational::from(300));
    assert_eq!(rational_from_decimal("1.5e-3"), Rational::from_signeds(3, 2000));
    assert_eq!(rational_from_decimal("42"), Rational::from(42));
  }

  #[test]
  fn agreement() {
    let third = Rational::from_signeds(1, 3);
    let x = dd::ONE / dd::from(3.0);
    assert!(agrees_to_bits(x, &third, 100));
    assert!(!agrees_to_bits(x, &third, 130));  // dd only carries 106 bits
    assert!(agrees_to_bits(dd::ZERO, &Rational::from(0), 10));
    assert!(!agrees_to_bits(dd::NAN, &third, 1));
  }
}
