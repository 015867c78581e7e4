use super::*;

impl<const N: usize> Cascade<N> {
  /// Long division: peel off `N + 1` quotient terms, each the double quotient of the current
  /// remainder's leading limb, subtracting `q_k · rhs` from the remainder *exactly* between
  /// terms. The terms decay by ~2^-53 each, so renormalizing them gives a result accurate to
  /// beyond the last limb.
  pub(crate) fn div(self, rhs: Self) -> Self {
    if self.is_nan() || rhs.is_nan() {
      return Self::NAN;
    }
    if rhs.is_zero() {
      // 0/0 is NaN; x/0 is a signed infinity, as for doubles.
      return if self.is_zero() {
        Self::NAN
      } else {
        Self::from_f64_raw(f64::INFINITY.copysign(self.0[0] * rhs.0[0].signum()))
      };
    }
    if !self.is_finite() || !rhs.is_finite() {
      return Self::from_f64_raw(self.0[0] / rhs.0[0]);
    }

    let mut q = [0.0; 5];
    let mut r = self;
    for k in 0..=N {
      let qk = r.0[0] / rhs.0[0];
      if !qk.is_finite() {
        // Overflow on the first term (or a remainder driven out of range).
        return Self::from_f64_raw(self.0[0] / rhs.0[0]);
      }
      q[k] = qk;
      if k < N {
        r = r - rhs.mul_f64(qk);
      }
    }
    Self::from_terms(&q[..=N])
  }

  /// Division by a plain double.
  pub(crate) fn div_f64(self, rhs: f64) -> Self {
    self.div(Self::from(rhs))
  }

  /// Reciprocal.
  #[inline]
  pub fn recip(self) -> Self {
    Self::ONE.div(self)
  }

  /// Division that reports a zero divisor instead of returning NaN/∞.
  pub fn checked_div(self, rhs: Self) -> Result<Self, DomainError> {
    if rhs.is_zero() {
      Err(DomainError::DivisionByZero)
    } else {
      Ok(self.div(rhs))
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::{dd, td, qd, DomainError};

  mod div { use super::super::super::mk_tests; mk_tests!{/, /=, 6} }

  #[test]
  fn exact_quotients() {
    assert_eq!(dd::from(3.0) / dd::from(2.0), dd::from(1.5));
    assert_eq!(qd::from(1.0) / qd::from(-4.0), qd::from(-0.25));
    assert_eq!(td::PI / td::PI, td::ONE);
    assert_eq!(dd::from(2.0).recip(), dd::from(0.5));
  }

  #[test]
  fn by_zero() {
    assert!((dd::ZERO / dd::ZERO).is_nan());
    assert_eq!(dd::ONE / dd::ZERO, dd::INFINITY);
    assert_eq!(dd::NEG_ONE / dd::ZERO, dd::NEG_INFINITY);
    assert_eq!(dd::ONE / dd::from(-0.0), dd::NEG_INFINITY);
    assert_eq!(qd::INFINITY / qd::ZERO, qd::INFINITY);
  }

  #[test]
  fn specials() {
    assert!((dd::NAN / dd::ONE).is_nan());
    assert!((dd::ONE / dd::NAN).is_nan());
    assert_eq!(qd::INFINITY / qd::from(2.0), qd::INFINITY);
    assert_eq!(qd::ONE / qd::INFINITY, qd::ZERO);
    assert!((qd::INFINITY / qd::INFINITY).is_nan());
  }

  #[test]
  fn checked() {
    assert_eq!(dd::ONE.checked_div(dd::ZERO), Err(DomainError::DivisionByZero));
    assert_eq!(dd::from(3.0).checked_div(dd::from(2.0)), Ok(dd::from(1.5)));
  }

  use proptest::prelude::*;

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn mul_undoes_div(a in qd::cases_proptest(), b in qd::cases_proptest_nonzero()) {
      // (a/b)·b recovers a to within a few ulps of the last limb.
      let roundtrip = (a / b) * b;
      let err = (roundtrip - a).abs();
      prop_assert!(err <= a.abs().mul_f64(qd::EPSILON * 16.0), "{:?} {:?}", a, b);
    }

    #[test]
    fn one_third_times_three(k in -300..300i32) {
      let three = dd::from(3.0).ldexp(k);
      let third = dd::ONE / three;
      let err = (third * three - dd::ONE).abs();
      prop_assert!(err <= dd::from(dd::EPSILON));
    }
  }
}
